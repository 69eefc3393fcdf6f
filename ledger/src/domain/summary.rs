use crate::domain::models::TransactionType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub current_balance: f64,
}

impl Summary {
    /// Folds `(amount, transaction_type)` totals into a summary.
    /// Anything that is not `income` lands in expenses.
    pub fn from_totals<'a, I>(totals: I) -> Self
    where
        I: IntoIterator<Item = (f64, &'a str)>,
    {
        let (income, expense) =
            totals
                .into_iter()
                .fold((0.0, 0.0), |(income, expense), (amount, kind)| {
                    if kind == TransactionType::Income.as_str() {
                        (income + amount, expense)
                    } else {
                        (income, expense + amount)
                    }
                });

        Summary {
            total_income: income,
            total_expenses: expense,
            current_balance: income - expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        assert_eq!(Summary::from_totals([]), Summary::default());
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_totals([(100.0, "income"), (40.0, "expense"), (10.0, "expense")]);
        assert_eq!(
            summary,
            Summary {
                total_income: 100.0,
                total_expenses: 50.0,
                current_balance: 50.0,
            }
        );
    }

    #[test]
    fn test_unexpected_type_counts_as_expense() {
        let summary = Summary::from_totals([(20.0, "income"), (30.0, "transfer")]);
        assert_eq!(summary.total_expenses, 30.0);
        assert_eq!(summary.current_balance, -10.0);
    }
}
