#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::domain::models::*;
    use crate::domain::pagination::{PageRequest, Pagination};
    use crate::domain::repository::{MockSpenderRepository, MockTransactionRepository};
    use crate::domain::summary::Summary;
    use crate::domain::validation::ValidationErrors;
    use crate::infra::config::FeatureFlag;
    use crate::service::spender::SpenderService;
    use crate::service::transaction::TransactionService;
    use crate::service::AppError;
    use anyhow::Result;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn enabled() -> FeatureFlag {
        FeatureFlag {
            enable_create_spender: true,
        }
    }

    fn spender_service(
        flags: FeatureFlag,
        spender_repo: MockSpenderRepository,
        transaction_repo: MockTransactionRepository,
    ) -> SpenderService {
        SpenderService::new(flags, Arc::new(spender_repo), Arc::new(transaction_repo))
    }

    fn lunch(id: i64) -> Transaction {
        Transaction {
            id,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            amount: 40.0,
            category: "food".to_string(),
            transaction_type: TransactionType::Expense,
            note: "lunch".to_string(),
            image_url: "".to_string(),
            spender_id: 1,
        }
    }

    #[tokio::test]
    async fn test_service_create_spender() -> Result<()> {
        let mut spender_repo = MockSpenderRepository::new();
        spender_repo
            .expect_create()
            .with(eq(NewSpender {
                name: "HongJot".to_string(),
                email: "hong@jot.ok".to_string(),
            }))
            .times(1)
            .returning(|sp| {
                Ok(Spender {
                    id: 1,
                    name: sp.name,
                    email: sp.email,
                })
            });

        let service = spender_service(enabled(), spender_repo, MockTransactionRepository::new());
        let spender = service
            .create(SpenderBody {
                name: Some("HongJot".to_string()),
                email: Some("hong@jot.ok".to_string()),
            })
            .await?;

        assert_eq!(spender.id, 1);
        assert_eq!(spender.name, "HongJot");
        Ok(())
    }

    #[tokio::test]
    async fn test_service_create_spender_disabled() {
        let mut spender_repo = MockSpenderRepository::new();
        spender_repo.expect_create().never();

        let service = spender_service(
            FeatureFlag::default(),
            spender_repo,
            MockTransactionRepository::new(),
        );
        let err = service.create(SpenderBody::default()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::FeatureDisabled)
        ));
    }

    #[tokio::test]
    async fn test_service_find_spender() -> Result<()> {
        let mut spender_repo = MockSpenderRepository::new();
        spender_repo
            .expect_find()
            .with(eq(1))
            .returning(|id| Ok(Some(Spender { id, ..Default::default() })));
        spender_repo.expect_find().with(eq(2)).returning(|_| Ok(None));

        let service = spender_service(enabled(), spender_repo, MockTransactionRepository::new());

        assert_eq!(service.find(1).await?.id, 1);
        let err = service.find(2).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::SpenderNotFound)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_service_summary_is_stable() -> Result<()> {
        let mut transaction_repo = MockTransactionRepository::new();
        transaction_repo
            .expect_summary()
            .with(eq(1))
            .times(2)
            .returning(|_| Ok(Summary::from_totals([(100.0, "income"), (50.0, "expense")])));

        let service = spender_service(enabled(), MockSpenderRepository::new(), transaction_repo);

        let first = service.summary(1).await?;
        let second = service.summary(1).await?;
        assert_eq!(first, second);
        assert_eq!(first.summary.current_balance, 50.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_service_spender_transactions() -> Result<()> {
        let page = PageRequest { page: 1, per_page: 5 };
        let mut transaction_repo = MockTransactionRepository::new();
        transaction_repo
            .expect_by_spender()
            .with(eq(1), eq(page))
            .times(1)
            .returning(|_, _| {
                Ok(TransactionPage {
                    transactions: vec![lunch(1), lunch(2)],
                    summary: Summary::from_totals([(80.0, "expense")]),
                    total_rows: 2,
                })
            });

        let service = spender_service(enabled(), MockSpenderRepository::new(), transaction_repo);
        let resp = service.transactions(1, page).await?;

        assert_eq!(resp.transactions.len(), 2);
        assert_eq!(resp.summary.total_expenses, 80.0);
        assert_eq!(
            resp.pagination,
            Pagination {
                current_page: 1,
                total_pages: 1,
                per_page: 5,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_service_create_transaction_rejects_zero_amount() {
        let mut transaction_repo = MockTransactionRepository::new();
        transaction_repo.expect_create().never();

        let service = TransactionService::new(Arc::new(transaction_repo));
        let err = service
            .create(TransactionBody {
                date: NaiveDate::from_ymd_opt(2024, 6, 1),
                amount: Some(0.0),
                category: Some("food".to_string()),
                transaction_type: Some("expense".to_string()),
                spender_id: Some(1),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let errors = err.downcast_ref::<ValidationErrors>().unwrap();
        assert_eq!(
            errors.messages(),
            vec!["the value of Amount must be greater than 0".to_string()]
        );
    }

    #[tokio::test]
    async fn test_service_update_transaction() -> Result<()> {
        let mut transaction_repo = MockTransactionRepository::new();
        transaction_repo
            .expect_update()
            .with(eq(7), mockall::predicate::always())
            .returning(|id, details| {
                Ok(Some(Transaction {
                    id,
                    date: details.date,
                    amount: details.amount,
                    category: details.category,
                    transaction_type: details.transaction_type,
                    note: details.note,
                    image_url: details.image_url,
                    spender_id: 1,
                }))
            });
        transaction_repo
            .expect_update()
            .with(eq(8), mockall::predicate::always())
            .returning(|_, _| Ok(None));

        let service = TransactionService::new(Arc::new(transaction_repo));
        let body = TransactionBody {
            date: NaiveDate::from_ymd_opt(2024, 6, 2),
            amount: Some(1500.0),
            category: Some("salary".to_string()),
            transaction_type: Some("income".to_string()),
            ..Default::default()
        };

        let updated = service.update(7, body.clone()).await?;
        assert_eq!(updated.id, 7);
        assert_eq!(updated.transaction_type, TransactionType::Income);

        let err = service.update(8, body).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::TransactionNotFound)
        ));
        Ok(())
    }
}
