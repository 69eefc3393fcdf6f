use crate::domain::pagination::Pagination;
use crate::domain::summary::Summary;
use crate::domain::validation::{is_present, ValidationErrors, Validator};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Spender {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<PgRow> for Spender {
    fn from(row: PgRow) -> Self {
        Spender {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpender {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpenderBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SpenderBody {
    pub fn validate(self) -> Result<NewSpender, ValidationErrors> {
        let mut v = Validator::new();
        let name = v
            .field("Name")
            .required(is_present(self.name.as_deref()))
            .valid(self.name);
        let email = v
            .field("Email")
            .required(is_present(self.email.as_deref()))
            .valid(self.email);

        match (name, email) {
            (Some(name), Some(email)) => Ok(NewSpender { name, email }),
            _ => Err(v.into_errors()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const VALUES: [&'static str; 2] = ["income", "expense"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown transaction type {0:?}")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub transaction_type: TransactionType,
    pub note: String,
    pub image_url: String,
    pub spender_id: i64,
}

impl<'r> FromRow<'r, PgRow> for Transaction {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let transaction_type: String = row.try_get("transaction_type")?;
        let transaction_type =
            transaction_type
                .parse()
                .map_err(|err: UnknownTransactionType| sqlx::Error::ColumnDecode {
                    index: "transaction_type".to_string(),
                    source: Box::new(err),
                })?;

        Ok(Transaction {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            amount: row.try_get("amount")?,
            category: row.try_get("category")?,
            transaction_type,
            note: row.try_get("note")?,
            image_url: row.try_get("image_url")?,
            spender_id: row.try_get("spender_id")?,
        })
    }
}

/// The mutable part of a transaction, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub transaction_type: TransactionType,
    pub note: String,
    pub image_url: String,
}

/// Accepts a plain date, `YYYY-MM-DD HH:MM:SS`, or an RFC 3339 timestamp.
/// Timestamps keep only their calendar day.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => parse_date(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("date {value:?} is not a date or timestamp"))),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionBody {
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub transaction_type: Option<String>,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub spender_id: Option<i64>,
}

impl TransactionBody {
    /// Runs the shared rules. Yields the details only when none of them broke.
    fn check(self, v: &mut Validator) -> Option<TransactionDetails> {
        let kind = self.transaction_type.as_deref();

        let date = v.field("Date").required(self.date.is_some()).valid(self.date);
        let amount = v
            .field("Amount")
            .required(self.amount.is_some())
            .gt(self.amount, 0.0)
            .valid(self.amount);
        let category = v
            .field("Category")
            .required(is_present(self.category.as_deref()))
            .valid(self.category);
        let transaction_type = v
            .field("TransactionType")
            .required(is_present(kind))
            .one_of(kind, &TransactionType::VALUES)
            .valid(kind.and_then(|k| k.parse::<TransactionType>().ok()));

        Some(TransactionDetails {
            date: date?,
            amount: amount?,
            category: category?,
            transaction_type: transaction_type?,
            note: self.note.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
        })
    }

    /// Rules for a new transaction: the details plus an owning spender.
    pub fn validate_new(self) -> Result<(i64, TransactionDetails), ValidationErrors> {
        let spender_id = self.spender_id;
        let mut v = Validator::new();
        let details = self.check(&mut v);
        let spender_id = v
            .field("SpenderID")
            .required(spender_id.is_some())
            .valid(spender_id);

        match (spender_id, details) {
            (Some(spender_id), Some(details)) => Ok((spender_id, details)),
            _ => Err(v.into_errors()),
        }
    }

    /// Rules for an update. The owning spender never changes, so `spender_id` is ignored.
    pub fn validate_update(self) -> Result<TransactionDetails, ValidationErrors> {
        let mut v = Validator::new();
        match self.check(&mut v) {
            Some(details) => Ok(details),
            None => Err(v.into_errors()),
        }
    }
}

/// One page of a spender's transactions as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub total_rows: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub pagination: Pagination,
}
