use crate::domain::models::{Transaction, TransactionDetails, TransactionPage};
use crate::domain::pagination::PageRequest;
use crate::domain::repository;
use crate::domain::summary::Summary;
use async_trait::async_trait;
use sqlx::{PgExecutor, Pool, Postgres, Row};

const COLUMNS: &str = "id, date, amount, category, transaction_type, note, image_url, spender_id";

#[derive(Clone)]
pub struct PgTransactionRepository {
    pub pool: Pool<Postgres>,
}

impl PgTransactionRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgTransactionRepository { pool }
    }
}

async fn summarize<'e, E: PgExecutor<'e>>(executor: E, spender_id: i64) -> anyhow::Result<Summary> {
    let rows = sqlx::query(
        "SELECT SUM(amount) AS total, transaction_type FROM \"transaction\" WHERE spender_id = $1 GROUP BY transaction_type",
    )
    .bind(spender_id)
    .fetch_all(executor)
    .await?;

    let mut totals = Vec::with_capacity(rows.len());
    for row in &rows {
        let total: Option<f64> = row.try_get("total")?;
        let kind: String = row.try_get("transaction_type")?;
        totals.push((total.unwrap_or_default(), kind));
    }

    Ok(Summary::from_totals(
        totals.iter().map(|(total, kind)| (*total, kind.as_str())),
    ))
}

#[async_trait]
impl repository::TransactionRepository for PgTransactionRepository {
    async fn create(&self, spender_id: i64, details: TransactionDetails) -> anyhow::Result<Transaction> {
        let row = sqlx::query(
            "INSERT INTO \"transaction\" (date, amount, category, transaction_type, note, image_url, spender_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id;",
        )
        .bind(details.date)
        .bind(details.amount)
        .bind(&details.category)
        .bind(details.transaction_type.as_str())
        .bind(&details.note)
        .bind(&details.image_url)
        .bind(spender_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Transaction {
            id: row.try_get("id")?,
            date: details.date,
            amount: details.amount,
            category: details.category,
            transaction_type: details.transaction_type,
            note: details.note,
            image_url: details.image_url,
            spender_id,
        })
    }

    async fn update(&self, id: i64, details: TransactionDetails) -> anyhow::Result<Option<Transaction>> {
        let updated = sqlx::query_as::<_, Transaction>(&format!(
            "UPDATE \"transaction\" SET date = $1, amount = $2, category = $3, transaction_type = $4, note = $5, image_url = $6 \
             WHERE id = $7 RETURNING {COLUMNS};"
        ))
        .bind(details.date)
        .bind(details.amount)
        .bind(&details.category)
        .bind(details.transaction_type.as_str())
        .bind(&details.note)
        .bind(&details.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn all(&self) -> anyhow::Result<Vec<Transaction>> {
        let transactions =
            sqlx::query_as::<_, Transaction>(&format!("SELECT {COLUMNS} FROM \"transaction\" ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(transactions)
    }

    async fn summary(&self, spender_id: i64) -> anyhow::Result<Summary> {
        summarize(&self.pool, spender_id).await
    }

    async fn by_spender(&self, spender_id: i64, page: PageRequest) -> anyhow::Result<TransactionPage> {
        let limit = i64::try_from(page.per_page)?;
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let transactions = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {COLUMNS} FROM \"transaction\" WHERE spender_id = $1 ORDER BY id LIMIT $2 OFFSET $3"
        ))
        .bind(spender_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *tx)
        .await?;

        let summary = summarize(&mut *tx, spender_id).await?;

        let total_rows: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM \"transaction\" WHERE spender_id = $1")
                .bind(spender_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(TransactionPage {
            transactions,
            summary,
            total_rows,
        })
    }
}
