use crate::domain::models::{NewSpender, Spender};
use crate::domain::repository;
use async_trait::async_trait;
use sqlx::Error::RowNotFound;
use sqlx::{Pool, Postgres, Row};

#[derive(Clone)]
pub struct PgSpenderRepository {
    pub pool: Pool<Postgres>,
}

impl PgSpenderRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgSpenderRepository { pool }
    }
}

#[async_trait]
impl repository::SpenderRepository for PgSpenderRepository {
    async fn create(&self, spender: NewSpender) -> anyhow::Result<Spender> {
        let result = sqlx::query("INSERT INTO spender (name, email) VALUES ($1, $2) RETURNING id;")
            .bind(&spender.name)
            .bind(&spender.email)
            .fetch_one(&self.pool)
            .await?;

        Ok(Spender {
            id: result.try_get("id")?,
            name: spender.name,
            email: spender.email,
        })
    }

    async fn all(&self) -> anyhow::Result<Vec<Spender>> {
        let rows = sqlx::query("SELECT id, name, email FROM spender ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Spender::from).collect())
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Spender>> {
        let row = sqlx::query("SELECT id, name, email FROM spender WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await;
        match row {
            Ok(row) => Ok(Some(row.into())),
            Err(RowNotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
