use crate::domain::models::*;
use crate::domain::pagination::PageRequest;
use crate::domain::summary::Summary;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpenderRepository: Send + Sync {
    async fn create(&self, spender: NewSpender) -> anyhow::Result<Spender>;
    async fn all(&self) -> anyhow::Result<Vec<Spender>>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Spender>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn create(&self, spender_id: i64, details: TransactionDetails) -> anyhow::Result<Transaction>;
    /// `None` when no transaction has that id.
    async fn update(&self, id: i64, details: TransactionDetails) -> anyhow::Result<Option<Transaction>>;
    async fn all(&self) -> anyhow::Result<Vec<Transaction>>;
    async fn summary(&self, spender_id: i64) -> anyhow::Result<Summary>;
    /// Rows, summary and total count read from one snapshot.
    async fn by_spender(&self, spender_id: i64, page: PageRequest) -> anyhow::Result<TransactionPage>;
}
