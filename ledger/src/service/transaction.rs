use crate::domain::models::{Transaction, TransactionBody};
use crate::domain::repository::TransactionRepository;
use crate::service::AppError;
use anyhow::Result;
use std::sync::Arc;

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepository>) -> TransactionService {
        TransactionService { transaction_repo }
    }

    pub async fn create(&self, body: TransactionBody) -> Result<Transaction> {
        let (spender_id, details) = body.validate_new()?;
        self.transaction_repo.create(spender_id, details).await
    }

    pub async fn update(&self, id: i64, body: TransactionBody) -> Result<Transaction> {
        let details = body.validate_update()?;
        self.transaction_repo
            .update(id, details)
            .await?
            .ok_or_else(|| AppError::TransactionNotFound.into())
    }

    pub async fn all(&self) -> Result<Vec<Transaction>> {
        self.transaction_repo.all().await
    }
}
