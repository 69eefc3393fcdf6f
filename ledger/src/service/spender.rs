use crate::domain::models::{Spender, SpenderBody, SummaryResponse, TransactionResponse};
use crate::domain::pagination::{PageRequest, Pagination};
use crate::domain::repository::{SpenderRepository, TransactionRepository};
use crate::infra::config::FeatureFlag;
use crate::service::AppError;
use anyhow::Result;
use std::sync::Arc;

pub struct SpenderService {
    flags: FeatureFlag,
    spender_repo: Arc<dyn SpenderRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
}

impl SpenderService {
    pub fn new(
        flags: FeatureFlag,
        spender_repo: Arc<dyn SpenderRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
    ) -> SpenderService {
        SpenderService {
            flags,
            spender_repo,
            transaction_repo,
        }
    }

    pub fn create_enabled(&self) -> bool {
        self.flags.enable_create_spender
    }

    pub async fn create(&self, body: SpenderBody) -> Result<Spender> {
        if !self.create_enabled() {
            return Err(AppError::FeatureDisabled.into());
        }
        let spender = body.validate()?;
        self.spender_repo.create(spender).await
    }

    pub async fn all(&self) -> Result<Vec<Spender>> {
        self.spender_repo.all().await
    }

    pub async fn find(&self, id: i64) -> Result<Spender> {
        self.spender_repo
            .find(id)
            .await?
            .ok_or_else(|| AppError::SpenderNotFound.into())
    }

    pub async fn summary(&self, id: i64) -> Result<SummaryResponse> {
        let summary = self.transaction_repo.summary(id).await?;
        Ok(SummaryResponse { summary })
    }

    pub async fn transactions(&self, id: i64, page: PageRequest) -> Result<TransactionResponse> {
        let found = self.transaction_repo.by_spender(id, page).await?;

        Ok(TransactionResponse {
            transactions: found.transactions,
            summary: found.summary,
            pagination: Pagination::new(page, found.total_rows),
        })
    }
}
