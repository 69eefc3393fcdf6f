use thiserror::Error;

pub mod spender;
pub mod transaction;
#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("create new spender feature is disabled")]
    FeatureDisabled,
    #[error("spender not found")]
    SpenderNotFound,
    #[error("transaction not found")]
    TransactionNotFound,
}
