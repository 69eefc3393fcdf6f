pub mod app;
pub mod context;
pub mod error;
pub mod spender;
pub mod transaction;
