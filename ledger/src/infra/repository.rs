pub mod spender;
pub mod transaction;

pub use spender::PgSpenderRepository;
pub use transaction::PgTransactionRepository;
