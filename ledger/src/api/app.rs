use crate::api::{spender, transaction};
use crate::domain::repository::{SpenderRepository, TransactionRepository};
use crate::infra::config::FeatureFlag;
use crate::infra::repository::{PgSpenderRepository, PgTransactionRepository};
use crate::service::spender::SpenderService;
use crate::service::transaction::TransactionService;
use actix_web::web;
use actix_web::web::ServiceConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

pub fn create_app(pool: Pool<Postgres>, flags: FeatureFlag) -> Box<dyn Fn(&mut ServiceConfig)> {
    let spender_repo: Arc<dyn SpenderRepository> = Arc::new(PgSpenderRepository::new(pool.clone()));
    let transaction_repo: Arc<dyn TransactionRepository> =
        Arc::new(PgTransactionRepository::new(pool));

    configure_app(flags, spender_repo, transaction_repo)
}

pub fn configure_app(
    flags: FeatureFlag,
    spender_repo: Arc<dyn SpenderRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        let spender_service = web::Data::new(SpenderService::new(
            flags.clone(),
            Arc::clone(&spender_repo),
            Arc::clone(&transaction_repo),
        ));
        let transaction_service =
            web::Data::new(TransactionService::new(Arc::clone(&transaction_repo)));

        cfg.app_data(spender_service)
            .app_data(transaction_service)
            .service(spender::create_spender)
            .service(spender::get_spenders)
            .service(spender::get_spender_summary)
            .service(spender::get_spender_transactions)
            .service(spender::get_spender)
            .service(transaction::create_transaction)
            .service(transaction::update_transaction)
            .service(transaction::get_transactions);
    })
}
