use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use ledger::api::app::create_app;
use ledger::infra::config::Config;
use ledger::infra::db;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let pool = db::pg(&config).await?;
    if config.run_migrations {
        db::migrate(&pool).await?;
    }

    log::info!(
        host:% = config.http_host,
        port = config.http_port,
        enable_create_spender = config.flags.enable_create_spender;
        "Start server"
    );

    let flags = config.flags.clone();
    let allowed_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .configure(create_app(pool.clone(), flags.clone()))
            .wrap(Logger::default())
            .wrap(cors)
    })
    .bind((config.http_host.as_str(), config.http_port))?
    .run()
    .await?;

    Ok(())
}
