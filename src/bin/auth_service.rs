//! Authentication service: `POST /login`.

use std::sync::Arc;

use actix_web::web;
use dotenv::dotenv;
use taskdesk::auth::TokenIssuer;
use taskdesk::config::{Config, AUTH_SERVICE_PORT};
use taskdesk::repository::PgUserRepository;
use taskdesk::routes;
use taskdesk::server;
use taskdesk::usecase::AuthUseCase;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    server::init_logging();

    let config = Config::from_env(AUTH_SERVICE_PORT).map_err(|e| {
        log::error!("failed to load config: {}", e);
        e
    })?;
    let secret = config.jwt_secret().map_err(|e| {
        log::error!("failed to load config: {}", e);
        e
    })?;
    let tokens = TokenIssuer::new(secret.as_bytes());
    let pool = server::connect(&config).await.map_err(|e| {
        log::error!("error while connecting to database: {}", e);
        e
    })?;

    let use_case = web::Data::new(AuthUseCase::new(
        Arc::new(PgUserRepository::new(pool)),
        tokens,
    ));
    server::run(&config, "auth-service", move |cfg| {
        cfg.app_data(use_case.clone());
        routes::auth::config(cfg);
    })?
    .await?;

    log::info!("server gracefully stopped");
    Ok(())
}
