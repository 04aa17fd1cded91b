//! User service: registration and lookup under `/users`.

use std::sync::Arc;

use actix_web::web;
use dotenv::dotenv;
use taskdesk::config::{Config, USER_SERVICE_PORT};
use taskdesk::repository::PgUserRepository;
use taskdesk::routes;
use taskdesk::server;
use taskdesk::usecase::UserUseCase;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    server::init_logging();

    let config = Config::from_env(USER_SERVICE_PORT).map_err(|e| {
        log::error!("failed to load config: {}", e);
        e
    })?;
    let pool = server::connect(&config).await.map_err(|e| {
        log::error!("error while connecting to database: {}", e);
        e
    })?;

    let use_case = web::Data::new(UserUseCase::new(Arc::new(PgUserRepository::new(pool))));
    server::run(&config, "user-service", move |cfg| {
        cfg.app_data(use_case.clone());
        routes::users::config(cfg);
    })?
    .await?;

    log::info!("server gracefully stopped");
    Ok(())
}
