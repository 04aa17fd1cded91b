//! Task service: `/tasks` CRUD behind bearer-token identity.

use std::sync::Arc;

use actix_web::web;
use dotenv::dotenv;
use taskdesk::config::{Config, TASK_SERVICE_PORT};
use taskdesk::repository::PgTaskRepository;
use taskdesk::routes;
use taskdesk::server;
use taskdesk::usecase::TaskUseCase;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    server::init_logging();

    let config = Config::from_env(TASK_SERVICE_PORT).map_err(|e| {
        log::error!("failed to load config: {}", e);
        e
    })?;
    let pool = server::connect(&config).await.map_err(|e| {
        log::error!("error while connecting to database: {}", e);
        e
    })?;

    let use_case = web::Data::new(TaskUseCase::new(Arc::new(PgTaskRepository::new(pool))));
    server::run(&config, "task-service", move |cfg| {
        cfg.app_data(use_case.clone());
        routes::tasks::config(cfg);
    })?
    .await?;

    log::info!("server gracefully stopped");
    Ok(())
}
