//! HTTP server assembly shared by the three service binaries.

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::{Config, REQUEST_TIMEOUT, SHUTDOWN_GRACE_SECS};
use crate::routes::{self, health::ServiceName};

/// Initialises `env_logger` with an `info` default, overridable by `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Opens the connection pool and checks that the database answers.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    log::info!("successfully connected to database");
    Ok(pool)
}

/// Binds the listener and starts serving.
///
/// `configure` registers the service's use case and routes; CORS, request
/// logging, the health route and extractor error handling are added here.
/// The returned server stops gracefully on SIGINT/SIGTERM.
pub fn run<F>(config: &Config, name: &'static str, configure: F) -> std::io::Result<Server>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let listener = std::net::TcpListener::bind((config.server_host.as_str(), config.server_port))?;
    listen(listener, name, configure)
}

/// Like [`run`], on an already bound listener.
pub fn listen<F>(
    listener: std::net::TcpListener,
    name: &'static str,
    configure: F,
) -> std::io::Result<Server>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    log::info!("starting {} on {}", name, listener.local_addr()?);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(ServiceName(name)))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::extractors)
            .service(routes::health::health)
            .configure(configure.clone())
    })
    .client_request_timeout(REQUEST_TIMEOUT)
    .shutdown_timeout(SHUTDOWN_GRACE_SECS)
    .listen(listener)?
    .run();

    Ok(server)
}
