use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default listening ports, one per service.
pub const AUTH_SERVICE_PORT: u16 = 8081;
pub const TASK_SERVICE_PORT: u16 = 8082;
pub const USER_SERVICE_PORT: u16 = 8083;

/// Maximum time a client may take to send a request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Grace period for in-flight requests on shutdown, in seconds.
pub const SHUTDOWN_GRACE_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_port: u16,
    pub server_host: String,
    /// Signing secret for issued tokens. Only the auth service needs it.
    pub jwt_secret: Option<String>,
}

impl Config {
    /// Reads the configuration from the environment.
    /// `default_port` is used when `SERVER_PORT` is unset.
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            Err(_) => default_port,
        };
        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(max) => max
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            Err(_) => 5,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            server_port,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
        })
    }

    pub fn jwt_secret(&self) -> Result<&str, ConfigError> {
        self.jwt_secret
            .as_deref()
            .ok_or(ConfigError::Missing("JWT_SECRET"))
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
