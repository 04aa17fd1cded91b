pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, Error as ActixError, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body returned by mutations that have nothing else to report.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> ActixError {
    log::warn!("invalid request body for {}: {}", req.path(), err);
    AppError::invalid_input("Error parsing request body").into()
}

fn path_error(err: PathError, req: &HttpRequest) -> ActixError {
    log::warn!("invalid path parameter for {}: {}", req.path(), err);
    AppError::invalid_input("Invalid id").into()
}

/// Extractor configuration shared by every service, so malformed bodies and
/// ids produce the same `invalid_input` error shape as the handlers.
pub fn extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error));
}
