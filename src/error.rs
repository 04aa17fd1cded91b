//!
//! # Error Taxonomy
//!
//! This module defines `AppError`, the single error type passed between the
//! repository, use-case and handler layers of every service.
//!
//! An `AppError` carries a stable [`ErrorKind`] next to a human readable message
//! and, optionally, the failure that caused it. The layer that first detects a
//! condition picks the kind (for example the repository turns "no rows" into
//! [`ErrorKind::NotFound`]); layers above may re-wrap the error with more
//! context, but [`AppError::classify`] always recovers the most specific kind in
//! the chain, so a `not_found` never degrades into a 500 on its way up.
//!
//! `AppError` implements `actix_web::error::ResponseError`, which performs the
//! final kind → status translation and renders the uniform
//! `{"error": ..., "code": ...}` body.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use validator::ValidationErrors;

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Closed set of error classifications shared by all services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The addressed entity does not exist (HTTP 404).
    NotFound,
    /// The request collides with existing state, e.g. a duplicate username (HTTP 409).
    Conflict,
    /// The request is malformed or fails validation (HTTP 400).
    InvalidInput,
    /// The caller could not be authenticated (HTTP 401).
    Unauthorized,
    /// Anything the service cannot interpret (HTTP 500).
    Internal,
}

impl ErrorKind {
    /// Wire name of the kind, used as the `code` field of error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Internal => "internal",
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified application failure.
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    cause: Option<Cause>,
}

/// JSON body written for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl AppError {
    /// Creates an error with no underlying cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Tags an arbitrary failure with `kind`, keeping it as the source.
    ///
    /// Wrapping another `AppError` is allowed and expected; its kind remains
    /// visible through [`AppError::is`] and [`AppError::classify`].
    pub fn wrap<E>(cause: E, kind: ErrorKind, message: impl Into<String>) -> Self
    where
        E: Into<Cause>,
    {
        Self {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The kind this error was tagged with by the outermost layer.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error, or any `AppError` in its cause chain,
    /// carries `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.chain().any(|e| e.kind == kind)
    }

    /// The most specific kind in the chain: the first non-internal kind from
    /// the outside in, or [`ErrorKind::Internal`] if there is none.
    pub fn classify(&self) -> ErrorKind {
        self.chain()
            .map(|e| e.kind)
            .find(|kind| *kind != ErrorKind::Internal)
            .unwrap_or(ErrorKind::Internal)
    }

    fn chain(&self) -> impl Iterator<Item = &AppError> + '_ {
        std::iter::successors(Some(self as &(dyn StdError + 'static)), |e| (*e).source())
            .filter_map(|e| e.downcast_ref::<AppError>())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}: {}", self.kind, self.message, cause),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

/// Converts `AppError` into an `HttpResponse`.
///
/// Internal errors are logged in full but answered with a generic message so
/// that database or hashing details never reach the client.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.classify().status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let kind = self.classify();
        let error = match kind {
            ErrorKind::Internal => {
                log::error!("request failed: {}", self);
                "internal server error".to_string()
            }
            _ => {
                log::warn!("request rejected: {}", self);
                self.message.clone()
            }
        };

        HttpResponse::build(kind.status_code()).json(ErrorResponse {
            error,
            code: kind.as_str(),
        })
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `NotFound` and a Postgres unique violation becomes
/// `Conflict`; every other database error is `Internal`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        let kind = match &error {
            sqlx::Error::RowNotFound => ErrorKind::NotFound,
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                ErrorKind::Conflict
            }
            _ => ErrorKind::Internal,
        };
        let message = match kind {
            ErrorKind::NotFound => "record not found",
            ErrorKind::Conflict => "record already exists",
            _ => "database error",
        };
        AppError::wrap(error, kind, message)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::new(ErrorKind::InvalidInput, error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::wrap(error, ErrorKind::Internal, "password hashing failed")
    }
}
