use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The authenticated caller, as decoded from the bearer token.
///
/// `AuthMiddleware` stores an `Identity` in the request extensions; handlers
/// take it as an argument and pass it on to the use case explicitly, so no
/// layer below the handler ever looks at the request itself.
///
/// If the identity is missing (the route is not wrapped by `AuthMiddleware`),
/// extraction fails with an `unauthorized` error.
///
/// Only the claims decoder builds one, so the subject id is never zero:
///
/// ```compile_fail
/// let forged = taskdesk::auth::Identity(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(i32);

impl Identity {
    pub(crate) fn new(subject_id: i32) -> Self {
        Identity(subject_id)
    }

    pub fn subject_id(self) -> i32 {
        self.0
    }
}

impl FromRequest for Identity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Identity>().copied() {
            Some(identity) => ready(Ok(identity)),
            None => {
                log::error!(
                    "no identity attached to request for {}; is AuthMiddleware applied?",
                    req.path()
                );
                let err = AppError::unauthorized("User not authenticated");
                ready(Err(err.into()))
            }
        }
    }
}
