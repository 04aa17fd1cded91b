//! Business orchestration between the HTTP handlers and the repositories.
//!
//! Use cases never inspect the request. Callers hand them plain values and,
//! for task operations, the caller's [`Identity`](crate::auth::Identity).
//! Errors coming out of a repository keep their kind; anything a use case
//! cannot interpret is wrapped as `internal` with the original as its cause.

pub mod auth;
pub mod task;
pub mod user;

pub use auth::AuthUseCase;
pub use task::TaskUseCase;
pub use user::UserUseCase;
