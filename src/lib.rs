#![doc = "The `taskdesk` library crate."]
#![doc = ""]
#![doc = "Shared code for the three taskdesk services (auth, task and user). It holds the"]
#![doc = "error taxonomy, bearer-token identity middleware, domain models, use cases,"]
#![doc = "repositories and routes. Each binary under `src/bin` wires one service together."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod server;
pub mod usecase;

pub use crate::error::{AppError, ErrorKind};
