use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// `password_hash` is loaded from storage but never written into responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// A user about to be inserted. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Payload of a registration request. Fields are taken as given; only a
/// duplicate username is refused, by the repository.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String, // plaintext; only the hash is stored
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: i32,
}
