pub mod claims;
pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use claims::{authenticate, decode_unverified, Claims, ClaimsError};
pub use extractors::Identity;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::TokenIssuer;

/// Represents the payload for a login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Outcome of a login attempt. A failed login is a normal response, not an
/// error.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
}
