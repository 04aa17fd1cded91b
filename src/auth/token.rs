use crate::error::{AppError, ErrorKind};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token, in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims written into issued tokens.
///
/// `user_id` is the field read back by [`decode_unverified`](crate::auth::claims::decode_unverified).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IssuedClaims {
    pub user_id: i32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Signs HS256 bearer tokens for a user id.
///
/// The services themselves never verify signatures; this exists for the
/// upstream gateway and for clients that need a well-formed token.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let claims = IssuedClaims {
            user_id,
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.key)
            .map_err(|e| AppError::wrap(e, ErrorKind::Internal, "Failed to generate token"))
    }
}
