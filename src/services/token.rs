use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::UserId;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,

    #[error("Expired token")]
    Expired,
}

/// Claims carried by an access token. Only `id` is required. `verify` reads
/// the payload loosely, so an `exp` sent as a fractional timestamp is honored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Verifies HS256 bearer tokens signed with the shared secret
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        // `exp` is checked in `verify` so that floats are accepted and expiry
        // wins over a malformed `id`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Returns the caller's user id from the `id` claim.
    ///
    /// The id is not checked against the `users` table here; only card
    /// creation requires the user row to exist.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Value>(token, &self.key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            TokenError::Invalid
        })?;
        let claims = data.claims;

        if let Some(exp) = claims.get("exp") {
            let exp = exp.as_f64().ok_or(TokenError::Invalid)?;
            let now = Utc::now().timestamp_millis() as f64 / 1000.0;
            if exp < now {
                return Err(TokenError::Expired);
            }
        }

        claims
            .get("id")
            .and_then(Value::as_i64)
            .and_then(|id| UserId::try_from(id).ok())
            .ok_or(TokenError::Invalid)
    }
}
