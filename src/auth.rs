//! Password hashing and session tokens.
//!
//! Passwords are stored as salted Argon2id hashes, never as plaintext; the
//! salt comes from the OS RNG per hash. Session tokens are HS256 JWTs whose
//! only claims are the user id (`sub`) and the expiry (`exp`).

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: i64,
    /// Expiry as a Unix timestamp. Checked on verification.
    pub exp: usize,
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// One-way comparison against a stored hash. A malformed stored hash counts
/// as a mismatch rather than an error so that login failures stay uniform.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(e) => {
            tracing::error!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

pub fn issue_token(cfg: &AuthConfig, user_id: i64) -> AppResult<String> {
    let ttl = chrono::Duration::hours(cfg.token_ttl_hours as i64);
    let exp = (chrono::Utc::now() + ttl).timestamp() as usize;
    let claims = Claims { sub: user_id, exp };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {}", e)))
}

/// Verifies signature and expiry and recovers the user id.
pub fn verify_token(cfg: &AuthConfig, token: &str) -> AppResult<i64> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
    Ok(data.claims.sub)
}
