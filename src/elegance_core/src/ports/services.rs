use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::{Password, PasswordHash},
    user::{Role, UserId},
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Derives and checks password hashes.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Returns `Ok(false)` when the candidate does not match.
    async fn verify_password(
        &self,
        password_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum TokenServiceError {
    #[error("Failed to generate token: {0}")]
    SigningFailed(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Token has expired")]
    Expired,
}

/// Identity asserted by a verified bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    pub user_id: UserId,
    pub email: Email,
    pub role: Role,
    /// Expiry as a unix timestamp in seconds.
    pub expires_at: i64,
}

/// Issues and verifies bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue_token(
        &self,
        user_id: &UserId,
        email: &Email,
        role: Role,
    ) -> Result<String, TokenServiceError>;

    fn verify_token(&self, token: &str) -> Result<Claims, TokenServiceError>;
}
