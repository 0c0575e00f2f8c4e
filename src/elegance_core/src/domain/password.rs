use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password as received from a client. Never stored.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Parses a password field, naming `field` in the error when it is empty.
    pub fn parse_field(value: Secret<String>, field: &'static str) -> Result<Self, UserError> {
        if value.expose_secret().is_empty() {
            return Err(UserError::EmptyField(field));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse_field(value, "password")
    }
}

/// An encoded password hash (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: Secret<String>) -> Self {
        Self(encoded)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
