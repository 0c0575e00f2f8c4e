use std::fmt;

use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{
    email::Email,
    password::{Password, PasswordHash},
    product::ProductId,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("{0} can't be empty")]
    EmptyField(&'static str),
    #[error("invalid user id: {0}")]
    InvalidUserId(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn parse(value: &str) -> Result<Self, UserError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| UserError::InvalidUserId(value.to_owned()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UserError::UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration details that passed validation but have not been hashed or stored yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
    pub phone: String,
    pub password: Password,
}

impl NewUser {
    /// Validates registration fields in the order email, name, phone, password.
    pub fn parse(
        email: Secret<String>,
        name: String,
        phone: String,
        password: Secret<String>,
    ) -> Result<Self, UserError> {
        let email = Email::try_from(email)?;
        let name = non_empty(name, "name")?;
        let phone = non_empty(phone, "phone")?;
        let password = Password::try_from(password)?;

        Ok(Self {
            email,
            name,
            phone,
            password,
        })
    }
}

/// Returns the trimmed value, or an error naming `field` when nothing is left.
pub fn non_empty(value: String, field: &'static str) -> Result<String, UserError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UserError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}

/// A stored user document.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub phone: String,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_blocked: bool,
    pub address: String,
    pub favorites: Vec<ProductId>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// Builds the document stored on registration: role `user`, not blocked,
    /// no address and no favorites.
    pub fn register(new_user: NewUser, password_hash: PasswordHash) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: UserId::new(),
            email: new_user.email,
            name: new_user.name,
            phone: new_user.phone,
            password_hash,
            role: Role::User,
            is_blocked: false,
            address: String::new(),
            favorites: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp();
    }

    pub fn add_favorite(&mut self, product_id: ProductId) {
        self.favorites.push(product_id);
        self.touch();
    }

    /// Removes every occurrence of `product_id`.
    pub fn remove_favorite(&mut self, product_id: &ProductId) {
        self.favorites.retain(|id| id != product_id);
        self.touch();
    }

    pub fn password_hash_str(&self) -> &str {
        self.password_hash.as_ref().expose_secret()
    }
}
