use elegance_core::{
    Email, Password, PasswordHasher, PasswordHasherError, TokenService, TokenServiceError,
    UserStore, UserStoreError,
};

use super::signup::Session;

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("password not matched")]
    IncorrectPassword,
    #[error("Password hashing error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token error: {0}")]
    TokenServiceError(#[from] TokenServiceError),
}

/// Login use case - handles user authentication
pub struct LoginUseCase<'a, U: ?Sized, H: ?Sized, T: ?Sized> {
    user_store: &'a U,
    password_hasher: &'a H,
    token_service: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenService + ?Sized,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H, token_service: &'a T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The stored user and a new token when the password verifies
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<Session, LoginError> {
        let user = self.user_store.get_user(&email).await?;

        let matches = self
            .password_hasher
            .verify_password(&user.password_hash, &password)
            .await?;
        if !matches {
            return Err(LoginError::IncorrectPassword);
        }

        let token = self
            .token_service
            .issue_token(&user.id, &user.email, user.role)?;

        Ok(Session { user, token })
    }
}
