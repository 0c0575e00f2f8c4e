use elegance_core::{
    NewUser, PasswordHasher, PasswordHasherError, TokenService, TokenServiceError, User,
    UserStore, UserStoreError,
};

/// A user together with a freshly issued bearer token.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hashing error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token error: {0}")]
    TokenServiceError(#[from] TokenServiceError),
}

/// Signup use case - handles user registration
pub struct SignupUseCase<'a, U: ?Sized, H: ?Sized, T: ?Sized> {
    user_store: &'a U,
    password_hasher: &'a H,
    token_service: &'a T,
}

impl<'a, U, H, T> SignupUseCase<'a, U, H, T>
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

    /// Hashes the password, stores the user and issues a token for it.
    ///
    /// # Returns
    /// The stored user and its token, or `UserAlreadyExists` when the email is taken
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(&self, new_user: NewUser) -> Result<Session, SignupError> {
        match self.user_store.get_user(&new_user.email).await {
            Ok(_) => return Err(UserStoreError::UserAlreadyExists.into()),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let password_hash = self
            .password_hasher
            .hash_password(new_user.password.clone())
            .await?;
        let user = User::register(new_user, password_hash);

        self.user_store.add_user(user.clone()).await?;

        let token = self
            .token_service
            .issue_token(&user.id, &user.email, user.role)?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(Session { user, token })
    }
}
