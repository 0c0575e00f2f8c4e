use elegance_core::{Email, Password, PasswordHasher, PasswordHasherError, UserStore, UserStoreError};

/// Error types for change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("old password not matched")]
    IncorrectPassword,
    #[error("Password hashing error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Change password use case - replaces the stored hash after checking the old password
pub struct ChangePasswordUseCase<'a, U: ?Sized, H: ?Sized> {
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> ChangePasswordUseCase<'a, U, H>
where
    U: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, old_password, new_password)
    )]
    pub async fn execute(
        &self,
        email: Email,
        old_password: Password,
        new_password: Password,
    ) -> Result<(), ChangePasswordError> {
        let user = self.user_store.get_user(&email).await?;

        let matches = self
            .password_hasher
            .verify_password(&user.password_hash, &old_password)
            .await?;
        if !matches {
            return Err(ChangePasswordError::IncorrectPassword);
        }

        let password_hash = self.password_hasher.hash_password(new_password).await?;
        self.user_store
            .set_password_hash(&email, password_hash)
            .await?;

        Ok(())
    }
}
