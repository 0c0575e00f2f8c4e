use elegance_core::{Email, UserStore, UserStoreError};

/// Sets (or replaces) the user's shipping address
pub struct UpdateAddressUseCase<'a, U: ?Sized> {
    user_store: &'a U,
}

impl<'a, U> UpdateAddressUseCase<'a, U>
where
    U: UserStore + ?Sized,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "UpdateAddressUseCase::execute", skip(self, address))]
    pub async fn execute(&self, email: Email, address: String) -> Result<(), UserStoreError> {
        // Unknown emails must fail with NotFound.
        self.user_store.get_user(&email).await?;
        self.user_store.set_address(&email, address).await
    }
}

pub struct UpdateNameUseCase<'a, U: ?Sized> {
    user_store: &'a U,
}

impl<'a, U> UpdateNameUseCase<'a, U>
where
    U: UserStore + ?Sized,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "UpdateNameUseCase::execute", skip(self, name))]
    pub async fn execute(&self, email: Email, name: String) -> Result<(), UserStoreError> {
        self.user_store.get_user(&email).await?;
        self.user_store.set_name(&email, name).await
    }
}
