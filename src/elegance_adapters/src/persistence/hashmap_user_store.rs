use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use elegance_core::{Email, PasswordHash, ProductId, User, UserStore, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn update<F>(&self, email: &Email, apply: F) -> Result<(), UserStoreError>
    where
        F: FnOnce(&mut User) + Send,
    {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        apply(user);
        user.touch();
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn set_address(&self, email: &Email, address: String) -> Result<(), UserStoreError> {
        self.update(email, |user| user.address = address).await
    }

    async fn set_name(&self, email: &Email, name: String) -> Result<(), UserStoreError> {
        self.update(email, |user| user.name = name).await
    }

    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        self.update(email, |user| user.password_hash = password_hash)
            .await
    }

    async fn add_favorite(
        &self,
        email: &Email,
        product_id: ProductId,
    ) -> Result<(), UserStoreError> {
        self.update(email, |user| user.favorites.push(product_id))
            .await
    }

    async fn remove_favorite(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> Result<(), UserStoreError> {
        self.update(email, |user| user.favorites.retain(|id| id != product_id))
            .await
    }
}
