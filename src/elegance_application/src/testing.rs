//! In-process fakes of the ports, shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use elegance_core::{
    Cart, CartItem, CartStore, CartStoreError, Claims, Email, Password, PasswordHash,
    PasswordHasher, PasswordHasherError, Product, ProductId, ProductStore, ProductStoreError,
    Role, TokenService, TokenServiceError, User, UserId, UserStore, UserStoreError,
};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(value: &str) -> Email {
    Email::try_from(value.to_owned()).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::new(value.to_owned())).unwrap()
}

#[derive(Default, Clone)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<Email, User>>>,
}

impl MockUserStore {
    pub async fn user(&self, email: &Email) -> User {
        self.users.read().await.get(email).cloned().unwrap()
    }

    async fn update(
        &self,
        email: &Email,
        apply: impl FnOnce(&mut User) + Send,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        apply(user);
        Ok(())
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
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
        self.update(email, |user| user.add_favorite(product_id)).await
    }

    async fn remove_favorite(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> Result<(), UserStoreError> {
        self.update(email, |user| user.remove_favorite(product_id))
            .await
    }
}

#[derive(Default, Clone)]
pub struct MockProductStore {
    products: HashMap<ProductId, Product>,
}

impl MockProductStore {
    pub fn with(products: &[(&str, i64)]) -> Self {
        let products: Vec<(&str, Decimal)> = products
            .iter()
            .map(|(id, price)| (*id, Decimal::from(*price)))
            .collect();
        Self::with_prices(&products)
    }

    pub fn with_prices(products: &[(&str, Decimal)]) -> Self {
        let products = products
            .iter()
            .map(|(id, price)| {
                let product = Product::new(
                    ProductId::from(*id),
                    format!("product {id}"),
                    *price,
                    serde_json::Value::Null,
                )
                .unwrap();
                (product.id.clone(), product)
            })
            .collect();
        Self { products }
    }
}

#[async_trait]
impl ProductStore for MockProductStore {
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductStoreError> {
        self.products
            .get(id)
            .cloned()
            .ok_or(ProductStoreError::ProductNotFound)
    }
}

#[derive(Default, Clone)]
pub struct MockCartStore {
    pub carts: Arc<RwLock<HashMap<Email, Cart>>>,
}

#[async_trait]
impl CartStore for MockCartStore {
    async fn get_cart(&self, email: &Email) -> Result<Cart, CartStoreError> {
        self.carts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(CartStoreError::CartNotFound)
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), CartStoreError> {
        self.carts
            .write()
            .await
            .insert(cart.email.clone(), cart.clone());
        Ok(())
    }

    async fn push_line_item(
        &self,
        email: &Email,
        item: CartItem,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError> {
        let mut carts = self.carts.write().await;
        let cart = match carts.get_mut(email) {
            Some(cart) => {
                cart.add_line(item, unit_price)?;
                cart.clone()
            }
            None => {
                let cart = Cart::open(email.clone(), item, unit_price)?;
                carts.insert(email.clone(), cart.clone());
                cart
            }
        };
        Ok(cart)
    }

    async fn pull_line_items(
        &self,
        email: &Email,
        product_id: &ProductId,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError> {
        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(email).ok_or(CartStoreError::CartNotFound)?;
        cart.remove_product(product_id, unit_price)?;
        Ok(cart.clone())
    }
}

/// Reversible "hash" so tests can assert on what was stored.
#[derive(Default, Clone)]
pub struct MockHasher;

#[async_trait]
impl PasswordHasher for MockHasher {
    async fn hash_password(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(Secret::new(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify_password(
        &self,
        password_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError> {
        let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
        Ok(password_hash.as_ref().expose_secret() == &expected)
    }
}

#[derive(Default, Clone)]
pub struct MockTokens {
    pub fail_signing: bool,
}

impl TokenService for MockTokens {
    fn issue_token(
        &self,
        user_id: &UserId,
        email: &Email,
        role: Role,
    ) -> Result<String, TokenServiceError> {
        if self.fail_signing {
            return Err(TokenServiceError::SigningFailed("no key".into()));
        }
        Ok(format!("{user_id}|{}|{role}", email.as_str()))
    }

    fn verify_token(&self, _token: &str) -> Result<Claims, TokenServiceError> {
        Err(TokenServiceError::InvalidToken("not supported".into()))
    }
}
