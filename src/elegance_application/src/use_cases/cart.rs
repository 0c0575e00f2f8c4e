use elegance_core::{
    Cart, CartError, CartItem, CartStore, CartStoreError, Email, ProductId, ProductStore,
    ProductStoreError, Quantity,
};
use serde::Deserialize;

/// How cart mutations reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartUpdateStrategy {
    /// Read the cart, apply the change in process, overwrite the document.
    /// Concurrent requests for the same cart can lose updates.
    #[default]
    ReadModifyWrite,
    /// Apply the change as one store operation.
    Atomic,
}

#[derive(Debug, thiserror::Error)]
pub enum CartUseCaseError {
    #[error("{0}")]
    ProductStoreError(#[from] ProductStoreError),
    #[error("{0}")]
    CartStoreError(#[from] CartStoreError),
    #[error("{0}")]
    CartError(#[from] CartError),
}

/// Adds a line item to the user's cart, creating the cart on first use
pub struct AddToCartUseCase<'a, P: ?Sized, C: ?Sized> {
    product_store: &'a P,
    cart_store: &'a C,
    strategy: CartUpdateStrategy,
}

impl<'a, P, C> AddToCartUseCase<'a, P, C>
where
    P: ProductStore + ?Sized,
    C: CartStore + ?Sized,
{
    pub fn new(product_store: &'a P, cart_store: &'a C, strategy: CartUpdateStrategy) -> Self {
        Self {
            product_store,
            cart_store,
            strategy,
        }
    }

    #[tracing::instrument(name = "AddToCartUseCase::execute", skip(self), fields(strategy = ?self.strategy))]
    pub async fn execute(
        &self,
        email: Email,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Cart, CartUseCaseError> {
        let product = self.product_store.get_product(&product_id).await?;
        let item = CartItem::new(product_id, quantity);

        let cart = match self.strategy {
            CartUpdateStrategy::Atomic => {
                self.cart_store
                    .push_line_item(&email, item, product.price)
                    .await?
            }
            CartUpdateStrategy::ReadModifyWrite => {
                let cart = match self.cart_store.get_cart(&email).await {
                    Ok(mut cart) => {
                        cart.add_line(item, product.price)?;
                        cart
                    }
                    Err(CartStoreError::CartNotFound) => Cart::open(email, item, product.price)?,
                    Err(e) => return Err(e.into()),
                };
                self.cart_store.save_cart(&cart).await?;
                cart
            }
        };

        Ok(cart)
    }
}

/// Removes every line for a product from the user's cart
pub struct RemoveFromCartUseCase<'a, P: ?Sized, C: ?Sized> {
    product_store: &'a P,
    cart_store: &'a C,
    strategy: CartUpdateStrategy,
}

impl<'a, P, C> RemoveFromCartUseCase<'a, P, C>
where
    P: ProductStore + ?Sized,
    C: CartStore + ?Sized,
{
    pub fn new(product_store: &'a P, cart_store: &'a C, strategy: CartUpdateStrategy) -> Self {
        Self {
            product_store,
            cart_store,
            strategy,
        }
    }

    #[tracing::instrument(name = "RemoveFromCartUseCase::execute", skip(self), fields(strategy = ?self.strategy))]
    pub async fn execute(
        &self,
        email: Email,
        product_id: ProductId,
    ) -> Result<Cart, CartUseCaseError> {
        let product = self.product_store.get_product(&product_id).await?;

        let cart = match self.strategy {
            CartUpdateStrategy::Atomic => {
                self.cart_store
                    .pull_line_items(&email, &product_id, product.price)
                    .await?
            }
            CartUpdateStrategy::ReadModifyWrite => {
                let mut cart = self.cart_store.get_cart(&email).await?;
                cart.remove_product(&product_id, product.price)?;
                self.cart_store.save_cart(&cart).await?;
                cart
            }
        };

        Ok(cart)
    }
}
