use elegance_core::{Email, Product, ProductId, ProductStore, UserStore, UserStoreError};

/// Appends a product to the user's favorites. Duplicates are kept.
pub struct AddFavoriteUseCase<'a, U: ?Sized> {
    user_store: &'a U,
}

impl<'a, U> AddFavoriteUseCase<'a, U>
where
    U: UserStore + ?Sized,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "AddFavoriteUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email, product_id: ProductId) -> Result<(), UserStoreError> {
        self.user_store.add_favorite(&email, product_id).await
    }
}

/// Removes every occurrence of a product from the user's favorites.
pub struct RemoveFavoriteUseCase<'a, U: ?Sized> {
    user_store: &'a U,
}

impl<'a, U> RemoveFavoriteUseCase<'a, U>
where
    U: UserStore + ?Sized,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "RemoveFavoriteUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        email: Email,
        product_id: ProductId,
    ) -> Result<(), UserStoreError> {
        self.user_store.remove_favorite(&email, &product_id).await
    }
}

/// Materializes the favorites list into products.
pub struct ListFavoritesUseCase<'a, U: ?Sized, P: ?Sized> {
    user_store: &'a U,
    product_store: &'a P,
}

impl<'a, U, P> ListFavoritesUseCase<'a, U, P>
where
    U: UserStore + ?Sized,
    P: ProductStore + ?Sized,
{
    pub fn new(user_store: &'a U, product_store: &'a P) -> Self {
        Self {
            user_store,
            product_store,
        }
    }

    /// Ids that no longer resolve come back as [`Product::placeholder`] entries.
    #[tracing::instrument(name = "ListFavoritesUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<Vec<Product>, UserStoreError> {
        let user = self.user_store.get_user(&email).await?;

        let mut products = Vec::with_capacity(user.favorites.len());
        for product_id in user.favorites {
            match self.product_store.get_product(&product_id).await {
                Ok(product) => products.push(product),
                Err(e) => {
                    tracing::warn!(%product_id, error = %e, "favorite did not resolve");
                    products.push(Product::placeholder(product_id));
                }
            }
        }

        Ok(products)
    }
}
