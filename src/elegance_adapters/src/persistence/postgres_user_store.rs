use chrono::Utc;
use elegance_core::{
    Email, PasswordHash, ProductId, Role, User, UserId, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};

const USER_COLUMNS: &str = "id, email, name, phone, password_hash, user_type, is_blocked, \
                            address, favorites, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }

    /// Runs a single-row update keyed by email; zero affected rows means the user is unknown.
    ///
    /// `sql` binds the new value as `$1`, the timestamp as `$2` and the email as `$3`.
    async fn update_one(
        &self,
        sql: &str,
        email: &Email,
        value: String,
    ) -> Result<(), UserStoreError> {
        let result = sqlx::query(sql)
            .bind(value)
            .bind(Utc::now().timestamp())
            .bind(email.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let favorites: Vec<String> = user
            .favorites
            .iter()
            .map(|id| id.as_str().to_owned())
            .collect();

        let query = sqlx::query(
            r#"
                INSERT INTO users (id, email, name, phone, password_hash, user_type,
                                   is_blocked, address, favorites, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(*user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(&user.name)
        .bind(&user.phone)
        .bind(user.password_hash.as_ref().expose_secret())
        .bind(user.role.as_str())
        .bind(user.is_blocked)
        .bind(&user.address)
        .bind(favorites)
        .bind(user.created_at)
        .bind(user.updated_at);

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        let row = sqlx::query(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        user_from_row(&row)
    }

    #[tracing::instrument(name = "Set address", skip_all)]
    async fn set_address(&self, email: &Email, address: String) -> Result<(), UserStoreError> {
        self.update_one(
            "UPDATE users SET address = $1, updated_at = $2 WHERE email = $3",
            email,
            address,
        )
        .await
    }

    #[tracing::instrument(name = "Set name", skip_all)]
    async fn set_name(&self, email: &Email, name: String) -> Result<(), UserStoreError> {
        self.update_one(
            "UPDATE users SET name = $1, updated_at = $2 WHERE email = $3",
            email,
            name,
        )
        .await
    }

    #[tracing::instrument(name = "Set new password", skip_all)]
    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let encoded = password_hash.as_ref().expose_secret().clone();
        self.update_one(
            "UPDATE users SET password_hash = $1, updated_at = $2 WHERE email = $3",
            email,
            encoded,
        )
        .await
    }

    #[tracing::instrument(name = "Add favorite", skip_all)]
    async fn add_favorite(
        &self,
        email: &Email,
        product_id: ProductId,
    ) -> Result<(), UserStoreError> {
        let product_id = product_id.as_str().to_owned();
        self.update_one(
            "UPDATE users SET favorites = array_append(favorites, $1), updated_at = $2 \
             WHERE email = $3",
            email,
            product_id,
        )
        .await
    }

    #[tracing::instrument(name = "Remove favorite", skip_all)]
    async fn remove_favorite(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> Result<(), UserStoreError> {
        let product_id = product_id.as_str().to_owned();
        self.update_one(
            "UPDATE users SET favorites = array_remove(favorites, $1), updated_at = $2 \
             WHERE email = $3",
            email,
            product_id,
        )
        .await
    }
}

fn user_from_row(row: &PgRow) -> Result<User, UserStoreError> {
    let unexpected = |e: sqlx::Error| UserStoreError::UnexpectedError(e.to_string());

    let email: String = row.try_get("email").map_err(unexpected)?;
    let email =
        Email::try_from(email).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let role: String = row.try_get("user_type").map_err(unexpected)?;
    let role =
        Role::try_from(role.as_str()).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let favorites: Vec<String> = row.try_get("favorites").map_err(unexpected)?;

    Ok(User {
        id: UserId::from(row.try_get::<uuid::Uuid, _>("id").map_err(unexpected)?),
        email,
        name: row.try_get("name").map_err(unexpected)?,
        phone: row.try_get("phone").map_err(unexpected)?,
        password_hash: PasswordHash::new(Secret::new(
            row.try_get("password_hash").map_err(unexpected)?,
        )),
        role,
        is_blocked: row.try_get("is_blocked").map_err(unexpected)?,
        address: row.try_get("address").map_err(unexpected)?,
        favorites: favorites
            .iter()
            .map(|id| ProductId::from(id.as_str()))
            .collect(),
        created_at: row.try_get("created_at").map_err(unexpected)?,
        updated_at: row.try_get("updated_at").map_err(unexpected)?,
    })
}
