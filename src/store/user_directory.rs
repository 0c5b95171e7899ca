use sqlx::PgPool;

use crate::database::models::user::User;
use crate::store::StoreError;

/// Read-only lookup over user accounts
pub struct UserDirectory {
    pool: PgPool,
}

impl UserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a user by id
    pub async fn get(&self, id: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(StoreError::NotFound("User does not exist"))
    }
}
