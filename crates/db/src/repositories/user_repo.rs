//! Repository for the `users` table and the favorite join tables.

use dealhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list for the `users` table.
const COLUMNS: &str = "id, email, name, created_at, updated_at";

/// User and favorites operations (seed and future session scope).
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Mark a store as a user's favorite (idempotent).
    pub async fn favorite_store(
        pool: &PgPool,
        user_id: DbId,
        store_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorite_stores (user_id, store_id) \
             VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(store_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a deal as a user's favorite (idempotent).
    pub async fn favorite_deal(
        pool: &PgPool,
        user_id: DbId,
        deal_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorite_deals (user_id, deal_id) \
             VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(deal_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
