//! Repository for the `deals` table.

use dealhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::deal::{CreateDeal, Deal};

/// Column list for the `deals` table.
const COLUMNS: &str =
    "id, store_id, title, description, code, deal_type, discount_percentage, \
     discount_amount, expiration_date, is_expired, featured, usage_count, \
     created_at, updated_at";

/// Write and lookup operations for deals.
pub struct DealRepo;

impl DealRepo {
    /// Insert a new deal, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDeal) -> Result<Deal, sqlx::Error> {
        let query = format!(
            "INSERT INTO deals \
                (store_id, title, description, code, deal_type, discount_percentage, \
                 discount_amount, expiration_date, is_expired, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, false), COALESCE($10, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deal>(&query)
            .bind(input.store_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.code)
            .bind(input.deal_type.as_str())
            .bind(input.discount_percentage)
            .bind(input.discount_amount)
            .bind(input.expiration_date)
            .bind(input.is_expired)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a deal by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Deal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deals WHERE id = $1");
        sqlx::query_as::<_, Deal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Bump a deal's usage counter, returning the new value.
    ///
    /// The counter only ever accumulates; nothing resets it. Returns `None`
    /// if no deal with the given `id` exists.
    pub async fn increment_usage(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE deals \
             SET usage_count = usage_count + 1, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING usage_count",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
