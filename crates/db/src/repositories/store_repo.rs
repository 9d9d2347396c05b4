//! Repository for the `stores` table and its listing queries.
//!
//! The listing methods implement the catalog query contract: they take a
//! normalized [`ListingQuery`] and apply its filters, sort and pagination
//! verbatim. Absent filters short-circuit via NULL guards so the query
//! text stays static.

use dealhub_core::listing::{like_pattern, ListingQuery, SortKey};
use dealhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::deal::Deal;
use crate::models::store::{CreateStore, Store, StoreListItem, StoreWithDeals};

/// Column list for the `stores` table.
const COLUMNS: &str =
    "id, category_id, name, slug, logo_url, description, website_url, featured, \
     created_at, updated_at";

/// Column list for listing rows: store columns plus the owning category's
/// display columns and the non-expired deal count.
const LIST_COLUMNS: &str =
    "s.id, s.category_id, s.name, s.slug, s.logo_url, s.description, s.website_url, \
     s.featured, s.created_at, s.updated_at, \
     c.name AS category_name, c.slug AS category_slug, c.icon AS category_icon, \
     COALESCE(d.active_deals, 0) AS active_deal_count";

/// Shared WHERE clause for listing and count queries. `$1` is the escaped
/// ILIKE pattern (or NULL for no search), `$2` the category slug (or NULL).
const LIST_FILTER: &str =
    "($1::text IS NULL OR s.name ILIKE $1) AND ($2::text IS NULL OR c.slug = $2)";

/// Read and seed operations for stores.
pub struct StoreRepo;

impl StoreRepo {
    /// Insert a new store, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStore) -> Result<Store, sqlx::Error> {
        let query = format!(
            "INSERT INTO stores \
                (category_id, name, slug, logo_url, description, website_url, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.logo_url)
            .bind(&input.description)
            .bind(&input.website_url)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a store by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stores WHERE slug = $1");
        sqlx::query_as::<_, Store>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a store by slug, enriched with its category and all deals.
    ///
    /// Deals are ordered for the detail page: active before expired,
    /// featured first within each group, newest first within those.
    pub async fn find_by_slug_with_deals(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<StoreWithDeals>, sqlx::Error> {
        let store = Self::find_by_slug(pool, slug).await?;
        match store {
            Some(store) => {
                let category = sqlx::query_as::<_, Category>(
                    "SELECT id, name, slug, icon, featured, created_at, updated_at \
                     FROM categories WHERE id = $1",
                )
                .bind(store.category_id)
                .fetch_one(pool)
                .await?;
                let deals = Self::deals_for_store(pool, store.id).await?;
                Ok(Some(StoreWithDeals {
                    store,
                    category,
                    deals,
                }))
            }
            None => Ok(None),
        }
    }

    /// All deals for a store, in detail-page order.
    pub async fn deals_for_store(
        pool: &PgPool,
        store_id: DbId,
    ) -> Result<Vec<Deal>, sqlx::Error> {
        sqlx::query_as::<_, Deal>(
            "SELECT id, store_id, title, description, code, deal_type, \
                    discount_percentage, discount_amount, expiration_date, \
                    is_expired, featured, usage_count, created_at, updated_at \
             FROM deals \
             WHERE store_id = $1 \
             ORDER BY is_expired ASC, featured DESC, created_at DESC",
        )
        .bind(store_id)
        .fetch_all(pool)
        .await
    }

    /// One page of stores matching the descriptor, each annotated with its
    /// category and non-expired deal count.
    pub async fn list(
        pool: &PgPool,
        listing: &ListingQuery,
    ) -> Result<Vec<StoreListItem>, sqlx::Error> {
        // Deal-count ties break by id ascending so pagination stays stable.
        let order = match listing.sort {
            SortKey::Name => "LOWER(s.name) ASC, s.id ASC",
            SortKey::Deals => "active_deal_count DESC, s.id ASC",
        };
        let query = format!(
            "SELECT {LIST_COLUMNS} \
             FROM stores s \
             JOIN categories c ON c.id = s.category_id \
             LEFT JOIN ( \
                 SELECT store_id, COUNT(*) AS active_deals \
                 FROM deals \
                 WHERE is_expired = false \
                 GROUP BY store_id \
             ) d ON d.store_id = s.id \
             WHERE {LIST_FILTER} \
             ORDER BY {order} \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, StoreListItem>(&query)
            .bind(listing.search.as_deref().map(like_pattern))
            .bind(listing.category_slug.as_deref())
            .bind(listing.page_size)
            .bind(listing.offset())
            .fetch_all(pool)
            .await
    }

    /// Total number of stores matching the descriptor's filters, ignoring
    /// pagination.
    pub async fn count(pool: &PgPool, listing: &ListingQuery) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) \
             FROM stores s \
             JOIN categories c ON c.id = s.category_id \
             WHERE {LIST_FILTER}"
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(listing.search.as_deref().map(like_pattern))
            .bind(listing.category_slug.as_deref())
            .fetch_one(pool)
            .await
    }
}
