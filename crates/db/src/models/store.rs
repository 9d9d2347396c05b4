//! Store entity model and DTOs.

use dealhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::Category;
use super::deal::Deal;

/// A row from the `stores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Store {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub description: String,
    pub website_url: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One listing row: a store annotated with its owning category's display
/// columns and its count of non-expired deals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoreListItem {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub description: String,
    pub website_url: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub category_name: String,
    pub category_slug: String,
    pub category_icon: Option<String>,
    pub active_deal_count: i64,
}

/// A store enriched with its owning category and all of its deals.
#[derive(Debug, Clone, Serialize)]
pub struct StoreWithDeals {
    #[serde(flatten)]
    pub store: Store,
    pub category: Category,
    pub deals: Vec<Deal>,
}

/// DTO for creating a new store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStore {
    pub category_id: DbId,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub description: String,
    pub website_url: String,
    pub featured: Option<bool>,
}
