//! Category entity model and DTOs.

use dealhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// Display glyph (emoji). Optional; the UI substitutes a default.
    pub icon: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category annotated with how many stores it owns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryWithStoreCount {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub store_count: i64,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub featured: Option<bool>,
}
