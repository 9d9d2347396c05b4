//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::{Category, CategoryWithStoreCount, CreateCategory};

/// Column list for the `categories` table.
const COLUMNS: &str = "id, name, slug, icon, featured, created_at, updated_at";

/// Read and seed operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug, icon, featured) \
             VALUES ($1, $2, $3, COALESCE($4, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.icon)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all categories with their store counts, name ascending.
    pub async fn list_with_store_counts(
        pool: &PgPool,
    ) -> Result<Vec<CategoryWithStoreCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryWithStoreCount>(
            "SELECT c.id, c.name, c.slug, c.icon, c.featured, c.created_at, c.updated_at, \
                    COUNT(s.id) AS store_count \
             FROM categories c \
             LEFT JOIN stores s ON s.category_id = c.id \
             GROUP BY c.id \
             ORDER BY c.name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
