//! Deal entity model and DTOs.

use dealhub_core::discount::DealKind;
use dealhub_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `deals` table.
///
/// Which of `discount_percentage` / `discount_amount` is populated follows
/// from `deal_type`; the label formatter falls back gracefully when the
/// payload is missing or zero. `is_expired` is stored, not derived.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deal {
    pub id: DbId,
    pub store_id: DbId,
    pub title: String,
    pub description: String,
    /// `None` means no code needed; the offer is a direct link.
    pub code: Option<String>,
    #[sqlx(try_from = "String")]
    pub deal_type: DealKind,
    pub discount_percentage: Option<i32>,
    pub discount_amount: Option<Decimal>,
    pub expiration_date: Option<Timestamp>,
    pub is_expired: bool,
    pub featured: bool,
    pub usage_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new deal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeal {
    pub store_id: DbId,
    pub title: String,
    pub description: String,
    pub code: Option<String>,
    pub deal_type: DealKind,
    pub discount_percentage: Option<i32>,
    pub discount_amount: Option<Decimal>,
    pub expiration_date: Option<Timestamp>,
    pub is_expired: Option<bool>,
    pub featured: Option<bool>,
}
