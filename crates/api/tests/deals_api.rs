//! HTTP-level integration tests for the deal usage counter.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_test_app, post_empty};
use dealhub_core::discount::DealKind;
use dealhub_core::types::DbId;
use dealhub_db::models::category::CreateCategory;
use dealhub_db::models::deal::CreateDeal;
use dealhub_db::models::store::CreateStore;
use dealhub_db::repositories::{CategoryRepo, DealRepo, StoreRepo};
use sqlx::PgPool;

async fn seed_deal(pool: &PgPool) -> DbId {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Fashion".to_string(),
            slug: "fashion".to_string(),
            icon: None,
            featured: None,
        },
    )
    .await
    .unwrap();
    let store = StoreRepo::create(
        pool,
        &CreateStore {
            category_id: category.id,
            name: "Nike".to_string(),
            slug: "nike".to_string(),
            logo_url: "https://logo.example.com/nike.png".to_string(),
            description: "Athletic shoes and gear".to_string(),
            website_url: "https://www.nike.example.com".to_string(),
            featured: None,
        },
    )
    .await
    .unwrap();
    DealRepo::create(
        pool,
        &CreateDeal {
            store_id: store.id,
            title: "20% Off Sitewide".to_string(),
            description: "Sitewide discount".to_string(),
            code: Some("NIKE20".to_string()),
            deal_type: DealKind::Percentage,
            discount_percentage: Some(20),
            discount_amount: None,
            expiration_date: Some(Utc::now() + Duration::days(30)),
            is_expired: None,
            featured: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: recording a use increments the counter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn recording_use_increments_counter(pool: PgPool) {
    let deal_id = seed_deal(&pool).await;
    let uri = format!("/api/v1/deals/{deal_id}/use");

    let response = post_empty(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["usage_count"], 1);

    let response = post_empty(build_test_app(pool), &uri).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["usage_count"], 2);
}

// ---------------------------------------------------------------------------
// Test: unknown deal id is a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_deal_is_not_found(pool: PgPool) {
    let response = post_empty(build_test_app(pool), "/api/v1/deals/424242/use").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Deal '424242' not found");
}
