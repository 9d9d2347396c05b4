//! Demo data seeder.
//!
//! Clears the catalog tables and repopulates them with a demo dataset:
//! categories, well-known stores, deals covering every discount kind
//! (including an already-expired one), and demo users with favorites.
//! Safe to re-run; it always starts from empty tables.

use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dealhub_core::discount::DealKind;
use dealhub_core::types::DbId;
use dealhub_db::models::category::{Category, CreateCategory};
use dealhub_db::models::deal::CreateDeal;
use dealhub_db::models::store::{CreateStore, Store};
use dealhub_db::models::user::CreateUser;
use dealhub_db::repositories::{CategoryRepo, DealRepo, StoreRepo, UserRepo};
use dealhub_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealhub_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = dealhub_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    dealhub_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Starting database seed");

    clear_existing(&pool).await?;
    tracing::info!("Cleared existing data");

    let categories = seed_categories(&pool).await?;
    tracing::info!(count = categories.len(), "Created categories");

    let stores = seed_stores(&pool, &categories).await?;
    tracing::info!(count = stores.len(), "Created stores");

    let deal_count = seed_deals(&pool, &stores).await?;
    tracing::info!(count = deal_count, "Created deals");

    seed_users(&pool, &stores).await?;
    tracing::info!("Created demo users and favorites");

    tracing::info!("Database seeded successfully");
    Ok(())
}

/// Delete all seeded rows in dependency order.
async fn clear_existing(pool: &DbPool) -> anyhow::Result<()> {
    for table in [
        "favorite_deals",
        "favorite_stores",
        "deals",
        "stores",
        "categories",
        "users",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await
            .with_context(|| format!("Failed to clear {table}"))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

fn category(name: &str, slug: &str, icon: &str, featured: bool) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        slug: slug.to_string(),
        icon: Some(icon.to_string()),
        featured: Some(featured),
    }
}

async fn seed_categories(pool: &DbPool) -> anyhow::Result<Vec<Category>> {
    let inputs = [
        category("Fashion & Apparel", "fashion-apparel", "👕", true),
        category("Electronics", "electronics", "💻", true),
        category("Home & Garden", "home-garden", "🏠", true),
        category("Beauty & Health", "beauty-health", "💄", false),
        category("Food & Grocery", "food-grocery", "🍔", false),
        category("Sports & Outdoors", "sports-outdoors", "⚽", true),
        category("Travel & Hotels", "travel-hotels", "✈️", false),
        category("Entertainment", "entertainment", "🎮", false),
    ];

    let mut categories = Vec::with_capacity(inputs.len());
    for input in &inputs {
        categories.push(CategoryRepo::create(pool, input).await?);
    }
    Ok(categories)
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

fn store(
    category_id: DbId,
    name: &str,
    slug: &str,
    domain: &str,
    description: &str,
    featured: bool,
) -> CreateStore {
    CreateStore {
        category_id,
        name: name.to_string(),
        slug: slug.to_string(),
        logo_url: format!("https://logo.clearbit.com/{domain}"),
        description: description.to_string(),
        website_url: format!("https://www.{domain}"),
        featured: Some(featured),
    }
}

async fn seed_stores(pool: &DbPool, categories: &[Category]) -> anyhow::Result<Vec<Store>> {
    let fashion = categories[0].id;
    let electronics = categories[1].id;
    let home = categories[2].id;
    let beauty = categories[3].id;
    let sports = categories[5].id;

    let inputs = [
        store(
            fashion,
            "Nike",
            "nike",
            "nike.com",
            "Just Do It. Find athletic shoes, clothing and gear for the whole family.",
            true,
        ),
        store(
            fashion,
            "Adidas",
            "adidas",
            "adidas.com",
            "Impossible is Nothing. Shop for shoes, clothing and accessories.",
            true,
        ),
        store(
            fashion,
            "H&M",
            "hm",
            "hm.com",
            "Fashion and quality at the best price in a sustainable way.",
            false,
        ),
        store(
            fashion,
            "Zara",
            "zara",
            "zara.com",
            "Latest trends in fashion for women, men and kids.",
            false,
        ),
        store(
            electronics,
            "Best Buy",
            "best-buy",
            "bestbuy.com",
            "Shop electronics, computers, appliances, cell phones, video games & more.",
            true,
        ),
        store(
            electronics,
            "Amazon",
            "amazon",
            "amazon.com",
            "Low prices on electronics, books, fashion and everything else.",
            true,
        ),
        store(
            electronics,
            "Newegg",
            "newegg",
            "newegg.com",
            "PC parts, gaming hardware and consumer electronics.",
            false,
        ),
        store(
            home,
            "IKEA",
            "ikea",
            "ikea.com",
            "Affordable furniture and home furnishing ideas.",
            true,
        ),
        store(
            home,
            "Wayfair",
            "wayfair",
            "wayfair.com",
            "A zillion things home: furniture, decor and more.",
            false,
        ),
        store(
            beauty,
            "Sephora",
            "sephora",
            "sephora.com",
            "Beauty products, makeup, skincare and fragrance.",
            true,
        ),
        store(
            beauty,
            "Ulta Beauty",
            "ulta",
            "ulta.com",
            "Cosmetics, fragrance, skincare and salon services.",
            false,
        ),
        store(
            sports,
            "Dick's Sporting Goods",
            "dicks-sporting-goods",
            "dickssportinggoods.com",
            "Sporting goods, outdoor gear and fitness equipment.",
            false,
        ),
    ];

    let mut stores = Vec::with_capacity(inputs.len());
    for input in &inputs {
        stores.push(StoreRepo::create(pool, input).await?);
    }
    Ok(stores)
}

// ---------------------------------------------------------------------------
// Deals
// ---------------------------------------------------------------------------

/// Base deal: no code, no payload, expires in `days` days.
fn deal(store_id: DbId, title: &str, description: &str, kind: DealKind, days: i64) -> CreateDeal {
    CreateDeal {
        store_id,
        title: title.to_string(),
        description: description.to_string(),
        code: None,
        deal_type: kind,
        discount_percentage: None,
        discount_amount: None,
        expiration_date: Some(Utc::now() + Duration::days(days)),
        is_expired: None,
        featured: None,
    }
}

async fn seed_deals(pool: &DbPool, stores: &[Store]) -> anyhow::Result<usize> {
    let by_slug = |slug: &str| -> DbId {
        stores
            .iter()
            .find(|s| s.slug == slug)
            .expect("seeded store")
            .id
    };
    let nike = by_slug("nike");
    let adidas = by_slug("adidas");
    let hm = by_slug("hm");
    let best_buy = by_slug("best-buy");
    let amazon = by_slug("amazon");
    let ikea = by_slug("ikea");
    let sephora = by_slug("sephora");

    let inputs = [
        CreateDeal {
            code: Some("NIKE20".to_string()),
            discount_percentage: Some(20),
            featured: Some(true),
            ..deal(
                nike,
                "20% Off Sitewide",
                "Get 20% off everything, no minimum purchase.",
                DealKind::Percentage,
                30,
            )
        },
        deal(
            nike,
            "Free Shipping on Orders Over $50",
            "No code needed. Free standard shipping automatically applied.",
            DealKind::FreeShipping,
            60,
        ),
        CreateDeal {
            code: Some("SAVE25".to_string()),
            discount_amount: Some(Decimal::from(25)),
            ..deal(
                nike,
                "$25 Off Orders $100+",
                "Save $25 when you spend $100 or more.",
                DealKind::FixedAmount,
                15,
            )
        },
        CreateDeal {
            code: Some("SUMMER30".to_string()),
            discount_percentage: Some(30),
            featured: Some(true),
            ..deal(
                adidas,
                "30% Off Summer Collection",
                "Seasonal styles at 30% off while stocks last.",
                DealKind::Percentage,
                20,
            )
        },
        CreateDeal {
            code: Some("BOGO50".to_string()),
            ..deal(
                adidas,
                "Buy One Get One 50% Off",
                "Mix and match across the full range.",
                DealKind::Bogo,
                25,
            )
        },
        CreateDeal {
            code: Some("LAPTOP100".to_string()),
            discount_amount: Some(Decimal::from(100)),
            featured: Some(true),
            ..deal(
                best_buy,
                "$100 Off Laptops Over $799",
                "Instant savings on select laptops.",
                DealKind::FixedAmount,
                10,
            )
        },
        CreateDeal {
            code: Some("TV15".to_string()),
            discount_percentage: Some(15),
            ..deal(
                best_buy,
                "15% Off TVs and Home Theater",
                "Upgrade your living room for less.",
                DealKind::Percentage,
                45,
            )
        },
        CreateDeal {
            code: Some("PRIME20".to_string()),
            discount_percentage: Some(20),
            featured: Some(true),
            ..deal(
                amazon,
                "Prime Members: Extra 20% Off",
                "Exclusive extra savings for Prime members.",
                DealKind::Percentage,
                35,
            )
        },
        CreateDeal {
            code: Some("LIGHTNING30".to_string()),
            discount_amount: Some(Decimal::from(30)),
            featured: Some(true),
            ..deal(
                amazon,
                "Lightning Deal: $30 Off $150+",
                "Limited-time lightning deal, expiring soon.",
                DealKind::FixedAmount,
                2,
            )
        },
        CreateDeal {
            code: Some("KITCHEN25".to_string()),
            discount_percentage: Some(25),
            ..deal(
                ikea,
                "25% Off Kitchen Furniture",
                "Refresh your kitchen with 25% off.",
                DealKind::Percentage,
                40,
            )
        },
        deal(
            ikea,
            "Free Delivery on Orders Over $299",
            "Get free home delivery on large orders.",
            DealKind::FreeShipping,
            90,
        ),
        CreateDeal {
            code: Some("WELCOME20".to_string()),
            discount_percentage: Some(20),
            featured: Some(true),
            ..deal(
                sephora,
                "20% Off First Purchase",
                "New customers get 20% off their first order.",
                DealKind::Percentage,
                365,
            )
        },
        deal(
            sephora,
            "Free Samples with Every Order",
            "Choose 3 free samples at checkout.",
            DealKind::Other,
            180,
        ),
        // An already-expired deal so the detail page has both groups.
        CreateDeal {
            code: Some("EXPIRED50".to_string()),
            discount_percentage: Some(50),
            is_expired: Some(true),
            ..deal(
                hm,
                "Black Friday: 50% Off Everything",
                "This deal has expired.",
                DealKind::Percentage,
                -10,
            )
        },
    ];

    for input in &inputs {
        DealRepo::create(pool, input).await?;
    }
    Ok(inputs.len())
}

// ---------------------------------------------------------------------------
// Users & favorites
// ---------------------------------------------------------------------------

async fn seed_users(pool: &DbPool, stores: &[Store]) -> anyhow::Result<()> {
    let demo = UserRepo::create(
        pool,
        &CreateUser {
            email: "demo@example.com".to_string(),
            name: Some("Demo User".to_string()),
        },
    )
    .await?;
    let john = UserRepo::create(
        pool,
        &CreateUser {
            email: "john@example.com".to_string(),
            name: Some("John Doe".to_string()),
        },
    )
    .await?;

    let nike = stores.iter().find(|s| s.slug == "nike").expect("seeded store");
    let amazon = stores
        .iter()
        .find(|s| s.slug == "amazon")
        .expect("seeded store");

    UserRepo::favorite_store(pool, demo.id, nike.id).await?;
    UserRepo::favorite_store(pool, john.id, amazon.id).await?;

    // Favorite each user's first deal from their favorite store.
    for (user_id, store_id) in [(demo.id, nike.id), (john.id, amazon.id)] {
        let deals = StoreRepo::deals_for_store(pool, store_id).await?;
        if let Some(first) = deals.first() {
            UserRepo::favorite_deal(pool, user_id, first.id).await?;
        }
    }

    Ok(())
}
