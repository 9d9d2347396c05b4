//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Slug lookups that miss return
//! `Ok(None)`; the caller decides whether that is a not-found response.

pub mod category_repo;
pub mod deal_repo;
pub mod store_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use deal_repo::DealRepo;
pub use store_repo::StoreRepo;
pub use user_repo::UserRepo;
