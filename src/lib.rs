pub mod application;
pub mod config;
pub mod db;
pub mod demo;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod schema;

use diesel::connection::SimpleConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use application::customer_service::CustomerService;
use application::order_service::OrderService;
use application::product_service::ProductService;
use domain::errors::DomainError;
use infrastructure::customer_repo::DieselCustomerRepository;
use infrastructure::order_repo::DieselOrderRepository;
use infrastructure::product_repo::DieselProductRepository;

pub use config::{ReferentialChecks, ShopConfig};
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const DROP_SHOP_TABLES: &str =
    include_str!("../migrations/2024-05-01-000000_create_shop_tables/down.sql");

/// Create the shop tables if they are missing. Running it again is a no-op
/// and keeps existing rows.
pub fn initialize_schema(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Storage(format!("schema setup failed: {e}")))?;
    log::info!("Schema ready ({} migrations applied)", applied.len());
    Ok(())
}

/// Drop every shop table and create them again, empty. All data is lost.
pub fn reset_schema(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;
    // Tables may exist without a migration record, so drop them directly too.
    conn.batch_execute(DROP_SHOP_TABLES)?;
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Storage(format!("schema drop failed: {e}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Storage(format!("schema setup failed: {e}")))?;
    log::warn!("Schema reset; all shop data was dropped");
    Ok(())
}

/// The three services wired to Diesel repositories over one pool.
pub struct Shop {
    pub customers: CustomerService<DieselCustomerRepository>,
    pub products: ProductService<DieselProductRepository>,
    pub orders: OrderService<DieselOrderRepository>,
}

impl Shop {
    pub fn new(pool: DbPool, checks: ReferentialChecks) -> Self {
        Self {
            customers: CustomerService::new(DieselCustomerRepository::new(pool.clone())),
            products: ProductService::new(DieselProductRepository::new(pool.clone())),
            orders: OrderService::new(DieselOrderRepository::new(pool, checks)),
        }
    }
}
