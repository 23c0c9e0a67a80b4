use tempfile::TempDir;
use toy_shop::{create_pool, initialize_schema, DbPool, ReferentialChecks, Shop, ShopConfig};

pub fn setup_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = ShopConfig {
        database_url: dir.path().join("shop.db").to_string_lossy().into_owned(),
        ..ShopConfig::default()
    };
    let pool = create_pool(&config).expect("Failed to create pool");
    initialize_schema(&pool).expect("Failed to initialize schema");
    (dir, pool)
}

#[allow(dead_code)]
pub fn setup_shop(checks: ReferentialChecks) -> (TempDir, DbPool, Shop) {
    let (dir, pool) = setup_pool();
    let shop = Shop::new(pool.clone(), checks);
    (dir, pool, shop)
}
