mod common;

use bigdecimal::BigDecimal;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use toy_shop::domain::customer::CustomerInput;
use toy_shop::domain::order::OrderLineInput;
use toy_shop::domain::product::ProductInput;
use toy_shop::{
    create_pool, initialize_schema, reset_schema, DbPool, ReferentialChecks, Shop, ShopConfig,
};

use common::setup_pool;

#[derive(QueryableByName)]
struct Exists {
    #[diesel(sql_type = BigInt)]
    present: i64,
}

fn assert_table_exists(pool: &DbPool, table_name: &str) {
    let mut conn = pool.get().expect("Failed to get connection");
    let row: Exists = diesel::sql_query(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?) AS present",
    )
    .bind::<Text, _>(table_name)
    .get_result(&mut conn)
    .expect("query sqlite_master");
    assert_eq!(row.present, 1, "table {table_name} does not exist");
}

fn populate(shop: &Shop) {
    let customer = shop
        .customers
        .add_customer(&CustomerInput::new("John Doe", "john@example.com", "123 Elm Street"))
        .expect("add customer");
    let product = shop
        .products
        .add_product(&ProductInput::new("Laptop", "gaming", BigDecimal::from(1500), 10))
        .expect("add product");
    shop.orders
        .create_order(customer, vec![OrderLineInput::new(product, 1, BigDecimal::from(1500))])
        .expect("create order");
}

#[test]
fn initialize_creates_all_four_tables() {
    let (_dir, pool) = setup_pool();

    for table in ["customers", "products", "orders", "order_lines"] {
        assert_table_exists(&pool, table);
    }
}

#[test]
fn initializing_twice_keeps_data() {
    let (_dir, pool) = setup_pool();
    let shop = Shop::new(pool.clone(), ReferentialChecks::Loose);
    populate(&shop);

    initialize_schema(&pool).expect("second initialize");

    assert_eq!(shop.customers.list_customers().expect("customers").len(), 1);
    assert_eq!(shop.products.list_products().expect("products").len(), 1);
    assert_eq!(shop.orders.list_orders().expect("orders").len(), 1);
    assert_eq!(shop.orders.list_order_lines(None).expect("lines").len(), 1);
}

#[test]
fn reset_empties_every_table() {
    let (_dir, pool) = setup_pool();
    let shop = Shop::new(pool.clone(), ReferentialChecks::Loose);
    populate(&shop);

    reset_schema(&pool).expect("reset");

    assert!(shop.customers.list_customers().expect("customers").is_empty());
    assert!(shop.products.list_products().expect("products").is_empty());
    assert!(shop.orders.list_orders().expect("orders").is_empty());
    assert!(shop.orders.list_order_lines(None).expect("lines").is_empty());
    for table in ["customers", "products", "orders", "order_lines"] {
        assert_table_exists(&pool, table);
    }
}

#[test]
fn ids_restart_after_reset() {
    let (_dir, pool) = setup_pool();
    let shop = Shop::new(pool.clone(), ReferentialChecks::Loose);
    populate(&shop);

    reset_schema(&pool).expect("reset");
    let id = shop
        .customers
        .add_customer(&CustomerInput::new("Jane Smith", "jane@example.com", "456 Oak Avenue"))
        .expect("add after reset");

    assert_eq!(id, 1);
}

#[test]
fn reset_wipes_tables_created_outside_the_migrations() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = ShopConfig {
        database_url: dir.path().join("shop.db").to_string_lossy().into_owned(),
        ..ShopConfig::default()
    };
    let pool = create_pool(&config).expect("Failed to create pool");
    pool.get()
        .expect("Failed to get connection")
        .batch_execute(
            "CREATE TABLE customers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                address TEXT
            );
            INSERT INTO customers (name, email, address) VALUES ('Old', 'old@x', 'a');",
        )
        .expect("create legacy table");

    reset_schema(&pool).expect("reset");

    let shop = Shop::new(pool.clone(), ReferentialChecks::Loose);
    assert!(shop.customers.list_customers().expect("customers").is_empty());
    for table in ["customers", "products", "orders", "order_lines"] {
        assert_table_exists(&pool, table);
    }
}
