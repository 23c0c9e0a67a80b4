use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

use crate::config::ShopConfig;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Applies per-connection pragmas whenever the pool opens a connection.
#[derive(Debug)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // Diesel turns foreign_keys on when it connects. Dangling customer and
        // product ids must be tolerated, so switch it back off.
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = OFF; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(config: &ShopConfig) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
    Pool::builder()
        .max_size(config.pool_size)
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout: config.busy_timeout,
        }))
        .build(manager)
}
