//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, EntityTrait, PaginatorTrait,
    Statement,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::entities::prelude::*;

/// Lifetime given to the single in-memory connection: 100 years.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Pool settings for `database_url`.
///
/// Each SQLite in-memory connection is its own database, so for `:memory:`
/// the pool must never close its connection: no idle timeout, and a lifetime
/// that overrides sqlx's 30 minute default.
pub fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    if database_url.contains(":memory:") {
        opt.max_lifetime(MEMORY_CONNECTION_LIFETIME);
    } else {
        opt.idle_timeout(Duration::from_secs(300));
    }

    opt
}

/// Create a new database connection with configured pool settings.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(database_url, max_connections)).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Get SQLite library version string.
pub async fn get_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    let result = db
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT sqlite_version() AS version".to_owned(),
        ))
        .await?;

    match result {
        Some(row) => {
            let version: String = row.try_get("", "version")?;
            Ok(version)
        }
        None => Ok("Unknown".to_owned()),
    }
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    let teams = Teams::find().count(db).await?;
    let employees = Employees::find().count(db).await?;

    Ok(TableCounts { teams, employees })
}

/// Table record counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCounts {
    pub teams: u64,
    pub employees: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_connection_is_never_recycled() {
        let opt = connect_options("sqlite::memory:", 1);
        assert_eq!(opt.get_idle_timeout(), None);
        assert_eq!(opt.get_max_lifetime(), Some(MEMORY_CONNECTION_LIFETIME));
        assert!(MEMORY_CONNECTION_LIFETIME > Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_file_connection_reaps_idle() {
        let opt = connect_options("sqlite://orgchart.db?mode=rwc", 5);
        assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(300)));
        assert_eq!(opt.get_max_lifetime(), None);
        assert_eq!(opt.get_max_connections(), Some(5));
    }

    #[tokio::test]
    async fn test_memory_database_keeps_schema_across_queries() {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        crate::db::migrate(&db).await.unwrap();

        for _ in 0..3 {
            test_connection(&db).await.unwrap();
            assert_eq!(get_table_counts(&db).await.unwrap(), TableCounts { teams: 0, employees: 0 });
        }
    }
}
