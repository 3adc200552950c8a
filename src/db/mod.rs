//! Database connection pool and operations.

pub mod connection;
pub mod employee;
pub mod schema;
pub mod team;

pub use connection::{TableCounts, connect, get_table_counts, get_version, test_connection};
pub use schema::migrate;
