//! SeaORM entity definitions for the two persisted tables.

pub mod prelude;

pub mod employees;
pub mod teams;
