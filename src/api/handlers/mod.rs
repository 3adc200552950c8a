//! Request handlers grouped by resource.

pub mod employee;
pub mod health;
pub mod team;
