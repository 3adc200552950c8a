pub use super::employees::Entity as Employees;
pub use super::teams::Entity as Teams;
