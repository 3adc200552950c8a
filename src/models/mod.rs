//! Request and response shapes for teams, employees and the hierarchy tree.

pub mod employee;
pub mod team;
pub mod tree;

pub use employee::{CreateEmployee, EmployeeView, UpdateEmployee};
pub use team::CreateTeam;
pub use tree::TreeNode;

/// Maximum length of team names, employee names and titles.
pub const NAME_MAX_LEN: usize = 120;

/// Maximum length of employee email addresses.
pub const EMAIL_MAX_LEN: usize = 180;

/// Trim `value` and check it is non-empty and within `max` characters.
pub(crate) fn required_text(field: &str, value: &str, max: usize) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{field} is required"));
    }
    bounded_text(field, value, max)
}

/// Trim `value` and check it is within `max` characters.
pub(crate) fn bounded_text(field: &str, value: &str, max: usize) -> Result<String, String> {
    let value = value.trim();
    if value.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(value.to_string())
}
