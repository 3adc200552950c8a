//! Employee DTOs for create and update operations.

use serde::{Deserialize, Deserializer, Serialize};

use super::{EMAIL_MAX_LEN, NAME_MAX_LEN, bounded_text, required_text};
use crate::entities::{employees, teams};
use crate::error::{AppError, Result};

/// DTO for creating an employee.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub title: String,
    pub manager_id: Option<i32>,
    pub team_id: Option<i32>,
}

/// DTO for updating an employee.
///
/// Absent fields are left untouched. For the two references an explicit
/// `null` arrives as `Some(None)` and clears the reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEmployee {
    /// Ignored; the path identifier wins.
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "present")]
    pub manager_id: Option<Option<i32>>,
    #[serde(deserialize_with = "present")]
    pub team_id: Option<Option<i32>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_email(email: &str) -> std::result::Result<String, String> {
    let email = required_text("Email", email, EMAIL_MAX_LEN)?;
    if !email.contains('@') {
        return Err(format!("Email '{email}' is not a valid address"));
    }
    Ok(email)
}

impl CreateEmployee {
    /// Trim and check the payload, returning the normalized copy.
    pub fn validated(self) -> Result<Self> {
        let check = || -> std::result::Result<Self, String> {
            Ok(Self {
                name: required_text("Name", &self.name, NAME_MAX_LEN)?,
                email: validate_email(&self.email)?,
                title: bounded_text("Title", &self.title, NAME_MAX_LEN)?,
                manager_id: self.manager_id,
                team_id: self.team_id,
            })
        };
        check().map_err(AppError::Validation)
    }
}

impl UpdateEmployee {
    /// Trim and check the fields that are present.
    pub fn validated(self) -> Result<Self> {
        let check = || -> std::result::Result<Self, String> {
            Ok(Self {
                id: None,
                name: self
                    .name
                    .as_deref()
                    .map(|name| required_text("Name", name, NAME_MAX_LEN))
                    .transpose()?,
                email: self.email.as_deref().map(validate_email).transpose()?,
                title: self
                    .title
                    .as_deref()
                    .map(|title| bounded_text("Title", title, NAME_MAX_LEN))
                    .transpose()?,
                manager_id: self.manager_id,
                team_id: self.team_id,
            })
        };
        check().map_err(AppError::Validation)
    }
}

/// Employee as returned by the API, with optional inline team and manager.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub title: String,
    pub manager_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<Box<EmployeeView>>,
    pub team_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<teams::Model>,
}

impl EmployeeView {
    /// Attach the resolved team and manager records.
    pub fn expanded(
        model: employees::Model,
        team: Option<teams::Model>,
        manager: Option<employees::Model>,
    ) -> Self {
        let mut view = Self::from(model);
        view.team = team;
        view.manager = manager.map(|m| Box::new(Self::from(m)));
        view
    }
}

impl From<employees::Model> for EmployeeView {
    fn from(model: employees::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            title: model.title,
            manager_id: model.manager_id,
            manager: None,
            team_id: model.team_id,
            team: None,
        }
    }
}
