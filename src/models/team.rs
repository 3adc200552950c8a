//! Team DTOs.

use serde::Deserialize;

use super::{NAME_MAX_LEN, required_text};
use crate::error::{AppError, Result};

/// DTO for creating a team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
}

impl CreateTeam {
    /// Trim and check the payload, returning the normalized copy.
    pub fn validated(self) -> Result<Self> {
        let name = required_text("Team name", &self.name, NAME_MAX_LEN).map_err(AppError::Validation)?;
        Ok(Self { name })
    }
}
