use crate::{CoreError, Result as CoreResult, StatusLabels};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Type tag of status columns in the legacy API
pub const STATUS_TYPE_LEGACY: &str = "color";
/// Type tag of status columns in the current API
pub const STATUS_TYPE: &str = "status";

/// Column definition on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: String,
    /// Raw settings JSON; for status columns this holds the label list
    #[serde(default)]
    pub settings_str: Option<String>,
}

impl BoardColumn {
    pub fn new(id: &str, title: &str, column_type: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            column_type: column_type.to_string(),
            settings_str: None,
        }
    }

    pub fn with_settings(mut self, settings_str: &str) -> Self {
        self.settings_str = Some(settings_str.to_string());
        self
    }

    pub fn is_status(&self) -> bool {
        self.column_type == STATUS_TYPE_LEGACY || self.column_type == STATUS_TYPE
    }

    /// Parse the label list out of the column settings
    #[track_caller]
    pub fn status_labels(&self) -> CoreResult<StatusLabels> {
        let settings = self
            .settings_str
            .as_deref()
            .ok_or_else(|| CoreError::InvalidStatusSettings {
                column_id: self.id.clone(),
                message: "column has no settings".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        StatusLabels::from_settings(&self.id, settings)
    }
}
