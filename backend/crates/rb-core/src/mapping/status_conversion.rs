use crate::{BoardColumn, CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize)]
struct StatusValue {
    index: Option<i64>,
}

/// Convert a status column's stored value (`{"index":N,..}`) into the
/// label payload other boards accept (`{"label":"..."}`).
///
/// Indices only line up with the column they were read from, so the
/// label travels instead of the index.
#[track_caller]
pub fn convert_status_value(column: &BoardColumn, raw_value: &str) -> CoreResult<Value> {
    let labels = column.status_labels()?;

    let value: StatusValue = serde_json::from_str(raw_value)
        .map_err(|e| CoreError::invalid_column_value(&column.id, e))?;

    let index = value.index.ok_or_else(|| CoreError::InvalidStatusSettings {
        column_id: column.id.clone(),
        message: format!("value has no index: {}", raw_value),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let label = labels
        .get(index)
        .ok_or_else(|| CoreError::StatusIndexOutOfRange {
            column_id: column.id.clone(),
            index,
            label_count: labels.len(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(json!({ "label": label }))
}
