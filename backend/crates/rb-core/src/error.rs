use crate::ColumnLookup;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Column not found on board {board_id}: {lookup} {location}")]
    ColumnNotFound {
        board_id: i64,
        lookup: ColumnLookup,
        location: ErrorLocation,
    },

    #[error("Group '{title}' not found on board {board_id} {location}")]
    GroupNotFound {
        board_id: i64,
        title: String,
        location: ErrorLocation,
    },

    #[error(
        "Status index {index} out of range for column '{column_id}' ({label_count} labels) {location}"
    )]
    StatusIndexOutOfRange {
        column_id: String,
        index: i64,
        label_count: usize,
        location: ErrorLocation,
    },

    #[error("Invalid status settings for column '{column_id}': {message} {location}")]
    InvalidStatusSettings {
        column_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid value for column '{column_id}': {source} {location}")]
    InvalidColumnValue {
        column_id: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid link value '{value}': expected '<boardId>:<itemId>' {location}")]
    InvalidLinkValue {
        value: String,
        location: ErrorLocation,
    },

    #[error("Item {item_id} has no value in column '{column_id}' {location}")]
    MissingColumnValue {
        item_id: i64,
        column_id: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn column_not_found(board_id: i64, lookup: ColumnLookup) -> Self {
        Self::ColumnNotFound {
            board_id,
            lookup,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_column_value(column_id: &str, source: serde_json::Error) -> Self {
        Self::InvalidColumnValue {
            column_id: column_id.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_link_value<S: Into<String>>(value: S) -> Self {
        Self::InvalidLinkValue {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
