//! Action error type
//!
//! Every failure inside an action surfaces to the platform the same way:
//! `500 {"message":"internal server error"}`. The detail goes to the log.

use crate::PollError;

use rb_core::CoreError;
use rb_monday::ClientError;

use std::panic::Location;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Mapping failed: {source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Platform call failed: {source} {location}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    /// Sync found no column on the twin's board titled like the source column
    #[error("Target column '{title}' doesn't exist {location}")]
    TargetColumnMissing {
        title: String,
        location: ErrorLocation,
    },

    #[error("Twin lookup failed: {source} {location}")]
    TwinLookup {
        #[source]
        source: PollError,
        location: ErrorLocation,
    },

    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ActionError {
    #[track_caller]
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        ActionError::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn target_column_missing(title: &str) -> Self {
        ActionError::TargetColumnMissing {
            title: title.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": INTERNAL_ERROR_MESSAGE })),
        )
            .into_response()
    }
}

impl From<CoreError> for ActionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ActionError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for ActionError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        ActionError::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PollError> for ActionError {
    #[track_caller]
    fn from(source: PollError) -> Self {
        ActionError::TwinLookup {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;
