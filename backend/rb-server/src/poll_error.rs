use rb_monday::ClientError;

use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a twin lookup stopped without finding the item
#[derive(Error, Debug)]
pub enum PollError {
    #[error("{operation} gave up after {attempts} attempts {location}")]
    Exhausted {
        operation: String,
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("{operation} timed out after {elapsed:?} {location}")]
    TimedOut {
        operation: String,
        elapsed: Duration,
        location: ErrorLocation,
    },

    #[error("{operation} cancelled by shutdown {location}")]
    Cancelled {
        operation: String,
        location: ErrorLocation,
    },

    #[error("{operation} failed: {source} {location}")]
    Failed {
        operation: String,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },
}
