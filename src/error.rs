//! Tracker error types

use thiserror::Error;

/// Errors that can occur while configuring or driving a tracker
///
/// Normal operation never fails: redundant lifecycle calls, throttled motion
/// events and non-primary clicks are silent no-ops, not errors.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Malformed sample record: {0}")]
    MalformedRecord(String),
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
