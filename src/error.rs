//! Error types for icon-notify
//!
//! This module defines structured error types using the `thiserror` crate.
//! Every variant maps to the single failure exit status of the tool.

use std::io;
use thiserror::Error;

/// Exit status used for every failed invocation
pub const EXIT_FAILURE: u8 = 255;

/// Main error type for the icon-notify application
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Required positional arguments absent or an option not understood
    #[error("{0}")]
    Usage(String),

    /// The host notification subsystem could not be reached
    #[error("Couldn't initialize {subsystem}.")]
    ServiceInit {
        subsystem: &'static str,
        reason: String,
    },

    /// The icon file is missing, unreadable or undecodable
    #[error("Unable to open icon file: {0}")]
    IconDecode(String),

    /// The notification service refused the submitted notification
    #[error("Unable to show notification: {0}")]
    Submit(String),

    /// I/O error while writing user-facing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl NotifyError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Errors reported by a notification service backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No notification server answered
    #[error("notification service unavailable: {0}")]
    Unavailable(String),

    /// The server answered but rejected the request
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Result type alias for the notification system
pub type Result<T> = std::result::Result<T, NotifyError>;
