//! Notification service trait definition
//!
//! This module defines the seam between the dispatcher and whatever
//! actually puts a notification on screen.

use crate::dispatcher::NotificationRecord;
use crate::error::ServiceError;

/// Result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Host notification service
///
/// A service is registered once per run with [`acquire`](Self::acquire),
/// used for a single [`submit`](Self::submit) and released once with
/// [`release`](Self::release). Callers go through
/// [`ServiceConnection`](crate::service::ServiceConnection) rather than
/// pairing these calls by hand.
pub trait NotificationService {
    /// Human-readable subsystem name, used in initialization diagnostics
    fn subsystem(&self) -> &'static str;

    /// Register this process with the service under `app_id`
    fn acquire(&self, app_id: &str) -> ServiceResult<()>;

    /// Hand a notification to the service for immediate display
    ///
    /// Must not wait for the user to interact with the notification.
    fn submit(&self, record: &NotificationRecord<'_>) -> ServiceResult<()>;

    /// Undo a successful [`acquire`](Self::acquire)
    fn release(&self);
}
