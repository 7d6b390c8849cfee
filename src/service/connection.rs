//! Scoped registration with a notification service

use crate::debug_context;
use crate::dispatcher::NotificationRecord;
use crate::service::r#trait::{NotificationService, ServiceResult};

/// A live registration with a [`NotificationService`]
///
/// Releasing happens in `Drop`, so every exit path out of the scope that
/// acquired the connection releases it exactly once. A failed acquire never
/// produces a connection and therefore never releases.
pub struct ServiceConnection<'s> {
    service: &'s dyn NotificationService,
    app_id: String,
}

impl<'s> ServiceConnection<'s> {
    pub fn acquire(service: &'s dyn NotificationService, app_id: &str) -> ServiceResult<Self> {
        service.acquire(app_id)?;
        debug_context!("ServiceConnection", "Acquired {} as {}", service.subsystem(), app_id);
        Ok(Self {
            service,
            app_id: app_id.to_string(),
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn submit(&self, record: &NotificationRecord<'_>) -> ServiceResult<()> {
        self.service.submit(record)
    }
}

impl Drop for ServiceConnection<'_> {
    fn drop(&mut self) {
        self.service.release();
        debug_context!("ServiceConnection", "Released {}", self.service.subsystem());
    }
}
