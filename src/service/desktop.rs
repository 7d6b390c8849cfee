//! Desktop notification service
//!
//! This module implements the NotificationService trait for the host
//! desktop using notify-rust. On freedesktop platforms the decoded icon is
//! sent as raw RGBA image data, overriding any themed icon name.

use notify_rust::{Notification, Timeout};
use std::cell::RefCell;

use crate::config::SUBSYSTEM;
use crate::debug_context;
use crate::dispatcher::NotificationRecord;
use crate::error::ServiceError;
use crate::icon::IconImage;
use crate::service::r#trait::{NotificationService, ServiceResult};

/// Desktop notification service backed by notify-rust
#[derive(Debug, Default)]
pub struct DesktopService {
    app_id: RefCell<Option<String>>,
}

impl DesktopService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the notify-rust notification for a record
    fn build_notification(&self, record: &NotificationRecord<'_>) -> ServiceResult<Notification> {
        let mut notification = Notification::new();
        if let Some(app_id) = self.app_id.borrow().as_deref() {
            notification.appname(app_id);
        }
        notification.summary(record.summary);
        notification.body(record.body);
        if !record.icon_name.is_empty() {
            notification.icon(record.icon_name);
        }
        notification.timeout(Timeout::Default);

        attach_icon(&mut notification, record.icon)?;
        Ok(notification)
    }
}

impl NotificationService for DesktopService {
    fn subsystem(&self) -> &'static str {
        SUBSYSTEM
    }

    fn acquire(&self, app_id: &str) -> ServiceResult<()> {
        probe_server()?;
        *self.app_id.borrow_mut() = Some(app_id.to_string());
        Ok(())
    }

    fn submit(&self, record: &NotificationRecord<'_>) -> ServiceResult<()> {
        let notification = self.build_notification(record)?;

        // The handle is dropped right away: nothing waits on user interaction
        let _handle = notification
            .show()
            .map_err(|e| ServiceError::Rejected(e.to_string()))?;
        debug_context!("DesktopService", "Notification submitted");
        Ok(())
    }

    fn release(&self) {
        self.app_id.borrow_mut().take();
    }
}

/// Ask the notification server to identify itself
#[cfg(all(unix, not(target_os = "macos")))]
fn probe_server() -> ServiceResult<()> {
    let info = notify_rust::get_server_information()
        .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
    debug_context!(
        "DesktopService",
        "Server: {} {} ({}), protocol {}",
        info.name,
        info.version,
        info.vendor,
        info.spec_version
    );
    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn probe_server() -> ServiceResult<()> {
    Ok(())
}

/// Attach the decoded pixels as the notification's image data
#[cfg(all(unix, not(target_os = "macos")))]
fn attach_icon(notification: &mut Notification, icon: &IconImage) -> ServiceResult<()> {
    let width = i32::try_from(icon.width)
        .map_err(|_| ServiceError::Rejected(format!("icon too wide: {}", icon.width)))?;
    let height = i32::try_from(icon.height)
        .map_err(|_| ServiceError::Rejected(format!("icon too tall: {}", icon.height)))?;

    let image = notify_rust::Image::from_rgba(width, height, icon.data.clone())
        .map_err(|e| ServiceError::Rejected(e.to_string()))?;
    notification.image_data(image);

    debug_context!(
        "DesktopService",
        "Attached {}x{} icon (rowstride {})",
        icon.width,
        icon.height,
        icon.rowstride()
    );
    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn attach_icon(_notification: &mut Notification, icon: &IconImage) -> ServiceResult<()> {
    debug_context!(
        "DesktopService",
        "Pixel icons unsupported on this platform, skipping {}x{} icon",
        icon.width,
        icon.height
    );
    Ok(())
}
