//! Notification dispatch
//!
//! Sequences one invocation: register with the notification service,
//! decode the icon, build the notification and submit it. The service
//! registration is held by a [`ServiceConnection`] so it is released on
//! every exit path, including decode and submission failures.

use std::path::Path;

use crate::cli::InvocationArgs;
use crate::config::Settings;
use crate::debug_context;
use crate::error::{NotifyError, Result};
use crate::icon::{IconDecoder, IconImage};
use crate::service::{NotificationService, ServiceConnection};

/// A notification ready for submission
///
/// Borrows everything from the dispatcher; it never outlives the submit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationRecord<'a> {
    pub summary: &'a str,
    pub body: &'a str,
    pub icon: &'a IconImage,
    /// Themed icon name slot, left empty since the icon travels as pixels
    pub icon_name: &'a str,
}

impl<'a> NotificationRecord<'a> {
    pub fn new(summary: &'a str, body: &'a str, icon: &'a IconImage) -> Self {
        Self {
            summary,
            body,
            icon,
            icon_name: "",
        }
    }
}

/// Progress of a single dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Start,
    ConnectionAcquired,
    IconDecoded,
    NotificationBuilt,
    Submitted,
    /// Finished successfully and the connection was released
    Released,
    /// Stopped on an error; any acquired connection was released
    Failed,
}

/// Drives one notification from arguments to the host service
pub struct Dispatcher<'a> {
    service: &'a dyn NotificationService,
    decoder: &'a dyn IconDecoder,
    settings: &'a Settings,
    state: DispatchState,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        service: &'a dyn NotificationService,
        decoder: &'a dyn IconDecoder,
        settings: &'a Settings,
    ) -> Self {
        Self {
            service,
            decoder,
            settings,
            state: DispatchState::Start,
        }
    }

    /// State reached by the most recent dispatch
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Show one notification for `args`
    pub fn dispatch(&mut self, args: &InvocationArgs) -> Result<()> {
        self.transition(DispatchState::Start);

        match self.dispatch_inner(args) {
            Ok(()) => {
                self.transition(DispatchState::Released);
                Ok(())
            }
            Err(e) => {
                debug_context!("Dispatcher", "Dispatch failed: {:?}", e);
                self.transition(DispatchState::Failed);
                Err(e)
            }
        }
    }

    fn dispatch_inner(&mut self, args: &InvocationArgs) -> Result<()> {
        let connection = ServiceConnection::acquire(self.service, &self.settings.app_id)
            .map_err(|e| NotifyError::ServiceInit {
                subsystem: self.service.subsystem(),
                reason: e.to_string(),
            })?;
        self.transition(DispatchState::ConnectionAcquired);

        let icon = self.decode_icon(Path::new(&args.icon_path))?;
        self.transition(DispatchState::IconDecoded);

        let record = NotificationRecord::new(&args.summary, &args.body, &icon);
        self.transition(DispatchState::NotificationBuilt);

        connection
            .submit(&record)
            .map_err(|e| NotifyError::Submit(e.to_string()))?;
        self.transition(DispatchState::Submitted);

        // connection drops here and releases the service
        Ok(())
    }

    /// Decode the icon, treating "no image and no diagnostic" as a failure
    fn decode_icon(&self, path: &Path) -> Result<IconImage> {
        let icon = self.decoder.decode(path)?.ok_or_else(|| {
            NotifyError::IconDecode(format!(
                "'{}' did not produce an image",
                path.display()
            ))
        })?;
        debug_context!(
            "Dispatcher",
            "Decoded {}x{} icon from {:?} ({})",
            icon.width,
            icon.height,
            icon.metadata.source_format,
            icon.metadata.source_color
        );
        Ok(icon)
    }

    fn transition(&mut self, next: DispatchState) {
        debug_context!("Dispatcher", "{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
