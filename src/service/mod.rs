//! Host notification service
//!
//! This module provides the service seam used by the dispatcher, the
//! scoped connection guard, and the desktop backend built on notify-rust.

pub mod connection;
pub mod desktop;
pub mod r#trait;

pub use connection::ServiceConnection;
pub use desktop::DesktopService;
pub use r#trait::{NotificationService, ServiceResult};
