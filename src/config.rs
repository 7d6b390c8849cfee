//! Runtime settings for a single invocation
//!
//! There is no configuration file and no environment lookup: settings are
//! derived from the command line and a few fixed identifiers.

/// Application identifier registered with the notification service
pub const APP_ID: &str = "icon-notify";

/// Human-readable name of the host notification subsystem
pub const SUBSYSTEM: &str = "desktop notifications";

/// Settings resolved for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Identity the process registers under
    pub app_id: String,

    /// Subsystem label used in initialization diagnostics
    pub subsystem: &'static str,

    /// Emit debug logging to stderr
    pub verbose: bool,
}

impl Settings {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_id: APP_ID.to_string(),
            subsystem: SUBSYSTEM,
            verbose: false,
        }
    }
}
