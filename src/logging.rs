//! Debug logging utilities
//!
//! Simple logging utilities for tracing a single invocation.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Settings;

/// Global debug flag (set from settings)
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize debug logging from settings
pub fn init_debug(settings: &Settings) {
    DEBUG_ENABLED.store(settings.verbose, Ordering::Relaxed);
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Log debug message
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

/// Log debug message with context
#[macro_export]
macro_rules! debug_context {
    ($context:expr, $($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[DEBUG] [{}] {}", $context, format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_disabled_by_default() {
        assert!(!is_debug_enabled());
    }
}
