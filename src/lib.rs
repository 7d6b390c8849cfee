//! Core logic for icon-notify
//!
//! This crate shows a single desktop notification whose icon is decoded
//! from an arbitrary image file. [`run`] performs a whole invocation
//! against injected collaborators so the binary is a thin wrapper around it.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod icon;
pub mod logging;
pub mod service;

use std::io::Write;

pub use cli::{resolve, usage_text, InvocationArgs, Resolution};
pub use config::Settings;
pub use dispatcher::{DispatchState, Dispatcher, NotificationRecord};
pub use error::{NotifyError, Result, ServiceError, EXIT_FAILURE};
pub use icon::{IconDecoder, IconImage, IconMetadata, ImageFileDecoder, PixelFormat};
pub use service::{DesktopService, NotificationService, ServiceConnection};

// Version constants from build script
const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT_HASH: &str = env!("GIT_COMMIT_HASH");
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

/// Detailed version information
pub fn version_text() -> String {
    format!(
        "icon-notify {}\ncommit: {}\nbuilt: {}",
        VERSION, COMMIT_HASH, BUILD_TIMESTAMP
    )
}

/// Run one invocation and return the process exit status
///
/// Usage and version text go to `out`; diagnostics go to `err`.
pub fn run<W: Write, E: Write>(
    tokens: &[String],
    service: &dyn NotificationService,
    decoder: &dyn IconDecoder,
    out: &mut W,
    err: &mut E,
) -> u8 {
    match execute(tokens, service, decoder, out, err) {
        Ok(status) => status,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            e.exit_code()
        }
    }
}

fn execute<W: Write, E: Write>(
    tokens: &[String],
    service: &dyn NotificationService,
    decoder: &dyn IconDecoder,
    out: &mut W,
    err: &mut E,
) -> Result<u8> {
    let program = cli::program_name(tokens);

    match cli::resolve(tokens) {
        Resolution::Help => {
            write!(out, "{}", usage_text(&program))?;
            Ok(0)
        }
        Resolution::Version => {
            writeln!(out, "{}", version_text())?;
            Ok(0)
        }
        Resolution::Usage(e) => {
            writeln!(err, "{}", e)?;
            write!(out, "{}", usage_text(&program))?;
            Ok(e.exit_code())
        }
        Resolution::Invocation(args, settings) => {
            logging::init_debug(&settings);
            debug_log!("Resolved arguments: {:?}", args);

            Dispatcher::new(service, decoder, &settings).dispatch(&args)?;
            Ok(0)
        }
    }
}
