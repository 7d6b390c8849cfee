//! CLI entry point for icon-notify
//!
//! Usage: `icon-notify [options] <icon_file> <summary> <body>`
//!
//! Decodes the icon file, shows one desktop notification with it and exits.

use icon_notify::{run, DesktopService, ImageFileDecoder};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let tokens: Vec<String> = std::env::args().collect();

    let service = DesktopService::new();
    let decoder = ImageFileDecoder::new();

    let status = run(
        &tokens,
        &service,
        &decoder,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}
