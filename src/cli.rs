//! Command-line argument resolution
//!
//! Turns the raw process arguments into either a ready-to-dispatch
//! [`InvocationArgs`] or one of the short-circuit outcomes (help, version,
//! usage failure). Parsing has no side effects: nothing is printed here.

use clap::{CommandFactory, Parser};
use std::path::Path;

use crate::config::{Settings, APP_ID};
use crate::error::NotifyError;

/// Command-line arguments for icon-notify
#[derive(Parser, Debug)]
#[command(
    name = "icon-notify",
    about = "Show a desktop notification with a custom icon",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// print this help message and exit.
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// print version information and exit.
    #[arg(short = 'V', long = "version")]
    version: bool,

    /// log every step to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// icon file.
    #[arg(value_name = "icon_file")]
    icon: Option<String>,

    /// message summary.
    #[arg(value_name = "summary")]
    summary: Option<String>,

    /// message body (may contain markup).
    #[arg(value_name = "body")]
    body: Option<String>,

    /// Trailing tokens past the body are accepted and ignored
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

/// Values needed to show one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    /// Path of the image file used as the notification icon
    pub icon_path: String,
    /// One-line notification summary
    pub summary: String,
    /// Notification body, possibly with lightweight markup
    pub body: String,
}

/// Outcome of resolving the command line
#[derive(Debug)]
pub enum Resolution {
    /// All positionals present; go on to dispatch
    Invocation(InvocationArgs, Settings),
    /// `--help` was given anywhere
    Help,
    /// `--version` was given
    Version,
    /// Required values missing or an option was not understood
    Usage(NotifyError),
}

/// Resolve raw tokens (including the program name) into a [`Resolution`]
pub fn resolve(tokens: &[String]) -> Resolution {
    let cli = match Cli::try_parse_from(tokens) {
        Ok(cli) => cli,
        Err(err) => {
            if help_token_present(tokens) {
                return Resolution::Help;
            }
            let detail = err.to_string();
            let first_line = detail.lines().next().unwrap_or_default();
            return Resolution::Usage(NotifyError::Usage(
                first_line.trim_start_matches("error: ").to_string(),
            ));
        }
    };

    if cli.help {
        return Resolution::Help;
    }
    if cli.version {
        return Resolution::Version;
    }

    match (cli.icon, cli.summary, cli.body) {
        (Some(icon_path), Some(summary), Some(body)) => Resolution::Invocation(
            InvocationArgs {
                icon_path,
                summary,
                body,
            },
            Settings::new(cli.verbose),
        ),
        (icon, summary, _) => {
            let mut missing = Vec::new();
            if icon.is_none() {
                missing.push("<icon_file>");
            }
            if summary.is_none() {
                missing.push("<summary>");
            }
            missing.push("<body>");
            Resolution::Usage(NotifyError::Usage(format!(
                "missing required argument: {}",
                missing.join(", ")
            )))
        }
    }
}

/// A separate `--help`/`-h` token before any `--` terminator
fn help_token_present(tokens: &[String]) -> bool {
    tokens
        .iter()
        .skip(1)
        .take_while(|token| token.as_str() != "--")
        .any(|token| token == "--help" || token == "-h")
}

/// Program name as invoked, for the usage line
pub fn program_name(tokens: &[String]) -> String {
    tokens
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_ID.to_string())
}

/// Render the usage text printed for `--help` and usage failures
pub fn usage_text(program: &str) -> String {
    Cli::command()
        .override_usage(format!("{} [options] <icon_file> <summary> <body>", program))
        .render_help()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        std::iter::once("icon-notify")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_cli_args() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_binding_order() {
        match resolve(&tokens(&["foo.png", "Build OK", "<b>done</b>"])) {
            Resolution::Invocation(args, settings) => {
                assert_eq!(
                    args,
                    InvocationArgs {
                        icon_path: "foo.png".to_string(),
                        summary: "Build OK".to_string(),
                        body: "<b>done</b>".to_string(),
                    }
                );
                assert!(!settings.verbose);
            }
            other => panic!("Expected Invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_help_substring_in_body_is_not_a_flag() {
        match resolve(&tokens(&["foo.png", "Build OK", "see --help for details"])) {
            Resolution::Invocation(args, _) => {
                assert_eq!(args.body, "see --help for details");
            }
            other => panic!("Expected Invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_help_short_circuits_positionals() {
        assert!(matches!(
            resolve(&tokens(&["foo.png", "Build OK", "done", "--help"])),
            Resolution::Help
        ));
        assert!(matches!(
            resolve(&tokens(&["--help", "foo.png"])),
            Resolution::Help
        ));
        assert!(matches!(resolve(&tokens(&["-h"])), Resolution::Help));
    }

    #[test]
    fn test_help_wins_over_unknown_option() {
        assert!(matches!(
            resolve(&tokens(&["--bogus", "--help"])),
            Resolution::Help
        ));
    }

    #[test]
    fn test_help_wins_over_version() {
        assert!(matches!(
            resolve(&tokens(&["--version", "--help"])),
            Resolution::Help
        ));
        assert!(matches!(resolve(&tokens(&["-V"])), Resolution::Version));
    }

    #[test]
    fn test_missing_positionals_is_usage_failure() {
        match resolve(&tokens(&["icon.png", "Hello"])) {
            Resolution::Usage(NotifyError::Usage(message)) => {
                assert_eq!(message, "missing required argument: <body>");
            }
            other => panic!("Expected Usage, got {:?}", other),
        }

        match resolve(&tokens(&[])) {
            Resolution::Usage(NotifyError::Usage(message)) => {
                assert!(message.contains("<icon_file>"));
                assert!(message.contains("<summary>"));
                assert!(message.contains("<body>"));
            }
            other => panic!("Expected Usage, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_option_is_usage_failure() {
        match resolve(&tokens(&["--bogus", "icon.png", "Hello", "World"])) {
            Resolution::Usage(NotifyError::Usage(message)) => {
                assert!(message.contains("--bogus"));
            }
            other => panic!("Expected Usage, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        match resolve(&tokens(&["icon.png", "Hello", "World", "extra", "more"])) {
            Resolution::Invocation(args, _) => {
                assert_eq!(args.icon_path, "icon.png");
                assert_eq!(args.summary, "Hello");
                assert_eq!(args.body, "World");
            }
            other => panic!("Expected Invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_flag() {
        match resolve(&tokens(&["-v", "icon.png", "Hello", "World"])) {
            Resolution::Invocation(_, settings) => assert!(settings.verbose),
            other => panic!("Expected Invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_usage_text() {
        let text = usage_text("icon-notify");
        assert!(text.contains("icon-notify [options] <icon_file> <summary> <body>"));
        assert!(text.contains("--help"));
        assert!(text.contains("icon file"));
        assert!(text.contains("message summary"));
        assert!(text.contains("message body"));
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name(&tokens(&[])), "icon-notify");
        assert_eq!(
            program_name(&["/usr/local/bin/notify-icon".to_string()]),
            "notify-icon"
        );
        assert_eq!(program_name(&[]), "icon-notify");
    }
}
