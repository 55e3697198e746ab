//! cliroute CLI entry point.

mod commands;

use std::process::ExitCode;

use cliroute::ui::{create_ui, UserInterface};
use cliroute::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cliroute=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cliroute=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Process-level options. Only recognized at the very front of the
/// arguments; everything after them is routed.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    debug: bool,
    no_color: bool,
}

fn take_options(args: &mut Vec<String>) -> Options {
    let mut options = Options::default();
    let mut taken = 0;
    for arg in args.iter() {
        match arg.as_str() {
            "--debug" => options.debug = true,
            "--no-color" => options.no_color = true,
            _ => break,
        }
        taken += 1;
    }
    args.drain(..taken);
    options
}

/// Map a command status onto a process exit status.
fn exit_status(status: i32) -> u8 {
    u8::try_from(status).unwrap_or(1)
}

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let options = take_options(&mut args);
    init_tracing(options.debug);

    tracing::debug!("cliroute starting with args: {:?}", args);

    let mut ui = create_ui(options.no_color);
    let mut cli = Cli::new("cliroute", env!("CARGO_PKG_VERSION")).with_args(args);

    let result = commands::register_all(&mut cli, &ui).and_then(|()| cli.run());
    match result {
        Ok(status) => ExitCode::from(exit_status(status)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn takes_leading_options() {
        let mut a = args(&["--no-color", "--debug", "echo", "--debug"]);
        let options = take_options(&mut a);
        assert_eq!(
            options,
            Options {
                debug: true,
                no_color: true
            }
        );
        assert_eq!(a, ["echo", "--debug"]);
    }

    #[test]
    fn options_after_other_flags_are_routed() {
        let mut a = args(&["-x", "--debug"]);
        assert_eq!(take_options(&mut a), Options::default());
        assert_eq!(a, ["-x", "--debug"]);
    }

    #[test]
    fn out_of_range_statuses_become_one() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(2), 2);
        assert_eq!(exit_status(-1), 1);
        assert_eq!(exit_status(300), 1);
    }
}
