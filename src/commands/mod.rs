//! Commands of the `cliroute` binary.
//!
//! Each command parses its own arguments with clap; the router only hands
//! over whatever follows the command path.

pub mod echo;
pub mod greet;
pub mod routes;

use cliroute::command::factory;
use cliroute::ui::UserInterface;
use cliroute::{Cli, CommandFactory, CommandRegistry};

use echo::EchoCommand;
use greet::GreetCommand;
use routes::{ExplainCommand, RoutesCommand};

/// A UI that commands can share across factory calls.
pub trait SharedUi: UserInterface + Clone + Send + Sync + 'static {}

impl<U: UserInterface + Clone + Send + Sync + 'static> SharedUi for U {}

/// Every command of the binary, by path.
pub fn factories<U: SharedUi>(ui: &U) -> Vec<(&'static str, CommandFactory)> {
    let echo_ui = ui.clone();
    let greet_ui = ui.clone();
    let routes_ui = ui.clone();
    let explain_ui = ui.clone();
    vec![
        ("echo", factory(move || Ok(EchoCommand::new(echo_ui.clone())))),
        ("greet", factory(move || Ok(GreetCommand::new(greet_ui.clone())))),
        ("routes", factory(move || Ok(RoutesCommand::new(routes_ui.clone())))),
        (
            "routes explain",
            factory(move || Ok(ExplainCommand::new(explain_ui.clone()))),
        ),
    ]
}

/// Register every command on `cli`.
pub fn register_all<U: SharedUi>(cli: &mut Cli, ui: &U) -> cliroute::Result<()> {
    for (path, f) in factories(ui) {
        cli.register(path, f)?;
    }
    Ok(())
}

/// A standalone registry with the same commands as the binary.
pub fn registry<U: SharedUi>(ui: &U) -> cliroute::Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    for (path, f) in factories(ui) {
        registry.register(path, f)?;
    }
    Ok(registry)
}

/// Parse `args` for the clap parser `P`, reporting clap's own output.
///
/// Returns the exit status to use when parsing did not produce arguments:
/// 0 after `--help`, 2 for usage errors.
pub fn parse_args<P, U>(name: &str, args: &[String], ui: &mut U) -> Result<P, i32>
where
    P: clap::Parser,
    U: UserInterface,
{
    let argv = std::iter::once(name).chain(args.iter().map(String::as_str));
    P::try_parse_from(argv).map_err(|e| {
        let text = e.to_string();
        match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                ui.output(text.trim_end());
                0
            }
            _ => {
                ui.error(text.trim_end());
                2
            }
        }
    })
}

/// Rendered clap help for `P`.
pub fn clap_help<P: clap::CommandFactory>() -> String {
    P::command().render_help().to_string()
}
