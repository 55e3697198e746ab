//! cliroute - Subcommand routing and dispatch for command-line applications.
//!
//! cliroute takes the raw argument list of a program, works out which
//! registered command should run and with which arguments, and handles
//! `--help` and `--version` along the way. Commands are registered by
//! path, and paths may be nested (`"apps list"`); nested paths resolve by
//! longest registered prefix.
//!
//! # Modules
//!
//! - [`classifier`] - Single-pass argument classification, memoized per invocation
//! - [`command`] - The command contract, factories and test doubles
//! - [`dispatcher`] - Action selection and the [`Cli`] entry point
//! - [`error`] - Error types and result aliases
//! - [`help`] - Global and per-command help rendering
//! - [`path`] - Command paths
//! - [`registry`] - Command registry with nested-path lookup
//! - [`ui`] - Terminal interaction for commands
//!
//! # Example
//!
//! ```
//! use cliroute::command::{factory, MockCommand};
//! use cliroute::Cli;
//!
//! let list = MockCommand::new().with_run_result(0);
//! let mut cli = Cli::new("app", "1.0.0").with_args(["apps", "list", "--all"]);
//! cli.register("apps", factory(|| Ok(MockCommand::new()))).unwrap();
//! let l = list.clone();
//! cli.register("apps list", factory(move || Ok(l.clone()))).unwrap();
//!
//! assert_eq!(cli.subcommand().to_string(), "apps list");
//! assert_eq!(cli.run().unwrap(), 0);
//! assert_eq!(list.run_args(), Some(vec!["--all".to_string()]));
//! ```

pub mod classifier;
pub mod command;
pub mod dispatcher;
pub mod error;
pub mod help;
pub mod path;
pub mod registry;
pub mod ui;

pub use classifier::{classify, Classification, Classifier};
pub use command::{Command, CommandFactory};
pub use dispatcher::{resolve, Action, Cli, SubcommandChooser};
pub use error::{CliError, Result};
pub use path::CommandPath;
pub use registry::CommandRegistry;
