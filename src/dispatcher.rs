//! Command dispatching.
//!
//! This module provides the invocation-level machinery:
//! - [`Action`], the single terminal decision made for an invocation
//! - [`resolve`], which picks the action from a classification
//! - [`Cli`], which owns the registry, the memoized classification and the
//!   help sink, and turns the action into an exit code
//!
//! # Example
//!
//! ```
//! use cliroute::command::{factory, MockCommand};
//! use cliroute::Cli;
//!
//! let foo = MockCommand::new().with_run_result(7);
//! let handle = foo.clone();
//!
//! let mut cli = Cli::new("app", "1.0.0").with_args(["foo", "-bar"]);
//! cli.register("foo", factory(move || Ok(foo.clone()))).unwrap();
//!
//! assert_eq!(cli.run().unwrap(), 7);
//! assert_eq!(handle.run_args(), Some(vec!["-bar".to_string()]));
//! ```

use std::fmt;
use std::io::Write;

use crate::classifier::{Classification, Classifier};
use crate::command::{output_sink, Command, CommandFactory, OutputSink, TextCommand};
use crate::error::{CliError, Result};
use crate::help::{basic_help_func, command_help, HelpFunc};
use crate::path::CommandPath;
use crate::registry::CommandRegistry;

/// Exit status for every outcome that only explains itself.
pub const EXPLAIN_EXIT_CODE: i32 = 1;

/// Guidance printed when flags precede the command.
pub const INVALID_TOP_FLAGS_TEXT: &str = "Invalid flags before the subcommand. If these flags are for\n\
     the subcommand, please put them after the subcommand.\n\n";

/// What an invocation does. Every action is terminal.
pub enum Action {
    /// Flags appeared before any command.
    InvalidTopFlags,
    /// Print the configured version.
    ShowVersion,
    /// No command matched; print global help.
    ShowGlobalHelp,
    /// Print the resolved command's help instead of running it.
    ShowCommandHelp(Box<dyn Command>),
    /// Run the resolved command.
    Execute(Box<dyn Command>),
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidTopFlags => "invalid-top-flags",
            Self::ShowVersion => "show-version",
            Self::ShowGlobalHelp => "show-global-help",
            Self::ShowCommandHelp(_) => "show-command-help",
            Self::Execute(_) => "execute",
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the action for an invocation whose leading flags were accepted.
///
/// Called with the classification, the full registry and the configured
/// version. A chooser replaces the version, lookup and help steps of
/// [`resolve`]; leading-flag rejection always happens first. An
/// [`Action::Execute`] it returns runs with the classified residual
/// arguments.
pub type SubcommandChooser =
    Box<dyn Fn(&Classification, &CommandRegistry, Option<&str>) -> Result<Action> + Send + Sync>;

/// Decide the action for a classified invocation.
///
/// Builds the command when one is needed. A failing factory is returned as
/// [`CliError::CommandConstruction`]; nothing is retried.
pub fn resolve(
    classification: &Classification,
    registry: &CommandRegistry,
    version: Option<&str>,
) -> Result<Action> {
    if !classification.top_flags().is_empty() {
        return Ok(Action::InvalidTopFlags);
    }
    choose_subcommand(classification, registry, version)
}

/// The standard chooser: version, then lookup, then command help or
/// execution. Unknown paths fall back to global help.
pub fn choose_subcommand(
    classification: &Classification,
    registry: &CommandRegistry,
    version: Option<&str>,
) -> Result<Action> {
    let path = classification.path();
    if classification.is_version() && path.is_root() && version.is_some() {
        return Ok(Action::ShowVersion);
    }

    // The empty path is the default command's key.
    let Some(factory) = registry.lookup(path) else {
        return Ok(Action::ShowGlobalHelp);
    };

    let command = build(factory, path)?;
    if classification.is_help() {
        Ok(Action::ShowCommandHelp(command))
    } else {
        Ok(Action::Execute(command))
    }
}

/// [`choose_subcommand`] boxed as a [`SubcommandChooser`].
pub fn default_subcommand_chooser() -> SubcommandChooser {
    Box::new(choose_subcommand)
}

fn build(factory: &CommandFactory, path: &CommandPath) -> Result<Box<dyn Command>> {
    factory().map_err(|source| {
        tracing::warn!("Factory for '{}' failed: {}", path, source);
        CliError::CommandConstruction {
            path: path.to_string(),
            source,
        }
    })
}

/// State for one CLI invocation.
///
/// Build the full registry before the first accessor call or [`Cli::run`];
/// the first classification freezes it.
pub struct Cli {
    name: String,
    version: Option<String>,
    registry: CommandRegistry,
    classifier: Classifier,
    help_func: HelpFunc,
    help_writer: OutputSink,
    chooser: SubcommandChooser,
}

impl Cli {
    /// Create a CLI with no arguments and stderr as the help sink.
    ///
    /// An empty `version` means no version is configured.
    pub fn new(name: &str, version: &str) -> Self {
        let help_name = if name.is_empty() { "app" } else { name };
        Self {
            name: name.to_string(),
            version: (!version.is_empty()).then(|| version.to_string()),
            registry: CommandRegistry::new(),
            classifier: Classifier::default(),
            help_func: basic_help_func(help_name),
            help_writer: output_sink(std::io::stderr()),
            chooser: default_subcommand_chooser(),
        }
    }

    /// Create a CLI over the process arguments, program name excluded.
    pub fn from_env(name: &str, version: &str) -> Self {
        Self::new(name, version).with_args(std::env::args().skip(1))
    }

    /// Set the arguments, program name excluded.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classifier = Classifier::new(args);
        self
    }

    /// Replace the global help renderer.
    pub fn with_help_func(mut self, help_func: HelpFunc) -> Self {
        self.help_func = help_func;
        self
    }

    /// Replace the sink for help, version and usage text.
    pub fn with_help_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.help_writer = output_sink(writer);
        self
    }

    /// Replace the step that turns a classification into an action.
    ///
    /// Flags before the command are still rejected before the chooser runs.
    pub fn with_subcommand_chooser(mut self, chooser: SubcommandChooser) -> Self {
        self.chooser = chooser;
        self
    }

    /// Register a command factory. See [`CommandRegistry::register`].
    pub fn register(&mut self, path: &str, factory: CommandFactory) -> Result<()> {
        self.registry.register(path, factory)
    }

    /// Keep a command out of help listings.
    pub fn hide(&mut self, path: &str) {
        self.registry.hide(path);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn args(&self) -> &[String] {
        self.classifier.args()
    }

    /// The memoized classification of the arguments.
    pub fn classification(&self) -> &Classification {
        self.classifier.classification(&self.registry)
    }

    /// Whether a help marker preceded the command.
    pub fn is_help(&self) -> bool {
        self.classification().is_help()
    }

    /// Whether a version marker preceded the command.
    pub fn is_version(&self) -> bool {
        self.classification().is_version()
    }

    /// The command path that would run. `--version version --help` gives `version`.
    pub fn subcommand(&self) -> &CommandPath {
        self.classification().path()
    }

    /// Arguments that would be passed to the command.
    pub fn subcommand_args(&self) -> &[String] {
        self.classification().residual_args()
    }

    /// Flags found before the command.
    pub fn top_flags(&self) -> &[String] {
        self.classification().top_flags()
    }

    /// Global help text for the current registry.
    pub fn global_help(&self) -> String {
        (self.help_func)(&self.registry)
    }

    /// Decide what this invocation does without doing it.
    pub fn resolve(&self) -> Result<Action> {
        let classification = self.classification();
        if !classification.top_flags().is_empty() {
            return Ok(Action::InvalidTopFlags);
        }
        (self.chooser)(classification, &self.registry, self.version())
    }

    /// Run the CLI and return the exit status.
    ///
    /// Explanatory outcomes (usage errors, help, version) write to the help
    /// sink and return 1. A command that fails to construct is returned as
    /// an error with no exit status.
    pub fn run(&self) -> Result<i32> {
        let action = self.resolve()?;
        tracing::debug!("Dispatching '{}' as {:?}", self.subcommand(), action);

        let code = match action {
            Action::InvalidTopFlags => {
                self.explain(format!("{}{}\n", INVALID_TOP_FLAGS_TEXT, self.global_help()))
            }
            Action::ShowVersion => {
                self.explain(format!("{}\n", self.version().unwrap_or_default()))
            }
            Action::ShowGlobalHelp => self.explain(self.global_help()),
            Action::ShowCommandHelp(command) => {
                let mut text = command_help(command.as_ref(), self.subcommand(), &self.registry);
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                self.explain(text)
            }
            Action::Execute(mut command) => command.run(self.subcommand_args()),
        };
        Ok(code)
    }

    fn explain(&self, text: String) -> i32 {
        TextCommand::new(self.help_writer.clone(), text).run(&[])
    }
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("registry", &self.registry)
            .field("classifier", &self.classifier)
            .finish()
    }
}
