//! The command contract.
//!
//! Every routable command implements [`Command`]. Commands are not stored
//! directly in the registry; a [`CommandFactory`] builds a fresh instance
//! for each dispatch, so a command can set up whatever state it needs and
//! report a construction failure separately from its run-time status.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Shared, write-only text sink for help and version output.
pub type OutputSink = Arc<Mutex<dyn Write + Send>>;

/// Wrap a writer into an [`OutputSink`].
pub fn output_sink<W: Write + Send + 'static>(writer: W) -> OutputSink {
    Arc::new(Mutex::new(writer))
}

/// A runnable command of a CLI.
pub trait Command {
    /// Long-form help text: usage, a few sentences on what the command
    /// does, and the complete list of flags it accepts.
    fn help(&self) -> String;

    /// One-line synopsis, ideally under 50 characters.
    fn synopsis(&self) -> String;

    /// Run the command with the arguments that follow its path.
    ///
    /// Returns the process exit status.
    fn run(&mut self, args: &[String]) -> i32;
}

/// Builds a command instance, or fails with a construction error.
pub type CommandFactory = Box<dyn Fn() -> anyhow::Result<Box<dyn Command>> + Send + Sync>;

/// Box a closure as a [`CommandFactory`].
///
/// ```
/// use cliroute::command::{factory, Command, MockCommand};
///
/// let f = factory(|| Ok(MockCommand::new()));
/// let cmd = f().unwrap();
/// assert_eq!(cmd.synopsis(), "");
/// ```
pub fn factory<F, C>(build: F) -> CommandFactory
where
    F: Fn() -> anyhow::Result<C> + Send + Sync + 'static,
    C: Command + 'static,
{
    Box::new(move || build().map(|cmd| Box::new(cmd) as Box<dyn Command>))
}

/// A command that writes a fixed text to a sink and exits with status 1.
///
/// The dispatcher substitutes one of these for any outcome that only
/// explains itself: help, version, and usage errors.
pub struct TextCommand {
    writer: OutputSink,
    text: String,
}

impl TextCommand {
    /// Create a command that writes `text` to `writer`.
    pub fn new(writer: OutputSink, text: impl Into<String>) -> Self {
        Self {
            writer,
            text: text.into(),
        }
    }

    /// The text this command writes.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Command for TextCommand {
    fn help(&self) -> String {
        self.text.clone()
    }

    fn synopsis(&self) -> String {
        self.text.clone()
    }

    fn run(&mut self, _args: &[String]) -> i32 {
        // A poisoned sink still holds a usable writer.
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writer.write_all(self.text.as_bytes()).and_then(|_| writer.flush()) {
            tracing::warn!("Failed to write help output: {}", e);
        }
        1
    }
}

/// Command implementation for tests.
///
/// Clones share their invocation record, so a test can keep one clone and
/// hand another to a factory:
///
/// ```
/// use cliroute::command::{Command, MockCommand};
///
/// let cmd = MockCommand::new().with_run_result(3);
/// let mut handed_out = cmd.clone();
/// assert_eq!(handed_out.run(&["-x".to_string()]), 3);
/// assert!(cmd.run_called());
/// assert_eq!(cmd.run_args(), Some(vec!["-x".to_string()]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCommand {
    help_text: String,
    synopsis_text: String,
    run_result: i32,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockCommand {
    /// Create a mock with empty help, empty synopsis and run result 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the help text.
    pub fn with_help(mut self, text: &str) -> Self {
        self.help_text = text.to_string();
        self
    }

    /// Set the synopsis text.
    pub fn with_synopsis(mut self, text: &str) -> Self {
        self.synopsis_text = text.to_string();
        self
    }

    /// Set the status returned by `run`.
    pub fn with_run_result(mut self, result: i32) -> Self {
        self.run_result = result;
        self
    }

    /// Whether `run` was called on this mock or any clone of it.
    pub fn run_called(&self) -> bool {
        !self.calls().is_empty()
    }

    /// Number of `run` calls.
    pub fn run_count(&self) -> usize {
        self.calls().len()
    }

    /// Arguments of the most recent `run` call.
    pub fn run_args(&self) -> Option<Vec<String>> {
        self.calls().last().cloned()
    }

    fn calls(&self) -> std::sync::MutexGuard<'_, Vec<Vec<String>>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Command for MockCommand {
    fn help(&self) -> String {
        self.help_text.clone()
    }

    fn synopsis(&self) -> String {
        self.synopsis_text.clone()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        self.calls().push(args.to_vec());
        self.run_result
    }
}
