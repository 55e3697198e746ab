//! Reader/writer backed UI.

use std::io::{BufRead, BufReader, IsTerminal, Write};

use dialoguer::Password;

use crate::error::{CliError, Result};

use super::UserInterface;

/// Convert dialoguer errors to CliError.
fn map_dialoguer_err(e: dialoguer::Error) -> CliError {
    let io: std::io::Error = e.into();
    if io.kind() == std::io::ErrorKind::Interrupted {
        CliError::Interrupted
    } else {
        CliError::Io(io)
    }
}

/// UI that writes to a writer and reads answers line by line.
///
/// Errors and warnings go to the error writer when one is set, otherwise
/// to the main writer. Not synchronized; wrap it in a
/// [`ConcurrentUi`](super::ConcurrentUi) to share it between threads.
pub struct BasicUi {
    reader: Box<dyn BufRead + Send>,
    writer: Box<dyn Write + Send>,
    error_writer: Option<Box<dyn Write + Send>>,
    secret_from_terminal: bool,
}

impl BasicUi {
    /// Create a UI over the given reader and writer.
    pub fn new<R, W>(reader: R, writer: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            reader: Box::new(reader),
            writer: Box::new(writer),
            error_writer: None,
            secret_from_terminal: false,
        }
    }

    /// UI over the process's stdin, stdout and stderr.
    ///
    /// Secrets are read without echo when stdin is a terminal.
    pub fn stdio() -> Self {
        let mut ui = Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
            .with_error_writer(std::io::stderr());
        ui.secret_from_terminal = std::io::stdin().is_terminal();
        ui
    }

    /// Send errors and warnings to a separate writer.
    pub fn with_error_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.error_writer = Some(Box::new(writer));
        self
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(CliError::InputClosed),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Err(CliError::Interrupted),
            Err(e) => Err(e.into()),
        }
    }

    fn prompt(&mut self, query: &str) -> Result<()> {
        write!(self.writer, "{} ", query)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl UserInterface for BasicUi {
    fn ask(&mut self, query: &str) -> Result<String> {
        self.prompt(query)?;
        self.read_answer()
    }

    fn ask_secret(&mut self, query: &str) -> Result<String> {
        if !self.secret_from_terminal {
            return self.ask(query);
        }
        Password::new()
            .with_prompt(query)
            .allow_empty_password(true)
            .interact()
            .map_err(map_dialoguer_err)
    }

    fn output(&mut self, msg: &str) {
        writeln!(self.writer, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        let writer = match self.error_writer.as_mut() {
            Some(w) => w,
            None => &mut self.writer,
        };
        writeln!(writer, "{}", msg).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SharedBuffer;
    use std::io::Cursor;

    fn ui_with_input(input: &str) -> (BasicUi, SharedBuffer) {
        let out = SharedBuffer::new();
        let ui = BasicUi::new(Cursor::new(input.as_bytes().to_vec()), out.clone());
        (ui, out)
    }

    #[test]
    fn ask_writes_query_and_reads_line() {
        let (mut ui, out) = ui_with_input("foo bar\nbaz\n");
        assert_eq!(ui.ask("Name?").unwrap(), "foo bar");
        assert_eq!(out.contents(), "Name? ");
    }

    #[test]
    fn ask_trims_crlf() {
        let (mut ui, _) = ui_with_input("yes\r\n");
        assert_eq!(ui.ask("Continue?").unwrap(), "yes");
    }

    #[test]
    fn ask_accepts_empty_line() {
        let (mut ui, _) = ui_with_input("\n");
        assert_eq!(ui.ask("Middle Name?").unwrap(), "");
    }

    #[test]
    fn ask_reads_successive_lines() {
        let (mut ui, _) = ui_with_input("one\ntwo\n");
        assert_eq!(ui.ask("a").unwrap(), "one");
        assert_eq!(ui.ask("b").unwrap(), "two");
    }

    #[test]
    fn ask_at_end_of_input_fails() {
        let (mut ui, _) = ui_with_input("");
        assert!(matches!(ui.ask("Name?"), Err(CliError::InputClosed)));
    }

    #[test]
    fn ask_secret_reads_line_when_not_a_terminal() {
        let (mut ui, out) = ui_with_input("hunter2\n");
        assert_eq!(ui.ask_secret("Password?").unwrap(), "hunter2");
        assert_eq!(out.contents(), "Password? ");
    }

    #[test]
    fn output_and_info_go_to_writer() {
        let (mut ui, out) = ui_with_input("");
        ui.output("HELLO");
        ui.info("WORLD");
        assert_eq!(out.contents(), "HELLO\nWORLD\n");
    }

    #[test]
    fn error_falls_back_to_writer() {
        let (mut ui, out) = ui_with_input("");
        ui.error("HELLO");
        ui.warn("WARN");
        assert_eq!(out.contents(), "HELLO\nWARN\n");
    }

    #[test]
    fn error_uses_error_writer() {
        let (ui, out) = ui_with_input("");
        let err = SharedBuffer::new();
        let mut ui = ui.with_error_writer(err.clone());
        ui.error("HELLO");
        ui.warn("WARN");
        assert_eq!(err.contents(), "HELLO\nWARN\n");
        assert!(out.is_empty());
    }
}
