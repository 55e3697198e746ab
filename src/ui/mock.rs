//! Mock UI implementation for testing.
//!
//! `MockUi` implements [`UserInterface`] and captures everything written to
//! it. Clones share their buffers and input queue, so a test can keep one
//! clone for assertions while the code under test owns another.
//!
//! # Example
//!
//! ```
//! use cliroute::ui::{MockUi, UserInterface};
//!
//! let mock = MockUi::new();
//! mock.queue_input("Mitchell");
//!
//! let mut ui = mock.clone();
//! let name = ui.ask("Name?").unwrap();
//! ui.output(&format!("Hello, {}", name));
//!
//! assert_eq!(mock.output_text(), "Name?Hello, Mitchell\n");
//! ```

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CliError, Result};

use super::UserInterface;

/// A cloneable in-memory writer.
///
/// Every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard the contents.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Mock UI implementation for testing.
///
/// Questions are written to the output buffer as-is (no trailing space)
/// and answered from a queue of canned inputs.
#[derive(Debug, Clone, Default)]
pub struct MockUi {
    output: SharedBuffer,
    errors: SharedBuffer,
    input: Arc<Mutex<VecDeque<String>>>,
}

impl MockUi {
    /// Create a mock with empty buffers and no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `ask` or `ask_secret`.
    pub fn queue_input(&self, answer: &str) {
        self.input_queue().push_back(answer.to_string());
    }

    /// Text written through `output` and `info`, plus asked questions.
    pub fn output_text(&self) -> String {
        self.output.contents()
    }

    /// Text written through `error` and `warn`.
    pub fn error_text(&self) -> String {
        self.errors.contents()
    }

    /// The output buffer.
    pub fn output_buffer(&self) -> &SharedBuffer {
        &self.output
    }

    /// The error buffer.
    pub fn error_buffer(&self) -> &SharedBuffer {
        &self.errors
    }

    fn input_queue(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.input.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserInterface for MockUi {
    fn ask(&mut self, query: &str) -> Result<String> {
        self.output.write_all(query.as_bytes())?;
        self.input_queue().pop_front().ok_or(CliError::InputClosed)
    }

    fn ask_secret(&mut self, query: &str) -> Result<String> {
        self.ask(query)
    }

    fn output(&mut self, msg: &str) {
        writeln!(self.output, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.errors, "{}", msg).ok();
    }
}
