//! Prefixing decorator.

use crate::error::Result;

use super::UserInterface;

/// Per-kind prefixes for [`PrefixedUi`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefixes {
    pub ask: String,
    pub ask_secret: String,
    pub output: String,
    pub info: String,
    pub error: String,
    pub warn: String,
}

/// UI decorator that prepends a prefix to every non-empty message.
///
/// Empty messages pass through unchanged so blank lines stay blank.
#[derive(Debug, Clone)]
pub struct PrefixedUi<U> {
    prefixes: Prefixes,
    inner: U,
}

impl<U: UserInterface> PrefixedUi<U> {
    pub fn new(inner: U, prefixes: Prefixes) -> Self {
        Self { prefixes, inner }
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }
}

fn prefixed(prefix: &str, msg: &str) -> String {
    if msg.is_empty() {
        String::new()
    } else {
        format!("{}{}", prefix, msg)
    }
}

impl<U: UserInterface> UserInterface for PrefixedUi<U> {
    fn ask(&mut self, query: &str) -> Result<String> {
        let query = prefixed(&self.prefixes.ask, query);
        self.inner.ask(&query)
    }

    fn ask_secret(&mut self, query: &str) -> Result<String> {
        let query = prefixed(&self.prefixes.ask_secret, query);
        self.inner.ask_secret(&query)
    }

    fn output(&mut self, msg: &str) {
        let msg = prefixed(&self.prefixes.output, msg);
        self.inner.output(&msg);
    }

    fn info(&mut self, msg: &str) {
        let msg = prefixed(&self.prefixes.info, msg);
        self.inner.info(&msg);
    }

    fn error(&mut self, msg: &str) {
        let msg = prefixed(&self.prefixes.error, msg);
        self.inner.error(&msg);
    }

    fn warn(&mut self, msg: &str) {
        let msg = prefixed(&self.prefixes.warn, msg);
        self.inner.warn(&msg);
    }
}
