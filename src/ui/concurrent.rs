//! Thread-safe UI handle.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;

use super::UserInterface;

/// Serializes every call to a wrapped UI behind one lock.
///
/// Cloning yields another handle to the same UI, so each thread can own a
/// clone. Only this layer is synchronized; the wrapped UI need not be.
#[derive(Debug)]
pub struct ConcurrentUi<U> {
    inner: Arc<Mutex<U>>,
}

impl<U> Clone for ConcurrentUi<U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<U: UserInterface> ConcurrentUi<U> {
    /// Wrap `inner`.
    pub fn new(inner: U) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Run `f` with exclusive access to the wrapped UI.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut U) -> R) -> R {
        f(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, U> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<U: UserInterface> UserInterface for ConcurrentUi<U> {
    fn ask(&mut self, query: &str) -> Result<String> {
        self.lock().ask(query)
    }

    fn ask_secret(&mut self, query: &str) -> Result<String> {
        self.lock().ask_secret(query)
    }

    fn output(&mut self, msg: &str) {
        self.lock().output(msg);
    }

    fn info(&mut self, msg: &str) {
        self.lock().info(msg);
    }

    fn error(&mut self, msg: &str) {
        self.lock().error(msg);
    }

    fn warn(&mut self, msg: &str) {
        self.lock().warn(msg);
    }
}
