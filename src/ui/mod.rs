//! Terminal interaction for commands.
//!
//! This module provides:
//! - [`UserInterface`] trait for asking questions and writing messages
//! - [`BasicUi`] which talks to a reader and writers (stdio by default)
//! - [`PrefixedUi`] and [`ColoredUi`] decorators that transform text
//!   before delegating to an inner UI
//! - [`ConcurrentUi`], a cloneable handle that serializes every call to
//!   the UI it wraps behind one lock
//! - [`MockUi`] for tests
//!
//! Decorators compose by wrapping:
//!
//! ```
//! use cliroute::ui::{ColoredUi, MockUi, PrefixedUi, Prefixes, UiColor, UserInterface};
//!
//! let mock = MockUi::new();
//! let mut ui = PrefixedUi::new(
//!     ColoredUi::plain(mock.clone()).with_error_color(UiColor::NONE),
//!     Prefixes {
//!         error: "error: ".to_string(),
//!         ..Prefixes::default()
//!     },
//! );
//! ui.error("disk full");
//! assert_eq!(mock.error_text(), "error: disk full\n");
//! ```

pub mod basic;
pub mod colored;
pub mod concurrent;
pub mod mock;
pub mod prefixed;

pub use basic::BasicUi;
pub use colored::{should_use_colors, ColoredUi, UiColor};
pub use concurrent::ConcurrentUi;
pub use mock::{MockUi, SharedBuffer};
pub use prefixed::{PrefixedUi, Prefixes};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows layering and mocking the UI.
pub trait UserInterface {
    /// Ask the user a question and return the answer line.
    fn ask(&mut self, query: &str) -> Result<String>;

    /// Ask a question without echoing the answer.
    fn ask_secret(&mut self, query: &str) -> Result<String>;

    /// Normal standard output.
    fn output(&mut self, msg: &str);

    /// Information related to previous output.
    fn info(&mut self, msg: &str) {
        self.output(msg);
    }

    /// Error messages.
    fn error(&mut self, msg: &str);

    /// Warning messages.
    fn warn(&mut self, msg: &str) {
        self.error(msg);
    }
}

impl<U: UserInterface + ?Sized> UserInterface for Box<U> {
    fn ask(&mut self, query: &str) -> Result<String> {
        (**self).ask(query)
    }

    fn ask_secret(&mut self, query: &str) -> Result<String> {
        (**self).ask_secret(query)
    }

    fn output(&mut self, msg: &str) {
        (**self).output(msg);
    }

    fn info(&mut self, msg: &str) {
        (**self).info(msg);
    }

    fn error(&mut self, msg: &str) {
        (**self).error(msg);
    }

    fn warn(&mut self, msg: &str) {
        (**self).warn(msg);
    }
}

/// The standard process UI: colored stdio behind a shared lock.
pub type StdUi = ConcurrentUi<ColoredUi<BasicUi>>;

/// Create the UI for the current process.
///
/// Colors follow [`should_use_colors`] unless `no_color` is set.
pub fn create_ui(no_color: bool) -> StdUi {
    let basic = BasicUi::stdio();
    let colored = if no_color || !should_use_colors() {
        ColoredUi::plain(basic)
    } else {
        ColoredUi::new(basic)
    };
    ConcurrentUi::new(colored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_ui_delegates() {
        let mock = MockUi::new();
        mock.queue_input("yes");
        let mut ui: Box<dyn UserInterface + Send> = Box::new(mock.clone());

        ui.output("out");
        ui.info("info");
        ui.error("err");
        ui.warn("warn");
        assert_eq!(ui.ask("Sure?").unwrap(), "yes");

        assert_eq!(mock.output_text(), "out\ninfo\nSure?");
        assert_eq!(mock.error_text(), "err\nwarn\n");
    }

    #[test]
    fn default_info_and_warn_route_to_output_and_error() {
        struct Recorder(Vec<String>);
        impl UserInterface for Recorder {
            fn ask(&mut self, _: &str) -> Result<String> {
                Ok(String::new())
            }
            fn ask_secret(&mut self, _: &str) -> Result<String> {
                Ok(String::new())
            }
            fn output(&mut self, msg: &str) {
                self.0.push(format!("out:{}", msg));
            }
            fn error(&mut self, msg: &str) {
                self.0.push(format!("err:{}", msg));
            }
        }

        let mut ui = Recorder(Vec::new());
        ui.info("a");
        ui.warn("b");
        assert_eq!(ui.0, ["out:a", "err:b"]);
    }

    #[test]
    fn create_ui_without_color_is_plain() {
        let ui = create_ui(true);
        assert!(ui.with_inner(|colored| colored.is_plain()));
    }
}
