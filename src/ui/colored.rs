//! Colored output decorator.

use console::{Color, Style};

use crate::error::Result;

use super::UserInterface;

/// A terminal color for one kind of message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiColor {
    /// Foreground color; `None` leaves text untouched.
    pub color: Option<Color>,
    /// Render bold as well.
    pub bold: bool,
}

impl UiColor {
    pub const NONE: UiColor = UiColor::plain(None);
    pub const RED: UiColor = UiColor::plain(Some(Color::Red));
    pub const GREEN: UiColor = UiColor::plain(Some(Color::Green));
    pub const YELLOW: UiColor = UiColor::plain(Some(Color::Yellow));
    pub const BLUE: UiColor = UiColor::plain(Some(Color::Blue));
    pub const MAGENTA: UiColor = UiColor::plain(Some(Color::Magenta));
    pub const CYAN: UiColor = UiColor::plain(Some(Color::Cyan));

    const fn plain(color: Option<Color>) -> Self {
        Self { color, bold: false }
    }

    /// The same color in bold.
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    fn style(&self) -> Option<Style> {
        let color = self.color?;
        let style = Style::new().fg(color).force_styling(true);
        Some(if self.bold { style.bold() } else { style })
    }

    /// Apply the color to `msg`.
    pub fn paint(&self, msg: &str) -> String {
        match self.style() {
            Some(style) => style.apply_to(msg).to_string(),
            None => msg.to_string(),
        }
    }
}

impl Default for UiColor {
    fn default() -> Self {
        Self::NONE
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

/// UI decorator that colors each kind of message before delegating.
///
/// Questions take the output color.
#[derive(Debug, Clone)]
pub struct ColoredUi<U> {
    output: UiColor,
    info: UiColor,
    error: UiColor,
    warn: UiColor,
    inner: U,
}

impl<U: UserInterface> ColoredUi<U> {
    /// Wrap `inner` with the default palette: plain output, green info,
    /// bold red errors, yellow warnings.
    pub fn new(inner: U) -> Self {
        Self {
            output: UiColor::NONE,
            info: UiColor::GREEN,
            error: UiColor::RED.bold(),
            warn: UiColor::YELLOW,
            inner,
        }
    }

    /// Wrap `inner` without any color.
    pub fn plain(inner: U) -> Self {
        Self {
            output: UiColor::NONE,
            info: UiColor::NONE,
            error: UiColor::NONE,
            warn: UiColor::NONE,
            inner,
        }
    }

    pub fn with_output_color(mut self, color: UiColor) -> Self {
        self.output = color;
        self
    }

    pub fn with_info_color(mut self, color: UiColor) -> Self {
        self.info = color;
        self
    }

    pub fn with_error_color(mut self, color: UiColor) -> Self {
        self.error = color;
        self
    }

    pub fn with_warn_color(mut self, color: UiColor) -> Self {
        self.warn = color;
        self
    }

    /// Whether no kind of message is colored.
    pub fn is_plain(&self) -> bool {
        [self.output, self.info, self.error, self.warn]
            .iter()
            .all(|c| c.color.is_none())
    }

    /// The wrapped UI.
    pub fn inner(&self) -> &U {
        &self.inner
    }
}

impl<U: UserInterface> UserInterface for ColoredUi<U> {
    fn ask(&mut self, query: &str) -> Result<String> {
        let query = self.output.paint(query);
        self.inner.ask(&query)
    }

    fn ask_secret(&mut self, query: &str) -> Result<String> {
        let query = self.output.paint(query);
        self.inner.ask_secret(&query)
    }

    fn output(&mut self, msg: &str) {
        let msg = self.output.paint(msg);
        self.inner.output(&msg);
    }

    fn info(&mut self, msg: &str) {
        let msg = self.info.paint(msg);
        self.inner.info(&msg);
    }

    fn error(&mut self, msg: &str) {
        let msg = self.error.paint(msg);
        self.inner.error(&msg);
    }

    fn warn(&mut self, msg: &str) {
        let msg = self.warn.paint(msg);
        self.inner.warn(&msg);
    }
}
