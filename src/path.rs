//! Command paths.
//!
//! A [`CommandPath`] names a (possibly nested) command as an ordered list
//! of components. It renders as the components joined by a single space,
//! which is also the form used when registering commands:
//!
//! ```
//! use cliroute::CommandPath;
//!
//! let path: CommandPath = "apps list".parse().unwrap();
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.to_string(), "apps list");
//! assert!(CommandPath::root().is_root());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Separator between path components in the rendered form.
pub const PATH_SEPARATOR: char = ' ';

/// The character that marks a token as a flag.
pub const FLAG_MARKER: char = '-';

/// Returns true if the token starts with the flag marker.
///
/// The empty token is never a flag.
pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_MARKER)
}

/// An ordered sequence of non-empty command components.
///
/// The empty path is the root, which addresses the default command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandPath {
    components: Vec<String>,
}

impl CommandPath {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from components, skipping empty ones.
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: components
                .into_iter()
                .map(Into::into)
                .filter(|c: &String| !c.is_empty())
                .collect(),
        }
    }

    /// A one-component path holding `token` verbatim, even if it is empty.
    ///
    /// Such a path never matches a registered entry unless the token is a
    /// valid component.
    pub(crate) fn from_token(token: &str) -> Self {
        Self {
            components: vec![token.to_string()],
        }
    }

    /// Whether this is the empty path.
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Same as [`CommandPath::is_root`].
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The components of this path.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// The last component, if any.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// The path with its last component removed.
    pub fn parent(&self) -> Option<CommandPath> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            components: self.components[..self.components.len() - 1].to_vec(),
        })
    }

    /// A new path with `component` appended.
    pub fn child(&self, component: &str) -> CommandPath {
        let mut components = self.components.clone();
        components.push(component.to_string());
        Self { components }
    }

    /// Whether `self` is a strict prefix of `other`.
    pub fn is_ancestor_of(&self, other: &CommandPath) -> bool {
        self.len() < other.len() && other.components.starts_with(&self.components)
    }

    /// Check that the path can be registered.
    ///
    /// Components must not begin with the flag marker, since the classifier
    /// would never route a flag token into a path.
    pub fn validate(&self) -> Result<(), CliError> {
        if let Some(flag) = self.components.iter().find(|c| is_flag(c)) {
            return Err(CliError::InvalidCommandPath {
                path: self.to_string(),
                reason: format!("component '{}' starts with '{}'", flag, FLAG_MARKER),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PATH_SEPARATOR)?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}

impl FromStr for CommandPath {
    type Err = CliError;

    /// Split on whitespace. Runs of spaces collapse; an all-blank string is the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_components(s.split_whitespace()))
    }
}

impl From<&str> for CommandPath {
    fn from(s: &str) -> Self {
        Self::from_components(s.split_whitespace())
    }
}
