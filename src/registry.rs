//! Command registry.
//!
//! Maps [`CommandPath`]s to [`CommandFactory`]s. Besides exact lookup the
//! registry answers one structural question, whether any path has more than
//! one component, which switches the classifier into longest-prefix
//! matching. That answer is fixed the first time it is asked; from then on
//! the registry is frozen and further registrations are rejected.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::command::CommandFactory;
use crate::error::{CliError, Result};
use crate::path::CommandPath;

/// Registry of command factories keyed by path.
#[derive(Default)]
pub struct CommandRegistry {
    entries: BTreeMap<CommandPath, CommandFactory>,
    hidden: BTreeSet<CommandPath>,
    nested: OnceLock<bool>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `path`, replacing any previous one.
    ///
    /// The empty path registers the default command.
    pub fn register(&mut self, path: impl Into<CommandPath>, factory: CommandFactory) -> Result<()> {
        let path = path.into();
        path.validate()?;
        if self.is_frozen() {
            return Err(CliError::RegistryFrozen {
                path: path.to_string(),
            });
        }
        if self.entries.insert(path.clone(), factory).is_some() {
            tracing::debug!("Replaced factory for '{}'", path);
        }
        Ok(())
    }

    /// Omit `path` from help listings. It still resolves normally.
    pub fn hide(&mut self, path: impl Into<CommandPath>) {
        self.hidden.insert(path.into());
    }

    /// Whether `path` is omitted from help listings.
    pub fn is_hidden(&self, path: &CommandPath) -> bool {
        self.hidden.contains(path)
    }

    /// Exact lookup.
    pub fn lookup(&self, path: &CommandPath) -> Option<&CommandFactory> {
        self.entries.get(path)
    }

    /// Whether `path` is registered.
    pub fn contains(&self, path: &CommandPath) -> bool {
        self.entries.contains_key(path)
    }

    /// The factory registered under the empty path.
    pub fn default_command(&self) -> Option<&CommandFactory> {
        self.entries.get(&CommandPath::root())
    }

    /// Number of registered paths, the default command included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &CommandPath> {
        self.entries.keys()
    }

    /// Registered paths exactly one component below `parent`, sorted.
    pub fn children<'a>(
        &'a self,
        parent: &'a CommandPath,
    ) -> impl Iterator<Item = &'a CommandPath> + 'a {
        self.entries
            .keys()
            .filter(move |p| p.len() == parent.len() + 1 && parent.is_ancestor_of(p))
    }

    /// Whether any registered path has more than one component.
    ///
    /// The first call freezes the registry.
    pub fn is_nested(&self) -> bool {
        *self.nested.get_or_init(|| {
            let nested = self.entries.keys().any(|p| p.len() > 1);
            tracing::trace!(
                "Registry frozen with {} entries ({})",
                self.entries.len(),
                if nested { "nested" } else { "flat" }
            );
            nested
        })
    }

    /// Whether the registry shape has been fixed by [`CommandRegistry::is_nested`].
    pub fn is_frozen(&self) -> bool {
        self.nested.get().is_some()
    }

    /// Longest registered prefix of `components`.
    ///
    /// Prefixes are tried from one component upward and the walk stops at
    /// the first prefix that is not registered. Returns the empty path when
    /// even the first component is unknown.
    pub fn longest_registered_prefix<S: AsRef<str>>(&self, components: &[S]) -> CommandPath {
        self.longest_registered_extension(CommandPath::root(), components)
    }

    /// Extend `base` one component at a time while the result is registered.
    ///
    /// `base` itself need not be registered. The walk stops at the first
    /// extension that is not.
    pub fn longest_registered_extension<S: AsRef<str>>(
        &self,
        base: CommandPath,
        components: &[S],
    ) -> CommandPath {
        let mut best = base;
        for component in components {
            let candidate = best.child(component.as_ref());
            if !self.contains(&candidate) {
                break;
            }
            best = candidate;
        }
        best
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("paths", &self.entries.keys().collect::<Vec<_>>())
            .field("hidden", &self.hidden)
            .field("nested", &self.nested.get())
            .finish()
    }
}
