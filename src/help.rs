//! Help text rendering.
//!
//! The dispatcher never formats help itself. Global help comes from a
//! [`HelpFunc`] that receives the whole registry; command help is the
//! command's own text, followed by a listing of its subcommands when the
//! registry has any.

use crate::command::{Command, CommandFactory};
use crate::path::CommandPath;
use crate::registry::CommandRegistry;

/// Renders global help from the registry.
pub type HelpFunc = Box<dyn Fn(&CommandRegistry) -> String + Send + Sync>;

/// The standard help renderer.
///
/// Lists every visible command except the default and commands below a
/// registered parent, which appear in their parent's help instead. A
/// nested command whose parents are not registered is listed by its full
/// path so it stays discoverable:
///
/// ```text
/// usage: app [--version] [--help] <command> [<args>]
///
/// Available commands are:
///     bar    bar command
///     foo    foo command
/// ```
pub fn basic_help_func(app: &str) -> HelpFunc {
    let app = app.to_string();
    Box::new(move |registry: &CommandRegistry| {
        let entries: Vec<(String, String)> = registry
            .paths()
            .filter(|path| !path.is_root() && !registry.is_hidden(path))
            .filter(|path| !has_registered_ancestor(registry, path))
            .map(|path| (path.to_string(), synopsis_for(registry, path)))
            .collect();

        let mut out = format!("usage: {} [--version] [--help] <command> [<args>]\n\n", app);
        out.push_str("Available commands are:\n");
        out.push_str(&render_listing(&entries));
        out
    })
}

/// Help text for a resolved command.
///
/// Appends a `Subcommands:` section naming the visible direct children of
/// `path` when there are any.
pub fn command_help(command: &dyn Command, path: &CommandPath, registry: &CommandRegistry) -> String {
    let mut text = command.help();
    let children: Vec<(String, String)> = registry
        .children(path)
        .filter(|child| !registry.is_hidden(child))
        .map(|child| {
            let name = child.last().unwrap_or_default().to_string();
            (name, synopsis_for(registry, child))
        })
        .collect();

    if !children.is_empty() {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str("\nSubcommands:\n");
        text.push_str(&render_listing(&children));
    }
    text
}

/// Two-column listing with names padded to the widest name.
fn render_listing(entries: &[(String, String)]) -> String {
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(name, synopsis)| format!("    {:<width$}    {}\n", name, synopsis, width = width))
        .collect()
}

fn has_registered_ancestor(registry: &CommandRegistry, path: &CommandPath) -> bool {
    let mut current = path.parent();
    while let Some(parent) = current {
        if parent.is_root() {
            return false;
        }
        if registry.contains(&parent) {
            return true;
        }
        current = parent.parent();
    }
    false
}

fn synopsis_for(registry: &CommandRegistry, path: &CommandPath) -> String {
    registry
        .lookup(path)
        .map(|f: &CommandFactory| match f() {
            Ok(cmd) => cmd.synopsis(),
            Err(e) => {
                tracing::warn!("Failed to load command '{}' for help: {}", path, e);
                String::new()
            }
        })
        .unwrap_or_default()
}
