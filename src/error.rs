//! Error types for routing and dispatch.
//!
//! This module defines [`CliError`], the error type returned by the
//! registry, the dispatcher and the terminal UI layer, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Unknown commands and misplaced flags are not errors. The dispatcher
//!   answers them with help text and exit status 1.
//! - A factory that fails to build its command is a hard failure and is
//!   handed back to the caller as [`CliError::CommandConstruction`].
//! - Use `anyhow::Error` (via `CliError::Other`) for unexpected errors.

use thiserror::Error;

/// Core error type for cliroute operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command factory failed to produce its command.
    #[error("Failed to construct command '{path}': {source}")]
    CommandConstruction {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// A path cannot be registered as written.
    #[error("Invalid command path '{path}': {reason}")]
    InvalidCommandPath { path: String, reason: String },

    /// Registration attempted after the registry shape was fixed by a lookup.
    #[error("Cannot register '{path}': registry is frozen after first resolution")]
    RegistryFrozen { path: String },

    /// The user interrupted a prompt.
    #[error("Interrupted")]
    Interrupted,

    /// The input stream ended before an answer was read.
    #[error("Input closed before an answer was read")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cliroute operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_construction_displays_path_and_cause() {
        let err = CliError::CommandConstruction {
            path: "apps list".into(),
            source: anyhow::anyhow!("missing credentials"),
        };
        let msg = err.to_string();
        assert!(msg.contains("apps list"));
        assert!(msg.contains("missing credentials"));
    }

    #[test]
    fn command_construction_exposes_source() {
        use std::error::Error as _;

        let err = CliError::CommandConstruction {
            path: "foo".into(),
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".into()));
    }

    #[test]
    fn invalid_command_path_displays_reason() {
        let err = CliError::InvalidCommandPath {
            path: "apps -x".into(),
            reason: "component '-x' starts with '-'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("apps -x"));
        assert!(msg.contains("starts with '-'"));
    }

    #[test]
    fn registry_frozen_displays_path() {
        let err = CliError::RegistryFrozen {
            path: "late".into(),
        };
        assert!(err.to_string().contains("late"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: CliError = anyhow::anyhow!("unexpected").into();
        assert!(matches!(err, CliError::Other(_)));
        assert_eq!(err.to_string(), "unexpected");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CliError::InputClosed)
        }
        assert!(returns_error().is_err());
    }
}
