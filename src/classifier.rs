//! Argument classification.
//!
//! The classifier makes one left-to-right pass over the raw arguments and
//! splits them into:
//!
//! - leading CLI-level flags (`top_flags`),
//! - the help and version markers,
//! - the command path,
//! - the residual arguments handed untouched to the command.
//!
//! Only tokens before the command path are classified. Once the path
//! starts, everything after it belongs to the command, including tokens
//! that look like `--help`:
//!
//! ```
//! use cliroute::command::{factory, MockCommand};
//! use cliroute::{classify, CommandRegistry};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register("foo", factory(|| Ok(MockCommand::new()))).unwrap();
//!
//! let c = classify(&["-h", "foo", "--help"], &registry);
//! assert!(c.is_help());
//! assert_eq!(c.path().to_string(), "foo");
//! assert_eq!(c.residual_args(), ["--help"]);
//! ```

use std::sync::OnceLock;

use crate::path::{is_flag, CommandPath, PATH_SEPARATOR};
use crate::registry::CommandRegistry;

/// Tokens that request the CLI version.
pub const VERSION_FLAGS: &[&str] = &["-v", "-version", "--version"];

/// Tokens that request help.
pub const HELP_FLAGS: &[&str] = &["-h", "-help", "--help"];

/// The outcome of classifying one argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    top_flags: Vec<String>,
    help_requested: bool,
    version_requested: bool,
    path: CommandPath,
    residual_args: Vec<String>,
}

impl Classification {
    /// Flags seen before the command path, help and version markers excluded.
    pub fn top_flags(&self) -> &[String] {
        &self.top_flags
    }

    /// Whether a help marker preceded the command path.
    pub fn is_help(&self) -> bool {
        self.help_requested
    }

    /// Whether a version marker preceded the command path.
    pub fn is_version(&self) -> bool {
        self.version_requested
    }

    /// The resolved command path. Empty when no command was named.
    pub fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Arguments for the command, in input order.
    pub fn residual_args(&self) -> &[String] {
        &self.residual_args
    }
}

/// Classify `args` against `registry`.
///
/// This is the pure form of [`Classifier::classification`]; it does not
/// memoize.
pub fn classify<S: AsRef<str>>(args: &[S], registry: &CommandRegistry) -> Classification {
    let mut result = Classification::default();
    // Fixes the registry shape, and freezes it, before anything is read.
    let nested = registry.is_nested();

    let mut start = None;
    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        if VERSION_FLAGS.contains(&arg) {
            result.version_requested = true;
        } else if HELP_FLAGS.contains(&arg) {
            result.help_requested = true;
        } else if is_flag(arg) {
            result.top_flags.push(arg.to_string());
        } else {
            start = Some(i);
            break;
        }
    }

    let Some(start) = start else {
        // No command named: leading flags become the default command's arguments.
        if registry.default_command().is_some() {
            result.residual_args = std::mem::take(&mut result.top_flags);
        }
        return result;
    };

    let first = CommandPath::from_token(args[start].as_ref());
    let path = if nested {
        let candidates: Vec<&str> = args[start + 1..]
            .iter()
            .map(|arg| -> &str { arg.as_ref() })
            .take_while(|arg| !arg.is_empty() && !is_flag(arg) && !arg.contains(PATH_SEPARATOR))
            .collect();
        registry.longest_registered_extension(first, &candidates)
    } else {
        first
    };
    let end = start + path.len();

    result.path = path;
    result.residual_args = args[end..].iter().map(|a| a.as_ref().to_string()).collect();
    result
}

/// Memoizing classifier for one invocation.
///
/// The classification is computed on first access and cached. Concurrent
/// first accesses run the computation once; every caller sees the same
/// result.
#[derive(Debug, Default)]
pub struct Classifier {
    args: Vec<String>,
    computed: OnceLock<Classification>,
}

impl Classifier {
    /// Create a classifier over `args`, excluding the program name.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            computed: OnceLock::new(),
        }
    }

    /// The raw arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the classification has been computed.
    pub fn is_computed(&self) -> bool {
        self.computed.get().is_some()
    }

    /// The classification, computing it on first call.
    ///
    /// Later calls return the cached result, whatever registry they pass.
    pub fn classification(&self, registry: &CommandRegistry) -> &Classification {
        self.computed.get_or_init(|| {
            let result = classify(self.args.as_slice(), registry);
            tracing::debug!(
                "Classified {} args: path='{}', {} residual, top_flags={:?}, help={}, version={}",
                self.args.len(),
                result.path,
                result.residual_args.len(),
                result.top_flags,
                result.help_requested,
                result.version_requested
            );
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{factory, MockCommand};

    fn registry(paths: &[&str]) -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        for p in paths {
            reg.register(*p, factory(|| Ok(MockCommand::new()))).unwrap();
        }
        reg
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args() {
        let c = classify::<&str>(&[], &registry(&["foo"]));
        assert!(c.path().is_root());
        assert!(c.top_flags().is_empty());
        assert!(c.residual_args().is_empty());
        assert!(!c.is_help());
        assert!(!c.is_version());
    }

    #[test]
    fn help_markers_before_path() {
        let reg = registry(&["foo"]);
        let cases: &[(&[&str], bool)] = &[
            (&["-h"], true),
            (&["-help"], true),
            (&["--help"], true),
            (&["-h", "foo"], true),
            (&["foo", "bar"], false),
            (&["-v", "bar"], false),
            (&["foo", "-h"], false),
            (&["foo", "-help"], false),
            (&["foo", "--help"], false),
        ];
        for (args, expected) in cases {
            assert_eq!(classify(*args, &reg).is_help(), *expected, "args: {:?}", args);
        }
    }

    #[test]
    fn version_markers_before_path() {
        let reg = registry(&["foo"]);
        let cases: &[(&[&str], bool)] = &[
            (&["-v"], true),
            (&["-version"], true),
            (&["--version"], true),
            (&["-v", "foo"], true),
            (&["foo", "bar"], false),
            (&["-h", "bar"], false),
            (&["foo", "-v"], false),
            (&["foo", "-version"], false),
            (&["foo", "--version"], false),
        ];
        for (args, expected) in cases {
            assert_eq!(classify(*args, &reg).is_version(), *expected, "args: {:?}", args);
        }
    }

    #[test]
    fn path_is_first_non_flag() {
        let reg = registry(&["foo"]);
        let cases: &[(&[&str], &str)] = &[
            (&["bar"], "bar"),
            (&["foo", "-h"], "foo"),
            (&["-h", "bar"], "bar"),
            (&["--version", "--help", "foo", "x"], "foo"),
        ];
        for (args, expected) in cases {
            assert_eq!(classify(*args, &reg).path().to_string(), *expected);
        }
    }

    #[test]
    fn flat_residual_is_verbatim() {
        let c = classify(&["foo", "-bar", "-baz"], &registry(&["foo"]));
        assert_eq!(c.path().to_string(), "foo");
        assert_eq!(c.residual_args(), strings(&["-bar", "-baz"]));
    }

    #[test]
    fn flat_unregistered_token_still_becomes_path() {
        let c = classify(&["ghost", "list", "--help", "-v"], &registry(&["foo"]));
        assert_eq!(c.path().to_string(), "ghost");
        assert_eq!(c.residual_args(), strings(&["list", "--help", "-v"]));
        assert!(!c.is_help());
        assert!(!c.is_version());
    }

    #[test]
    fn flat_registry_does_not_extend() {
        let c = classify(&["foo", "foo"], &registry(&["foo"]));
        assert_eq!(c.path().to_string(), "foo");
        assert_eq!(c.residual_args(), strings(&["foo"]));
    }

    #[test]
    fn top_flags_collected_before_path() {
        let c = classify(&["-bad-flag", "-h", "-", "foo", "-x"], &registry(&["foo"]));
        assert_eq!(c.top_flags(), strings(&["-bad-flag", "-"]));
        assert!(c.is_help());
        assert_eq!(c.path().to_string(), "foo");
        assert_eq!(c.residual_args(), strings(&["-x"]));
    }

    #[test]
    fn markers_never_reach_top_flags() {
        let c = classify(&["-v", "--help", "-version", "-help", "--version", "-h"], &registry(&[]));
        assert!(c.top_flags().is_empty());
        assert!(c.is_help());
        assert!(c.is_version());
    }

    #[test]
    fn default_command_takes_leading_flags() {
        let c = classify(&["-bar", "-baz"], &registry(&["", "foo"]));
        assert!(c.path().is_root());
        assert!(c.top_flags().is_empty());
        assert_eq!(c.residual_args(), strings(&["-bar", "-baz"]));
    }

    #[test]
    fn default_command_keeps_markers_out_of_args() {
        let c = classify(&["-h", "-bar"], &registry(&[""]));
        assert!(c.is_help());
        assert_eq!(c.residual_args(), strings(&["-bar"]));
    }

    #[test]
    fn without_default_leading_flags_stay() {
        let c = classify(&["-bar", "-baz"], &registry(&["foo"]));
        assert!(c.path().is_root());
        assert_eq!(c.top_flags(), strings(&["-bar", "-baz"]));
        assert!(c.residual_args().is_empty());
    }

    #[test]
    fn nested_longest_match() {
        let reg = registry(&["apps list", "apps"]);
        let c = classify(&["apps", "list", "-x"], &reg);
        assert_eq!(c.path().to_string(), "apps list");
        assert_eq!(c.residual_args(), strings(&["-x"]));
    }

    #[test]
    fn nested_stops_at_unregistered_token() {
        let reg = registry(&["apps", "other deep"]);
        let c = classify(&["apps", "ghost", "-x"], &reg);
        assert_eq!(c.path().to_string(), "apps");
        assert_eq!(c.residual_args(), strings(&["ghost", "-x"]));
    }

    #[test]
    fn nested_stops_at_flag() {
        let reg = registry(&["apps", "apps list"]);
        let c = classify(&["apps", "-a", "list"], &reg);
        assert_eq!(c.path().to_string(), "apps");
        assert_eq!(c.residual_args(), strings(&["-a", "list"]));
    }

    #[test]
    fn nested_stops_at_empty_token() {
        let reg = registry(&["apps", "apps list"]);
        let c = classify(&["apps", "", "list"], &reg);
        assert_eq!(c.path().to_string(), "apps");
        assert_eq!(c.residual_args(), strings(&["", "list"]));
    }

    #[test]
    fn nested_token_with_space_is_an_argument() {
        let reg = registry(&["apps", "apps list"]);
        let c = classify(&["apps", "list x"], &reg);
        assert_eq!(c.path().to_string(), "apps");
        assert_eq!(c.residual_args(), strings(&["list x"]));
    }

    #[test]
    fn nested_walks_several_levels() {
        let reg = registry(&["a", "a b", "a b c"]);
        let c = classify(&["a", "b", "c", "d"], &reg);
        assert_eq!(c.path().to_string(), "a b c");
        assert_eq!(c.residual_args(), strings(&["d"]));
    }

    #[test]
    fn nested_extends_from_unregistered_first_token() {
        let reg = registry(&["apps list"]);
        let c = classify(&["apps", "list"], &reg);
        assert_eq!(c.path().to_string(), "apps list");
        assert!(c.residual_args().is_empty());

        let c = classify(&["apps"], &reg);
        assert_eq!(c.path().to_string(), "apps");
    }

    #[test]
    fn nested_help_marker_before_path() {
        let reg = registry(&["apps", "apps list"]);
        let c = classify(&["--help", "apps", "list"], &reg);
        assert!(c.is_help());
        assert_eq!(c.path().to_string(), "apps list");
    }

    #[test]
    fn empty_token_starts_path() {
        let c = classify(&["", "foo"], &registry(&["", "foo"]));
        assert!(!c.path().is_root());
        assert_eq!(c.residual_args(), strings(&["foo"]));
    }

    #[test]
    fn classifier_memoizes() {
        let reg = registry(&["foo"]);
        let classifier = Classifier::new(["foo", "a"]);
        assert!(!classifier.is_computed());

        let first = classifier.classification(&reg) as *const Classification;
        assert!(classifier.is_computed());
        let second = classifier.classification(&reg) as *const Classification;
        assert_eq!(first, second);
    }

    #[test]
    fn classifier_ignores_later_registries() {
        let flat = registry(&["apps"]);
        let nested = registry(&["apps", "apps list"]);
        let classifier = Classifier::new(["apps", "list"]);

        let c = classifier.classification(&flat).clone();
        assert_eq!(classifier.classification(&nested), &c);
        assert_eq!(c.path().to_string(), "apps");
    }

    #[test]
    fn classification_freezes_registry() {
        let reg = registry(&["foo"]);
        let _ = classify(&["foo"], &reg);
        assert!(reg.is_frozen());
    }

    #[test]
    fn classification_without_path_freezes_registry() {
        let cases: &[&[&str]] = &[&[], &["-x"], &["--version"], &["-h", "-y"]];
        for args in cases {
            let reg = registry(&["foo"]);
            let c = classify(*args, &reg);
            assert!(c.path().is_root(), "args: {:?}", args);
            assert!(reg.is_frozen(), "args: {:?}", args);
        }
    }
}
