//! The `routes` and `routes explain` commands.

use clap::Parser;
use cliroute::ui::UserInterface;
use cliroute::{classify, resolve, Command, CommandRegistry};

use super::{clap_help, parse_args, registry, SharedUi};

/// List every registered command path.
#[derive(Debug, Parser)]
#[command(name = "cliroute routes")]
struct RoutesArgs {}

/// Show how an argument list would be routed.
///
/// Use `--` before tokens that clap would otherwise read, such as `--help`.
#[derive(Debug, Parser)]
#[command(name = "cliroute routes explain")]
struct ExplainArgs {
    /// Arguments to classify, as they would follow the program name
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

pub struct RoutesCommand<U> {
    ui: U,
}

impl<U: SharedUi> RoutesCommand<U> {
    pub fn new(ui: U) -> Self {
        Self { ui }
    }
}

impl<U: SharedUi> Command for RoutesCommand<U> {
    fn help(&self) -> String {
        clap_help::<RoutesArgs>()
    }

    fn synopsis(&self) -> String {
        "List registered command paths".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        if let Err(code) = parse_args::<RoutesArgs, _>("cliroute routes", args, &mut self.ui) {
            return code;
        }
        let registry = match registry(&self.ui) {
            Ok(registry) => registry,
            Err(e) => {
                self.ui.error(&format!("Error: {}", e));
                return 1;
            }
        };
        for line in route_lines(&registry) {
            self.ui.output(&line);
        }
        0
    }
}

fn route_lines(registry: &CommandRegistry) -> Vec<String> {
    let rows: Vec<(String, String)> = registry
        .paths()
        .filter(|path| !registry.is_hidden(path))
        .map(|path| {
            let synopsis = registry
                .lookup(path)
                .and_then(|f| f().ok())
                .map(|cmd| cmd.synopsis())
                .unwrap_or_default();
            (path.to_string(), synopsis)
        })
        .collect();
    let width = rows.iter().map(|(p, _)| p.len()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(path, synopsis)| format!("{:<width$}    {}", path, synopsis, width = width))
        .collect()
}

pub struct ExplainCommand<U> {
    ui: U,
}

impl<U: SharedUi> ExplainCommand<U> {
    pub fn new(ui: U) -> Self {
        Self { ui }
    }
}

impl<U: SharedUi> Command for ExplainCommand<U> {
    fn help(&self) -> String {
        clap_help::<ExplainArgs>()
    }

    fn synopsis(&self) -> String {
        "Show how arguments are routed".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let args: ExplainArgs =
            match parse_args("cliroute routes explain", args, &mut self.ui) {
                Ok(args) => args,
                Err(code) => return code,
            };
        let registry = match registry(&self.ui) {
            Ok(registry) => registry,
            Err(e) => {
                self.ui.error(&format!("Error: {}", e));
                return 1;
            }
        };
        for line in explain(&args.tokens, &registry) {
            self.ui.output(&line);
        }
        0
    }
}

fn explain(tokens: &[String], registry: &CommandRegistry) -> Vec<String> {
    let classification = classify(tokens, registry);
    let action = match resolve(&classification, registry, Some(env!("CARGO_PKG_VERSION"))) {
        Ok(action) => action.name().to_string(),
        Err(e) => format!("error ({})", e),
    };
    let path = if classification.path().is_root() {
        "(root)".to_string()
    } else {
        classification.path().to_string()
    };
    vec![
        format!("path:      {}", path),
        format!("arguments: {}", list(classification.residual_args())),
        format!("top flags: {}", list(classification.top_flags())),
        format!("help:      {}", yes_no(classification.is_help())),
        format!("version:   {}", yes_no(classification.is_version())),
        format!("action:    {}", action),
    ]
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(" ")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
