//! The `greet` command.

use clap::Parser;
use cliroute::ui::UserInterface;
use cliroute::Command;

use super::{clap_help, parse_args};

/// Greet someone, asking for their name when it is not given.
#[derive(Debug, Parser)]
#[command(name = "cliroute greet")]
struct GreetArgs {
    /// Name to greet
    #[arg(short, long)]
    name: Option<String>,
}

pub struct GreetCommand<U> {
    ui: U,
}

impl<U: UserInterface> GreetCommand<U> {
    pub fn new(ui: U) -> Self {
        Self { ui }
    }

    fn name(&mut self, given: Option<String>) -> Option<String> {
        if let Some(name) = given {
            return Some(name);
        }
        match self.ui.ask("What is your name?") {
            Ok(answer) => Some(answer.trim().to_string()),
            Err(e) => {
                tracing::debug!("Prompt failed: {}", e);
                self.ui.error(&format!("Error: {}", e));
                None
            }
        }
    }
}

impl<U: UserInterface> Command for GreetCommand<U> {
    fn help(&self) -> String {
        clap_help::<GreetArgs>()
    }

    fn synopsis(&self) -> String {
        "Say hello".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let args: GreetArgs = match parse_args("cliroute greet", args, &mut self.ui) {
            Ok(args) => args,
            Err(code) => return code,
        };
        let Some(name) = self.name(args.name) else {
            return 1;
        };
        if name.is_empty() {
            self.ui.warn("No name given");
            return 1;
        }
        self.ui.info(&format!("Hello, {}!", name));
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliroute::ui::MockUi;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn greets_named_person() {
        let mock = MockUi::new();
        let mut cmd = GreetCommand::new(mock.clone());
        assert_eq!(cmd.run(&args(&["--name", "Ada"])), 0);
        assert_eq!(mock.output_text(), "Hello, Ada!\n");
    }

    #[test]
    fn asks_when_name_missing() {
        let mock = MockUi::new();
        mock.queue_input("  Grace ");
        let mut cmd = GreetCommand::new(mock.clone());
        assert_eq!(cmd.run(&[]), 0);
        assert_eq!(mock.output_text(), "What is your name?Hello, Grace!\n");
    }

    #[test]
    fn closed_input_fails() {
        let mock = MockUi::new();
        let mut cmd = GreetCommand::new(mock.clone());
        assert_eq!(cmd.run(&[]), 1);
        assert!(mock.error_text().starts_with("Error: "));
    }

    #[test]
    fn blank_answer_warns() {
        let mock = MockUi::new();
        mock.queue_input("   ");
        let mut cmd = GreetCommand::new(mock.clone());
        assert_eq!(cmd.run(&[]), 1);
        assert_eq!(mock.error_text(), "No name given\n");
    }

    #[test]
    fn missing_option_value_is_a_usage_error() {
        let mock = MockUi::new();
        let mut cmd = GreetCommand::new(mock.clone());
        assert_eq!(cmd.run(&args(&["--name"])), 2);
        assert!(!mock.error_text().is_empty());
    }
}
