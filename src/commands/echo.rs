//! The `echo` command.

use clap::Parser;
use cliroute::ui::UserInterface;
use cliroute::Command;

use super::{clap_help, parse_args};

/// Print the given words back.
#[derive(Debug, Parser)]
#[command(name = "cliroute echo")]
struct EchoArgs {
    /// Uppercase the output
    #[arg(short, long)]
    upper: bool,

    /// Words to print
    words: Vec<String>,
}

/// Prints its arguments on one line.
pub struct EchoCommand<U> {
    ui: U,
}

impl<U: UserInterface> EchoCommand<U> {
    pub fn new(ui: U) -> Self {
        Self { ui }
    }
}

impl<U: UserInterface> Command for EchoCommand<U> {
    fn help(&self) -> String {
        clap_help::<EchoArgs>()
    }

    fn synopsis(&self) -> String {
        "Print arguments back".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let args: EchoArgs = match parse_args("cliroute echo", args, &mut self.ui) {
            Ok(args) => args,
            Err(code) => return code,
        };
        let line = args.words.join(" ");
        if args.upper {
            self.ui.output(&line.to_uppercase());
        } else {
            self.ui.output(&line);
        }
        0
    }
}
