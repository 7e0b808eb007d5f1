//! Yes/no confirmation sub-state.

use super::menu::normalize_command;
use super::terminal::Terminal;

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    pub fn parse(input: &str) -> Option<Self> {
        match normalize_command(input).as_str() {
            "Y" => Some(Self::Yes),
            "N" => Some(Self::No),
            _ => None,
        }
    }

    /// Asks `question` until the answer is `Y` or `N`.
    ///
    /// Unrecognized answers re-prompt with an error. End of input is `No`.
    pub fn ask<T: Terminal + ?Sized>(terminal: &mut T, question: &str) -> Self {
        loop {
            let Some(answer) = terminal.prompt(question) else {
                return Self::No;
            };
            if let Some(confirmation) = Self::parse(&answer) {
                return confirmation;
            }
            terminal.write_line("ERROR: Option not recognized! Answer with Y or N");
        }
    }
}
