//! The "ask the user" capability behind the interactive flow

use crate::types::DepositError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Asks a person for values, one blocking call at a time
pub trait Prompter {
    /// Ask for a line of free text
    fn input(&mut self, message: &str) -> Result<String, DepositError>;

    /// Ask the person to pick one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, DepositError>;

    /// Tell the person their last answer was rejected
    fn reject(&mut self, message: &str);
}

/// Terminal prompter backed by dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str) -> Result<String, DepositError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()
            .map_err(DepositError::prompt)
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, DepositError> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()
            .map_err(DepositError::prompt)
    }

    fn reject(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
