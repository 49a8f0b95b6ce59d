//! User input handling.
//! The trait seam exists so the answer resolution logic can be exercised
//! in tests without a terminal.

use crate::error::Result;
use dialoguer::Input;

/// Trait for asking the user a free-form question.
pub trait Prompter {
    /// Prompts for a line of input, showing `default` as the value used
    /// when the user just presses enter.
    fn input(&self, question: &str, default: &str) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, question: &str, default: &str) -> Result<String> {
        let input = Input::<String>::new().with_prompt(question);
        let input = if default.is_empty() {
            input.allow_empty(true)
        } else {
            input.default(default.to_string())
        };

        Ok(input.interact_text()?)
    }
}
