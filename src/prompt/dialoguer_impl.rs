//! Terminal prompt provider backed by `dialoguer`.

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{Confirm, Input, Select};

/// Prompt provider that asks the user on the controlling terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(config.prompt.clone());
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        Ok(input.interact_text()?)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(config.prompt.clone())
            .default(config.default)
            .interact()?)
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(config.prompt.clone())
            .items(&config.choices)
            .default(config.default_index.unwrap_or(0))
            .interact()?)
    }
}
