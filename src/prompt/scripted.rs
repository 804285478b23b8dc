//! Prompt provider that gives predefined responses
//!
//! Useful for automation, testing, or CI environments where no terminal
//! is attached.

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Answers prompts from a predefined script keyed by prompt text.
///
/// A prompt with no scripted response falls back to the prompt's own
/// default; if there is none either, the prompt fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_responses: HashMap<String, String>,
    confirmation_responses: HashMap<String, bool>,
    choice_responses: HashMap<String, usize>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined confirmation response for a specific prompt
    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }

    /// Add a predefined choice response for a specific prompt
    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "no scripted answer for text prompt '{}'",
                    config.prompt
                ))
            })
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        Ok(self
            .confirmation_responses
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default))
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let index = self
            .choice_responses
            .get(&config.prompt)
            .copied()
            .or(config.default_index)
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "no scripted answer for choice prompt '{}'",
                    config.prompt
                ))
            })?;
        if index >= config.choices.len() {
            return Err(Error::ValidationError(format!(
                "scripted choice {} out of range for prompt '{}'",
                index, config.prompt
            )));
        }
        Ok(index)
    }
}
