//! Interactive dialog utilities for user input
//!
//! The configuration builder talks to the user exclusively through the
//! traits in [`interface`], so any front end can drive it: the
//! [`dialoguer_impl::DialoguerPrompter`] for a real terminal, or the
//! [`scripted::ScriptedPrompter`] for tests and automation.

pub mod dialoguer_impl;
pub mod interface;
pub mod scripted;

pub use dialoguer_impl::DialoguerPrompter;
pub use interface::{
    ConfirmationConfig, ConfirmationPrompter, PromptProvider, SingleChoiceConfig,
    SingleChoicePrompter, TextPromptConfig, TextPrompter,
};
pub use scripted::ScriptedPrompter;
