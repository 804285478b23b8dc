//! Template parsing and rendering functionality.

pub mod minijinja_impl;

pub use minijinja_impl::MiniJinjaRenderer;

use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Returns the default template rendering engine.
pub fn get_template_engine() -> impl TemplateRenderer {
    MiniJinjaRenderer::new()
}
