//! Template expansion
//!
//! Expands a Jinja-style template against the resolved value tree using
//! MiniJinja. Rendering is pure: the same template and values always
//! produce byte-identical output.

use minijinja::{Environment, UndefinedBehavior};

use crate::env::EnvValues;
use crate::render::error::{RenderError, Result};

/// Render a template against the resolved values
///
/// The template is parsed once per invocation. Malformed interpolation
/// directives fail with [`RenderError::TemplateParse`]; references to
/// fields the value tree does not carry fail with
/// [`RenderError::TemplateExecution`] (undefined lookups are strict, not
/// silently blank).
pub fn render(template_text: &str, values: &EnvValues) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let template = env
        .template_from_str(template_text)
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

    template
        .render(values)
        .map_err(|e| RenderError::TemplateExecution(e.to_string()))
}
