//! Template assets
//!
//! Templates are bundled with the binary at build time and looked up by
//! logical name. The lookup goes through a trait so tests can substitute
//! fixture templates without touching the embedded table.

/// Logical name of the environment report template
pub const ENVIRONMENT_TEMPLATE: &str = "environment";

/// Capability that returns template text by logical name
pub trait TemplateAssets {
    /// Get the text of a named template, or `None` if it is not known
    fn template(&self, name: &str) -> Option<&str>;
}

/// Templates embedded in the binary
pub struct EmbeddedAssets;

impl TemplateAssets for EmbeddedAssets {
    fn template(&self, name: &str) -> Option<&str> {
        match name {
            ENVIRONMENT_TEMPLATE => Some(include_str!("../../templates/environment.yml")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_environment_template_is_present() {
        let text = EmbeddedAssets
            .template(ENVIRONMENT_TEMPLATE)
            .expect("environment template must be embedded");
        assert!(text.contains("OVERLAY_HOME"));
    }

    #[test]
    fn test_unknown_template_name_returns_none() {
        assert!(EmbeddedAssets.template("no-such-template").is_none());
    }
}
