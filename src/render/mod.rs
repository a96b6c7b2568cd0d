//! Report rendering module
//!
//! This module turns a resolved value tree into the environment report:
//! it loads the named template asset, expands it once, and writes the
//! result to the selected destination. One invocation renders once and
//! writes once; the whole flow is synchronous and idempotent.

// Submodules
mod assets;
mod error;
mod renderer;
mod sink;

// Re-export types and traits
pub use self::assets::{EmbeddedAssets, TemplateAssets, ENVIRONMENT_TEMPLATE};
pub use self::error::{RenderError, Result};
pub use self::renderer::render;
pub use self::sink::OutputTarget;

use log::{debug, info};

use crate::env::{EnvValues, ENV_VARS};

/// One render invocation: the resolved values and where the output goes
///
/// Created once per command invocation and consumed exactly once.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Fully resolved configuration values
    pub values: EnvValues,
    /// Destination for the rendered report
    pub target: OutputTarget,
    /// Emit per-variable diagnostics while rendering
    pub verbose: bool,
}

/// Render the environment report and deliver it to the requested target
///
/// Errors from template parsing, expansion, or output delivery propagate
/// to the caller; nothing here retries or exits the process.
pub fn render_environment(request: &RenderRequest, assets: &impl TemplateAssets) -> Result<()> {
    if request.verbose {
        for var in ENV_VARS {
            debug!("Override variable {} -> {}", var.name, var.field);
        }
    }

    let template_text = assets.template(ENVIRONMENT_TEMPLATE).ok_or_else(|| {
        RenderError::TemplateParse(format!(
            "embedded template '{}' is not registered",
            ENVIRONMENT_TEMPLATE
        ))
    })?;

    let rendered = render(template_text, &request.values)?;
    request.target.write(rendered.as_bytes())?;

    info!("Environment report written to {}", request.target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct FixtureAssets(&'static str);

    impl TemplateAssets for FixtureAssets {
        fn template(&self, name: &str) -> Option<&str> {
            (name == ENVIRONMENT_TEMPLATE).then_some(self.0)
        }
    }

    fn request_for(target: OutputTarget) -> RenderRequest {
        RenderRequest {
            values: EnvValues::default(),
            target,
            verbose: false,
        }
    }

    #[test]
    fn test_fixture_template_can_replace_the_embedded_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        let request = request_for(OutputTarget::File(path.clone()));

        let assets = FixtureAssets("name={{ controller.name }}");
        render_environment(&request, &assets).expect("render should succeed");

        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "name=overlay-controller"
        );
    }

    #[test]
    fn test_embedded_template_renders_every_registered_variable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("environment.yml");
        let request = request_for(OutputTarget::File(path.clone()));

        render_environment(&request, &EmbeddedAssets).expect("render should succeed");

        let report = fs::read_to_string(&path).expect("read back");
        for var in ENV_VARS {
            assert!(report.contains(var.name), "report is missing {}", var.name);
        }
    }

    #[test]
    fn test_missing_destination_directory_propagates() {
        let request = request_for(OutputTarget::from_arg("/no/such/dir/environment.yml"));

        let err = render_environment(&request, &EmbeddedAssets).unwrap_err();
        assert!(matches!(err, RenderError::DestinationDirectoryMissing(_)));
    }
}
