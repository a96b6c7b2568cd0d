//! Overlay Envgen: environment variable report generator for overlay
//! network deployments
//!
//! This library renders a report of the environment variables that can
//! override default configuration values for an overlay deployment:
//! controller identity paths and listener addresses, edge controller
//! settings, edge router hostname and port, and signing material paths.
//!
//! The flow is one-shot and synchronous: build a value tree (defaults plus
//! any caller-supplied values), resolve environment overrides into it,
//! expand the bundled template, and write the result to stdout or a file.
//!
//! # Example
//!
//! ```no_run
//! use overlay_envgen::env::{resolve, EnvValues, ProcessEnv};
//! use overlay_envgen::render::{
//!     render_environment, EmbeddedAssets, OutputTarget, RenderRequest,
//! };
//!
//! fn main() -> overlay_envgen::render::Result<()> {
//!     let mut values = EnvValues::default();
//!     resolve(&mut values, &ProcessEnv);
//!
//!     let request = RenderRequest {
//!         values,
//!         target: OutputTarget::from_arg("stdout"),
//!         verbose: false,
//!     };
//!     render_environment(&request, &EmbeddedAssets)
//! }
//! ```

// Public modules
pub mod common;
pub mod env;
pub mod render;

// Re-export commonly used structures and functions for convenience
pub use env::{resolve, EnvValues, ProcessEnv};
pub use render::{render_environment, EmbeddedAssets, OutputTarget, RenderError, RenderRequest};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
