//! Override sources
//!
//! This module defines the trait for reading override variables and its
//! implementations: the real process environment and a map-backed source
//! used by tests.

use std::collections::HashMap;
use std::env;

/// Source of environment variable overrides
///
/// Returns the current value of a named variable, or `None` when it is
/// unset. A set-but-empty variable counts as unset: resolution treats it
/// as "no override" rather than forcing a blank value into the report.
pub trait OverridesSource {
    /// Get the value of a named override variable
    fn var(&self, name: &str) -> Option<String>;
}

/// Overrides read from the process environment
pub struct ProcessEnv;

impl OverridesSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// Map-backed overrides source
///
/// Lets tests exercise resolution without touching the process
/// environment.
#[derive(Debug, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable on this source
    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl OverridesSource for MapSource {
    fn var(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(value) if !value.is_empty() => Some(value.clone()),
            _ => None,
        }
    }
}
