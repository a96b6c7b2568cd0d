//! Configuration environment module
//!
//! This module holds the tree of overridable configuration values for an
//! overlay deployment, the registry of environment variables that override
//! them, and the resolver that merges defaults with deployment-time
//! overrides.

// Submodules
pub mod defaults;
mod registry;
mod resolver;
mod source;

// Re-export types and traits
pub use self::registry::{var_for, vars, EnvVar, ENV_VARS};
pub use self::resolver::resolve;
pub use self::source::{MapSource, OverridesSource, ProcessEnv};

use serde::Serialize;

/// Identity material paths for one component
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IdentityValues {
    /// Client certificate path
    pub cert: String,
    /// Server certificate path
    pub server_cert: String,
    /// Private key path
    pub key: String,
    /// CA bundle path
    pub ca: String,
}

impl IdentityValues {
    fn for_component(home: &str, name: &str) -> Self {
        Self {
            cert: defaults::ctrl_identity_cert(home, name),
            server_cert: defaults::ctrl_identity_server_cert(home, name),
            key: defaults::ctrl_identity_key(home, name),
            ca: defaults::ctrl_identity_ca(home, name),
        }
    }
}

/// Edge controller values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EdgeControllerValues {
    /// Edge API listener address (host:port)
    pub listener_host_port: String,
    /// Address advertised to edge clients (host:port)
    pub advertised_host_port: String,
    /// Edge controller identity material
    pub identity: IdentityValues,
}

/// Controller values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ControllerValues {
    /// Controller name
    pub name: String,
    /// Fabric listener address (host:port)
    pub listener_host_port: String,
    /// Management listener address (host:port)
    pub mgmt_listener_host_port: String,
    /// Controller identity material
    pub identity: IdentityValues,
    /// Edge controller settings
    pub edge: EdgeControllerValues,
}

/// Edge router values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EdgeRouterValues {
    /// Hostname the router advertises
    pub hostname: String,
    /// Port the router listens on, kept as a string and rendered verbatim
    pub port: String,
}

/// Router values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouterValues {
    /// Edge router settings
    pub edge: EdgeRouterValues,
}

/// Signing material paths
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SigningValues {
    /// Signing certificate path
    pub cert: String,
    /// Signing key path
    pub key: String,
}

/// The complete tree of overridable configuration values
///
/// Every leaf field has a compiled-in default and exactly one registered
/// override variable (see [`ENV_VARS`]). Resolution always produces a
/// concrete string for every leaf; no field is left silently blank.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnvValues {
    /// Installation home directory
    pub home: String,
    /// Detected operating system
    pub os: String,
    /// Controller settings
    pub controller: ControllerValues,
    /// Router settings
    pub router: RouterValues,
    /// Signing material
    pub signing: SigningValues,
}

impl Default for EnvValues {
    /// Create a default value tree using centralized defaults
    fn default() -> Self {
        let home = defaults::home();
        let name = defaults::CTRL_NAME.to_string();
        let edge_name = format!("{}-edge", name);

        Self {
            os: defaults::os(),
            controller: ControllerValues {
                listener_host_port: defaults::CTRL_LISTENER_HOST_PORT.to_string(),
                mgmt_listener_host_port: defaults::CTRL_MGMT_LISTENER_HOST_PORT.to_string(),
                identity: IdentityValues::for_component(&home, &name),
                edge: EdgeControllerValues {
                    listener_host_port: defaults::EDGE_CTRL_LISTENER_HOST_PORT.to_string(),
                    advertised_host_port: defaults::EDGE_CTRL_ADVERTISED_HOST_PORT.to_string(),
                    identity: IdentityValues::for_component(&home, &edge_name),
                },
                name,
            },
            router: RouterValues {
                edge: EdgeRouterValues {
                    hostname: defaults::EDGE_ROUTER_HOSTNAME.to_string(),
                    port: defaults::EDGE_ROUTER_PORT.to_string(),
                },
            },
            signing: SigningValues {
                cert: defaults::signing_cert(&home, defaults::CTRL_NAME),
                key: defaults::signing_key(&home, defaults::CTRL_NAME),
            },
            home,
        }
    }
}
