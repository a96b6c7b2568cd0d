//! Environment variable registry
//!
//! An immutable one-to-one mapping from configuration leaf field to the
//! environment variable that overrides it. Populated once from static
//! definitions; a missing entry is a programming error caught by the tests
//! in this module, never a runtime condition.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Override variable names, one per configuration leaf field
pub mod vars {
    pub const HOME: &str = "OVERLAY_HOME";
    pub const CTRL_NAME: &str = "OVERLAY_CTRL_NAME";
    pub const CTRL_LISTENER_HOST_PORT: &str = "OVERLAY_CTRL_LISTENER_HOST_PORT";
    pub const CTRL_MGMT_LISTENER_HOST_PORT: &str = "OVERLAY_CTRL_MGMT_LISTENER_HOST_PORT";
    pub const CTRL_IDENTITY_CERT: &str = "OVERLAY_CTRL_IDENTITY_CERT";
    pub const CTRL_IDENTITY_SERVER_CERT: &str = "OVERLAY_CTRL_IDENTITY_SERVER_CERT";
    pub const CTRL_IDENTITY_KEY: &str = "OVERLAY_CTRL_IDENTITY_KEY";
    pub const CTRL_IDENTITY_CA: &str = "OVERLAY_CTRL_IDENTITY_CA";
    pub const EDGE_CTRL_LISTENER_HOST_PORT: &str = "OVERLAY_EDGE_CTRL_LISTENER_HOST_PORT";
    pub const EDGE_CTRL_ADVERTISED_HOST_PORT: &str = "OVERLAY_EDGE_CTRL_ADVERTISED_HOST_PORT";
    pub const EDGE_CTRL_IDENTITY_CERT: &str = "OVERLAY_EDGE_CTRL_IDENTITY_CERT";
    pub const EDGE_CTRL_IDENTITY_SERVER_CERT: &str = "OVERLAY_EDGE_CTRL_IDENTITY_SERVER_CERT";
    pub const EDGE_CTRL_IDENTITY_KEY: &str = "OVERLAY_EDGE_CTRL_IDENTITY_KEY";
    pub const EDGE_CTRL_IDENTITY_CA: &str = "OVERLAY_EDGE_CTRL_IDENTITY_CA";
    pub const EDGE_ROUTER_HOSTNAME: &str = "OVERLAY_EDGE_ROUTER_HOSTNAME";
    pub const EDGE_ROUTER_PORT: &str = "OVERLAY_EDGE_ROUTER_PORT";
    pub const SIGNING_CERT: &str = "OVERLAY_SIGNING_CERT";
    pub const SIGNING_KEY: &str = "OVERLAY_SIGNING_KEY";
}

/// One registry entry: a configuration leaf field and its override variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVar {
    /// Dotted path of the field on [`crate::env::EnvValues`]
    pub field: &'static str,
    /// Name of the overriding environment variable
    pub name: &'static str,
}

/// Static registry definitions (field -> override variable)
pub const ENV_VARS: &[EnvVar] = &[
    EnvVar { field: "home", name: vars::HOME },
    EnvVar { field: "controller.name", name: vars::CTRL_NAME },
    EnvVar { field: "controller.listener_host_port", name: vars::CTRL_LISTENER_HOST_PORT },
    EnvVar {
        field: "controller.mgmt_listener_host_port",
        name: vars::CTRL_MGMT_LISTENER_HOST_PORT,
    },
    EnvVar { field: "controller.identity.cert", name: vars::CTRL_IDENTITY_CERT },
    EnvVar { field: "controller.identity.server_cert", name: vars::CTRL_IDENTITY_SERVER_CERT },
    EnvVar { field: "controller.identity.key", name: vars::CTRL_IDENTITY_KEY },
    EnvVar { field: "controller.identity.ca", name: vars::CTRL_IDENTITY_CA },
    EnvVar {
        field: "controller.edge.listener_host_port",
        name: vars::EDGE_CTRL_LISTENER_HOST_PORT,
    },
    EnvVar {
        field: "controller.edge.advertised_host_port",
        name: vars::EDGE_CTRL_ADVERTISED_HOST_PORT,
    },
    EnvVar { field: "controller.edge.identity.cert", name: vars::EDGE_CTRL_IDENTITY_CERT },
    EnvVar {
        field: "controller.edge.identity.server_cert",
        name: vars::EDGE_CTRL_IDENTITY_SERVER_CERT,
    },
    EnvVar { field: "controller.edge.identity.key", name: vars::EDGE_CTRL_IDENTITY_KEY },
    EnvVar { field: "controller.edge.identity.ca", name: vars::EDGE_CTRL_IDENTITY_CA },
    EnvVar { field: "router.edge.hostname", name: vars::EDGE_ROUTER_HOSTNAME },
    EnvVar { field: "router.edge.port", name: vars::EDGE_ROUTER_PORT },
    EnvVar { field: "signing.cert", name: vars::SIGNING_CERT },
    EnvVar { field: "signing.key", name: vars::SIGNING_KEY },
];

static FIELD_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    ENV_VARS.iter().map(|v| (v.field, v.name)).collect()
});

/// Look up the override variable for a configuration leaf field
pub fn var_for(field: &str) -> Option<&'static str> {
    FIELD_INDEX.get(field).copied()
}
