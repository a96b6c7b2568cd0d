//! Configuration value resolution
//!
//! Merges the incoming value tree (compiled-in defaults, possibly already
//! adjusted by caller-supplied values) with environment variable overrides.
//! A set, non-empty variable replaces the incoming value; anything else
//! leaves it untouched. Resolution never fails: a missing or empty
//! override degrades to "not set", not an error.

use log::debug;

use crate::env::registry::vars;
use crate::env::source::OverridesSource;
use crate::env::EnvValues;

/// Apply a single override if the source has one
fn apply(field: &mut String, name: &str, source: &impl OverridesSource) {
    if let Some(value) = source.var(name) {
        debug!("Applying override {}={}", name, value);
        *field = value;
    }
}

/// Resolve the value tree against an overrides source
///
/// Precedence: the caller establishes CLI-supplied values before calling
/// this, so environment overrides win over both compiled-in defaults and
/// explicit caller values. Environment variables represent deployment-time
/// overrides and take priority.
pub fn resolve(values: &mut EnvValues, source: &impl OverridesSource) {
    apply(&mut values.home, vars::HOME, source);

    apply(&mut values.controller.name, vars::CTRL_NAME, source);
    apply(
        &mut values.controller.listener_host_port,
        vars::CTRL_LISTENER_HOST_PORT,
        source,
    );
    apply(
        &mut values.controller.mgmt_listener_host_port,
        vars::CTRL_MGMT_LISTENER_HOST_PORT,
        source,
    );
    apply(
        &mut values.controller.identity.cert,
        vars::CTRL_IDENTITY_CERT,
        source,
    );
    apply(
        &mut values.controller.identity.server_cert,
        vars::CTRL_IDENTITY_SERVER_CERT,
        source,
    );
    apply(
        &mut values.controller.identity.key,
        vars::CTRL_IDENTITY_KEY,
        source,
    );
    apply(
        &mut values.controller.identity.ca,
        vars::CTRL_IDENTITY_CA,
        source,
    );

    apply(
        &mut values.controller.edge.listener_host_port,
        vars::EDGE_CTRL_LISTENER_HOST_PORT,
        source,
    );
    apply(
        &mut values.controller.edge.advertised_host_port,
        vars::EDGE_CTRL_ADVERTISED_HOST_PORT,
        source,
    );
    apply(
        &mut values.controller.edge.identity.cert,
        vars::EDGE_CTRL_IDENTITY_CERT,
        source,
    );
    apply(
        &mut values.controller.edge.identity.server_cert,
        vars::EDGE_CTRL_IDENTITY_SERVER_CERT,
        source,
    );
    apply(
        &mut values.controller.edge.identity.key,
        vars::EDGE_CTRL_IDENTITY_KEY,
        source,
    );
    apply(
        &mut values.controller.edge.identity.ca,
        vars::EDGE_CTRL_IDENTITY_CA,
        source,
    );

    apply(
        &mut values.router.edge.hostname,
        vars::EDGE_ROUTER_HOSTNAME,
        source,
    );
    apply(&mut values.router.edge.port, vars::EDGE_ROUTER_PORT, source);

    apply(&mut values.signing.cert, vars::SIGNING_CERT, source);
    apply(&mut values.signing.key, vars::SIGNING_KEY, source);
}
