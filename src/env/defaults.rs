//! Default configuration values
//!
//! This module provides default values for every overridable configuration
//! field. It is designed to be a single source of truth for defaults,
//! making it easier to maintain consistent defaults across the application.

use std::env;

/// Environment variable prefix for all override variables
pub const ENV_PREFIX: &str = "OVERLAY_";

// String constants for default values

/// Default controller name
pub const CTRL_NAME: &str = "overlay-controller";

/// Default controller listener address as string
pub const CTRL_LISTENER_HOST_PORT: &str = "0.0.0.0:6262";

/// Default controller management listener address as string
pub const CTRL_MGMT_LISTENER_HOST_PORT: &str = "0.0.0.0:10000";

/// Default edge controller listener address as string
pub const EDGE_CTRL_LISTENER_HOST_PORT: &str = "0.0.0.0:1280";

/// Default edge controller advertised address as string
pub const EDGE_CTRL_ADVERTISED_HOST_PORT: &str = "127.0.0.1:1280";

/// Default edge router hostname
pub const EDGE_ROUTER_HOSTNAME: &str = "localhost";

/// Default edge router port as string
///
/// Ports are deliberately kept as strings: the report renders them verbatim
/// and override values are not shape-validated.
pub const EDGE_ROUTER_PORT: &str = "3022";

// Functions for default values

/// Default installation home directory
///
/// Resolves to `$HOME/.overlay`, falling back to a relative `.overlay`
/// when `$HOME` is not set.
pub fn home() -> String {
    match env::var("HOME") {
        Ok(h) if !h.is_empty() => format!("{}/.overlay", h),
        _ => ".overlay".to_string(),
    }
}

/// Default detected operating system
pub fn os() -> String {
    env::consts::OS.to_string()
}

/// Default controller client certificate path
pub fn ctrl_identity_cert(home: &str, name: &str) -> String {
    format!("{}/pki/{}/certs/{}-client.cert", home, name, name)
}

/// Default controller server certificate path
pub fn ctrl_identity_server_cert(home: &str, name: &str) -> String {
    format!("{}/pki/{}/certs/{}-server.cert", home, name, name)
}

/// Default controller private key path
pub fn ctrl_identity_key(home: &str, name: &str) -> String {
    format!("{}/pki/{}/keys/{}-server.key", home, name, name)
}

/// Default controller CA bundle path
pub fn ctrl_identity_ca(home: &str, name: &str) -> String {
    format!("{}/pki/{}/certs/{}-cas.cert", home, name, name)
}

/// Default signing certificate path
pub fn signing_cert(home: &str, name: &str) -> String {
    format!("{}/pki/{}-signing/certs/{}-signing.cert", home, name, name)
}

/// Default signing key path
pub fn signing_key(home: &str, name: &str) -> String {
    format!("{}/pki/{}-signing/keys/{}-signing.key", home, name, name)
}
