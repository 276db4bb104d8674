//! Instance registration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Metadata key under which the original instance id is published
pub const INSTANCE_ID_METADATA_KEY: &str = "instanceId";

/// Strategy selecting how discovery clients reach this instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMethod {
    /// Clients are routed through the platform routing layer
    Route,
    /// Clients connect to the instance's direct network address
    Direct,
}

impl Default for RegistrationMethod {
    fn default() -> Self {
        RegistrationMethod::Route
    }
}

impl fmt::Display for RegistrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationMethod::Route => f.write_str("route"),
            RegistrationMethod::Direct => f.write_str("direct"),
        }
    }
}

/// Error for a registration method string that is neither "route" nor "direct"
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown registration method: {0}")]
pub struct UnknownRegistrationMethod(pub String);

impl FromStr for RegistrationMethod {
    type Err = UnknownRegistrationMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "route" => Ok(RegistrationMethod::Route),
            "direct" => Ok(RegistrationMethod::Direct),
            other => Err(UnknownRegistrationMethod(other.to_string())),
        }
    }
}

/// Network identity inputs for one descriptor build
///
/// Constructed once and read-only from then on; there is no
/// partially-configured state and no ordering between fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationConfig {
    /// Hostname used when registering through the routing layer
    pub hostname: String,

    /// Direct network address of the instance
    pub ip: String,

    /// Port the instance listens on
    pub port: u16,

    /// Caller-supplied unique token for this running instance, typically a UUID
    pub instance_id: String,

    /// Logical application name
    pub app_name: String,

    /// Registration strategy (defaults to route)
    #[serde(default)]
    pub registration_method: RegistrationMethod,

    /// Replaces the sanitized application name as the virtual host name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub provided_virtual_hostname: Option<String>,

    /// Replaces the sanitized application name as the secure virtual host name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub provided_secure_virtual_hostname: Option<String>,
}

/// Instance-registration record handed to a service-discovery client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDescriptor {
    /// Registry key: effective host and instance id joined with a colon
    pub instance_id: String,

    /// Effective host discovery clients are given for this instance
    pub hostname: String,

    /// Port advertised for plain traffic
    pub non_secure_port: u16,

    /// Port advertised for TLS traffic; only meaningful when enabled
    pub secure_port: u16,

    /// Whether the secure port is advertised
    pub secure_port_enabled: bool,

    /// Metadata published with the registration; always carries the
    /// original instance id under "instanceId"
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// Logical name routing uses to address this instance
    pub virtual_host_name: String,

    /// Logical name TLS routing uses to address this instance
    pub secure_virtual_host_name: String,
}
