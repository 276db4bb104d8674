//! Descriptor construction from registration inputs

use registry_api::{
    RegistrationConfig, RegistrationDescriptor, RegistrationMethod, INSTANCE_ID_METADATA_KEY,
};
use std::collections::BTreeMap;
use tracing::debug;

use crate::sanitize::sanitize_hostname;

/// Route registration advertises the routing layer's ports, not the instance's own
const ROUTE_NON_SECURE_PORT: u16 = 80;
const ROUTE_SECURE_PORT: u16 = 443;

/// Assemble the instance-registration record for a service-discovery client.
///
/// Total over its inputs: no validation happens here and no error can be
/// returned. Callers wanting stricter checking run validate_config first.
pub fn build_descriptor(config: &RegistrationConfig) -> RegistrationDescriptor {
    let effective_host = match config.registration_method {
        RegistrationMethod::Route => config.hostname.clone(),
        RegistrationMethod::Direct => config.ip.clone(),
    };

    let (non_secure_port, secure_port, secure_port_enabled) = match config.registration_method {
        RegistrationMethod::Route => (ROUTE_NON_SECURE_PORT, ROUTE_SECURE_PORT, true),
        // The secure port carries no meaning in direct mode; it mirrors the
        // instance port and stays disabled.
        RegistrationMethod::Direct => (config.port, config.port, false),
    };

    let mut metadata = BTreeMap::new();
    metadata.insert(
        INSTANCE_ID_METADATA_KEY.to_string(),
        config.instance_id.clone(),
    );

    debug!(
        "Building {} registration for {}",
        config.registration_method, config.app_name
    );

    RegistrationDescriptor {
        instance_id: format!("{}:{}", effective_host, config.instance_id),
        hostname: effective_host,
        non_secure_port,
        secure_port,
        secure_port_enabled,
        metadata,
        virtual_host_name: virtual_host_or_default(
            config.provided_virtual_hostname.as_deref(),
            &config.app_name,
        ),
        secure_virtual_host_name: virtual_host_or_default(
            config.provided_secure_virtual_hostname.as_deref(),
            &config.app_name,
        ),
    }
}

/// Provided override when present and non-empty, else the sanitized app name
fn virtual_host_or_default(provided: Option<&str>, app_name: &str) -> String {
    match provided {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => sanitize_hostname(app_name),
    }
}
