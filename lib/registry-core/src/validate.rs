//! Opt-in validation for registration inputs

use registry_api::{RegistrationConfig, RegistrationMethod};

use crate::error::{ConnectorError, Result};

/// Check a configuration for values the builder accepts as-is but a registry
/// cannot use. build_descriptor never calls this; callers opt in before
/// building.
pub fn validate_config(config: &RegistrationConfig) -> Result<()> {
    if config.app_name.is_empty() {
        return Err(ConnectorError::MissingAppName);
    }
    if config.instance_id.is_empty() {
        return Err(ConnectorError::MissingInstanceId);
    }

    match config.registration_method {
        RegistrationMethod::Route => {
            if config.hostname.is_empty() {
                return Err(ConnectorError::MissingHostname);
            }
        }
        RegistrationMethod::Direct => {
            if config.ip.is_empty() {
                return Err(ConnectorError::MissingIp);
            }
            if config.port == 0 {
                return Err(ConnectorError::InvalidPort(config.port));
            }
        }
    }

    Ok(())
}
