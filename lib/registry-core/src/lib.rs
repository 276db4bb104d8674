//! Core descriptor construction for the registry connector
//!
//! This library provides:
//! - Descriptor construction from registration inputs (build_descriptor)
//! - Virtual-host label sanitization (sanitize_hostname)
//! - Opt-in configuration validation (validate_config)

pub mod builder;
pub mod error;
pub mod sanitize;
pub mod validate;

pub use builder::build_descriptor;
pub use error::{ConnectorError, Result};
pub use sanitize::sanitize_hostname;
pub use validate::validate_config;
