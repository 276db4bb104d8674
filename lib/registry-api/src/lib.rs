//! Registration data model for the registry connector
//!
//! This library defines the types exchanged with a service-discovery client:
//! - RegistrationMethod: route vs direct registration strategy
//! - RegistrationConfig: immutable inputs for one descriptor build
//! - RegistrationDescriptor: the assembled instance-registration record

pub mod instance;

pub use instance::{
    RegistrationConfig, RegistrationDescriptor, RegistrationMethod, UnknownRegistrationMethod,
    INSTANCE_ID_METADATA_KEY,
};
