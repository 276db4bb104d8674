use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConnectorError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConnectorError {
    #[error("application name must not be empty")]
    MissingAppName,

    #[error("instance id must not be empty")]
    MissingInstanceId,

    #[error("hostname must not be empty for route registration")]
    MissingHostname,

    #[error("instance ip must not be empty for direct registration")]
    MissingIp,

    #[error("invalid instance port: {0}")]
    InvalidPort(u16),
}
