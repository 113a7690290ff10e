//! Defines fundamental types used throughout the Hestia codebase.

use std::fmt;

/// Enumerates all the errors that can be reported in Hestia. Authors
/// of new integrations should try to map their errors into one of
/// these values. If no current value is appropriate, a new one could
/// be added (requiring a new release of this crate) but make sure the
/// new error code is generic enough that it may be useful for other
/// integrations. For instance, don't add an error value that is
/// specific to one vendor's portal. Add a more general value and use
/// the associated description string to explain the details.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Returned whenever a resource cannot be found.
    NotFound,

    /// A resource is already in use.
    InUse,

    /// The device doesn't implement the requested operation.
    NotSupported,

    /// A type mismatch is preventing the operation from continuing.
    TypeError,

    /// An invalid value was provided.
    InvArgument(String),

    /// A driver couldn't communicate with its hardware. The string
    /// will have more information about the failure.
    DeviceError(String),

    /// The requested operation couldn't complete. The description
    /// field will have more information for the user.
    OperationError(String),

    /// A bad parameter was given in a configuration or a
    /// configuration was missing a required parameter.
    ConfigError(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "item not found"),
            Error::InUse => write!(f, "item is in use"),
            Error::NotSupported => write!(f, "operation not supported"),
            Error::TypeError => write!(f, "incorrect type"),
            Error::InvArgument(v) => write!(f, "{}", &v),
            Error::DeviceError(v) => write!(f, "device error: {}", &v),
            Error::OperationError(v) => {
                write!(f, "couldn't complete operation: {}", &v)
            }
            Error::ConfigError(v) => write!(f, "config error: {}", &v),
        }
    }
}

// Defining this trait implementation allows any code that hands work
// to the blocking worker pool to translate a failed join into a
// Hestia error.

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Error::OperationError(format!("worker task failed: {}", &error))
    }
}

pub mod device;
