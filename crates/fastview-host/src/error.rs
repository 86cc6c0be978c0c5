use fastview::{ErrorKind, ViewError};

/// Errors as a scripting host would raise them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("TypeError: {0}")]
    TypeError(String),
    #[error("RangeError: {0}")]
    RangeError(String),
    #[error("Error: {0}")]
    Error(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl HostError {
    pub fn message(&self) -> &str {
        match self {
            HostError::TypeError(m)
            | HostError::RangeError(m)
            | HostError::Error(m)
            | HostError::InvalidArgument(m) => m,
        }
    }
}

impl From<ViewError> for HostError {
    fn from(err: ViewError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Type => HostError::TypeError(message),
            ErrorKind::Range => HostError::RangeError(message),
            ErrorKind::Generic => HostError::Error(message),
        }
    }
}
