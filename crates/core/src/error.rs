use serde::Serialize;

/// Coarse classification used when a failure is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No connectivity, timeout, or the connection dropped mid-response.
    Network,
    /// The server answered, but with a failure (or with a body we could not use).
    Server,
}

/// Failure produced by any repository or use-case call.
///
/// Values are cheap to clone so they can travel through watch channels
/// alongside the UI state they affect.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum DataError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl DataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::Network(_) => ErrorKind::Network,
            DataError::Server { .. } | DataError::Decode(_) => ErrorKind::Server,
        }
    }

    /// HTTP status reported by the server, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DataError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The result channel every repository and use case returns.
pub type DataResult<T> = Result<T, DataError>;
