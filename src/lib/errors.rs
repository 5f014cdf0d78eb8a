use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Missing token, or the provider rejected the credentials (401/403).
    Auth(String),
    /// The operation was aborted before a result was applied.
    Cancelled,
    Config(String),
    Network(String),
    Parse(String),
    Serialization(String),
    /// A response arrived with a non-success status.
    Server { status: u16, message: String },
    /// Malformed local input, caught before any network call.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(message) => write!(formatter, "Not authorized: {message}"),
            AppError::Cancelled => write!(formatter, "Request cancelled."),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Server { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Validation(message) => write!(formatter, "Invalid input: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
