//! Fixture error type.

/// Broad category of a [`FixtureError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Socket or listener failure.
    Io,
    /// JSON serialization failure.
    Json,
    /// Anything else raised while handling a request.
    Internal,
}

/// Fixture error type.
///
/// `Display` renders only the message, which is what ends up in the
/// `error` field of a 500 response.
#[derive(Debug, Clone)]
pub struct FixtureError {
    /// Error category.
    pub kind: ErrorKind,
    /// Error message.
    pub message: String,
}

impl FixtureError {
    /// Create a new FixtureError.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        FixtureError::new(ErrorKind::Io, err.to_string())
    }
}

impl From<std::net::AddrParseError> for FixtureError {
    fn from(err: std::net::AddrParseError) -> Self {
        FixtureError::new(ErrorKind::Io, err.to_string())
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::new(ErrorKind::Json, err.to_string())
    }
}
