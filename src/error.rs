use std::io;
use std::string::FromUtf8Error;

/// Error raised while resolving or rendering a placeholder.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Raised through an [`ErrorHandler`]: bad format string, argument index
    /// out of range, mixed indexing modes.
    #[error("{0}")]
    Format(String),

    /// A custom formatter's `write!` failed.
    #[error("formatter error")]
    Fmt(#[from] std::fmt::Error),

    /// Narrow output was not valid UTF-8.
    #[error("formatted output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Returns the handler message for [`FormatError::Format`].
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Format(message) => Some(message),
            _ => None,
        }
    }
}

impl From<FormatError> for io::Error {
    fn from(error: FormatError) -> Self {
        match error {
            FormatError::Io(error) => error,
            error => io::Error::new(io::ErrorKind::InvalidInput, error),
        }
    }
}

/// Receives fatal format errors.
///
/// The returned error ends the current formatting call: callers return it
/// immediately and never resume rendering.
pub trait ErrorHandler {
    fn on_error(&self, message: &str) -> FormatError;
}

/// Turns every message into [`FormatError::Format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    #[inline]
    fn on_error(&self, message: &str) -> FormatError {
        tracing::debug!(message, "format error");
        FormatError::Format(message.to_owned())
    }
}

#[inline]
pub(crate) fn argument_index_out_of_range<E: ErrorHandler>(handler: &E) -> FormatError {
    handler.on_error("argument index out of range")
}

#[inline]
pub(crate) fn argument_not_found<E: ErrorHandler>(handler: &E) -> FormatError {
    handler.on_error("argument not found")
}
