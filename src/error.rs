//! Error types for the shell.

use thiserror::Error;

/// Failures surfaced by the shell library.
///
/// A command that cannot be found is not an error: it is reported to the
/// user as text and the shell carries on.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bounded tokenization saw more tokens than allowed.
    #[error("too many arguments (limit {limit})")]
    TooManyTokens { limit: usize },

    /// The line reader could not produce a line.
    #[error("input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_tokens_message() {
        let err = ShellError::TooManyTokens { limit: 20 };
        assert_eq!(err.to_string(), "too many arguments (limit 20)");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ShellError = io.into();
        assert!(matches!(err, ShellError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
