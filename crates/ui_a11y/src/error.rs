use thiserror::Error;

/// Color parsing failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was empty or whitespace.
    #[error("empty color value")]
    Empty,
    /// Hex notation with the wrong length or a non-hex digit.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    /// A functional notation argument could not be read.
    #[error("invalid {channel} in `{input}`")]
    InvalidChannel {
        /// Source text.
        input: String,
        /// Offending argument name.
        channel: &'static str,
    },
    /// Wrong number of arguments to a color function.
    #[error("`{input}` takes {expected} arguments")]
    Arity {
        /// Source text.
        input: String,
        /// Accepted argument count description.
        expected: &'static str,
    },
    /// Notation other than hex, `rgb()`, `rgba()`, `hsl()`, or `hsla()`.
    #[error("unsupported color notation `{0}`")]
    Unsupported(String),
}
