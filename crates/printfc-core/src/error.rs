//! Error types for the format engine.

use thiserror::Error;

/// Errors raised while interpreting a printf format string.
///
/// Every variant is raised synchronously at the parse or convert step that
/// detects it and aborts the whole call. Output already appended to the
/// destination before the failing directive is left in place.
#[derive(Debug, Error)]
pub enum FormatError {
    /// An argument consumed for a `*` width is not an integral type.
    #[error("width is not integer")]
    InvalidWidth,

    /// An argument consumed for a `.*` precision is not an integral type.
    #[error("precision is not integer")]
    InvalidPrecision,

    /// A width or precision magnitude, literal or argument-supplied, does
    /// not fit in a signed 32-bit value.
    #[error("number is too big")]
    ValueTooLarge,

    /// An explicit `N$` index was zero or past the end of the argument
    /// list, or the sequential cursor ran off the end.
    #[error("argument index {index} out of range ({available} arguments)")]
    ArgumentIndexOutOfRange { index: usize, available: usize },

    /// The format string ended inside a directive, or the conversion
    /// character is not recognized.
    #[error("malformed directive at byte {offset}")]
    MalformedDirective { offset: usize },

    /// Write failure from an `io::Write` destination.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Compact machine-readable name for the error kind, ignoring
    /// positional payloads. Used by fixture files and log records.
    pub fn kind(&self) -> &'static str {
        match self {
            FormatError::InvalidWidth => "invalid_width",
            FormatError::InvalidPrecision => "invalid_precision",
            FormatError::ValueTooLarge => "value_too_large",
            FormatError::ArgumentIndexOutOfRange { .. } => "argument_index_out_of_range",
            FormatError::MalformedDirective { .. } => "malformed_directive",
            FormatError::Io(_) => "io",
        }
    }
}
