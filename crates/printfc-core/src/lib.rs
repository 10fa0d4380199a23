//! # printfc-core
//!
//! A printf-compatible format string engine: parses classic C printf
//! directives (`%[index$][flags][width][.precision][length]conv`) and
//! renders statically-typed, heterogeneous arguments to text, matching
//! reference printf behavior for flags, positional indices,
//! argument-supplied width/precision, and length-modifier conversions,
//! while staying type-safe and overflow-checked at render time.
//!
//! ```
//! use printfc_core::{sprintf, Argument, ArgumentList};
//!
//! let args = [Argument::Str("answer"), Argument::I32(42)];
//! let text = sprintf("the %s is %05d", &ArgumentList::new(&args)).unwrap();
//! assert_eq!(text, "the answer is 00042");
//! ```
//!
//! A call either runs to completion or returns a [`FormatError`]; when a
//! caller-supplied buffer is used ([`vformat_to`]), output appended before
//! the failing directive is left in place.

#![deny(unsafe_code)]

pub mod arg;
mod convert;
pub mod engine;
pub mod error;
mod parse;
pub mod render;
pub mod spec;

use std::io::Write;

pub use arg::{ArgCursor, Argument, ArgumentList, CustomFormat};
pub use engine::vformat_to;
pub use error::FormatError;
pub use spec::{Align, FormatSpec, Sign};

/// Format into a fresh byte buffer.
pub fn vsprintf(format: &[u8], args: &ArgumentList<'_>) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::new();
    vformat_to(&mut out, format, args)?;
    Ok(out)
}

/// Format into a `String`. Argument bytes that are not valid UTF-8 are
/// replaced with U+FFFD.
pub fn sprintf(format: &str, args: &ArgumentList<'_>) -> Result<String, FormatError> {
    let buf = vsprintf(format.as_bytes(), args)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Format fully, then write the result to `writer`. Returns the number of
/// bytes written. Nothing is written if formatting fails.
pub fn fprintf<W: Write>(
    writer: &mut W,
    format: &[u8],
    args: &ArgumentList<'_>,
) -> Result<usize, FormatError> {
    let buf = vsprintf(format, args)?;
    writer.write_all(&buf)?;
    Ok(buf.len())
}
