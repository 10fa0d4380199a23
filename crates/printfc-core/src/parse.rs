//! Directive header and precision parsing.
//!
//! A directive body is `%[index$][flags][width][.precision][length]conv`.
//! This module resolves everything up to the length modifier; the final
//! two pieces live in `convert`.

use crate::arg::{precision_from_arg, width_from_arg, ArgCursor, ArgumentList};
use crate::error::FormatError;
use crate::spec::{Align, FormatSpec, Sign};

/// Byte cursor over the format string.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }
}

/// Parse a run of decimal digits with overflow checking. Values above
/// `i32::MAX` are rejected rather than wrapped.
pub(crate) fn parse_nonnegative_int(cur: &mut Cursor<'_>) -> Result<u32, FormatError> {
    let mut value: u32 = 0;
    while let Some(b @ b'0'..=b'9') = cur.peek() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u32))
            .filter(|v| *v <= i32::MAX as u32)
            .ok_or(FormatError::ValueTooLarge)?;
        cur.bump();
    }
    Ok(value)
}

/// Accumulate flag characters. The first unrecognized byte ends the run.
fn parse_flags(spec: &mut FormatSpec, cur: &mut Cursor<'_>) {
    while let Some(b) = cur.peek() {
        match b {
            b'-' => spec.align = Align::Left,
            b'+' => spec.sign = Sign::Plus,
            b'0' => spec.fill = b'0',
            b' ' => spec.sign = Sign::Space,
            b'#' => spec.alt = true,
            b',' => spec.thousands = Some(b','),
            b'\'' => spec.thousands = Some(b'\''),
            b'_' => spec.thousands = Some(b'_'),
            _ => return,
        }
        cur.bump();
    }
}

/// Parse `[index$][flags][width]` right after `%`. Returns the explicit
/// 1-based argument index, if one was given.
///
/// A leading digit run is ambiguous: `5$` is an index, `07` is the zero
/// flag plus width 7, and a bare nonzero value is the width outright (in
/// which case flag parsing is skipped entirely).
pub(crate) fn parse_header(
    cur: &mut Cursor<'_>,
    spec: &mut FormatSpec,
    args: &ArgumentList<'_>,
    cursor: &mut ArgCursor,
) -> Result<Option<usize>, FormatError> {
    let mut arg_index = None;
    if let Some(first @ b'0'..=b'9') = cur.peek() {
        let value = parse_nonnegative_int(cur)?;
        if cur.peek() == Some(b'$') {
            cur.bump();
            arg_index = Some(value as usize);
        } else {
            if first == b'0' {
                spec.fill = b'0';
            }
            if value != 0 {
                // A nonzero leading number is the width; flags are done.
                spec.width = value;
                return Ok(arg_index);
            }
        }
    }
    parse_flags(spec, cur);
    match cur.peek() {
        Some(b'0'..=b'9') => spec.width = parse_nonnegative_int(cur)?,
        Some(b'*') => {
            cur.bump();
            let arg = args.next(cursor)?;
            spec.width = width_from_arg(&arg, spec)?;
        }
        _ => {}
    }
    Ok(arg_index)
}

/// Parse `[.precision]`. Returns true for the bare-dot form (`.` with
/// neither digits nor `*`), which sets precision 0 and is remembered for
/// the decimal thousands-separator quirk.
pub(crate) fn parse_precision(
    cur: &mut Cursor<'_>,
    spec: &mut FormatSpec,
    args: &ArgumentList<'_>,
    cursor: &mut ArgCursor,
) -> Result<bool, FormatError> {
    if cur.peek() != Some(b'.') {
        return Ok(false);
    }
    cur.bump();
    match cur.peek() {
        Some(b'0'..=b'9') => {
            spec.precision = Some(parse_nonnegative_int(cur)?);
            Ok(false)
        }
        Some(b'*') => {
            cur.bump();
            let arg = args.next(cursor)?;
            spec.precision = Some(precision_from_arg(&arg)?);
            Ok(false)
        }
        _ => {
            spec.precision = Some(0);
            Ok(true)
        }
    }
}
