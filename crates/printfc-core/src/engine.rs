//! Format loop and dispatcher.
//!
//! Consumes the format string once, left to right: literal spans are
//! copied verbatim, `%%` emits a single `%`, and each directive is parsed,
//! bound to its argument, converted, and rendered in place. The first
//! malformed directive or bad argument reference aborts the call; output
//! appended before the failure stays in the buffer.

use crate::arg::{ArgCursor, Argument, ArgumentList};
use crate::convert::{convert_arg, parse_length, to_char};
use crate::error::FormatError;
use crate::parse::{parse_header, parse_precision, Cursor};
use crate::render;
use crate::spec::{Align, FormatSpec, Sign};

/// Render `format` with `args`, appending to `out`.
///
/// Returns the position one past the last byte written. The sequential
/// argument cursor is fresh for each call; on error, bytes appended for
/// earlier spans and directives remain in `out`.
pub fn vformat_to(
    out: &mut Vec<u8>,
    format: &[u8],
    args: &ArgumentList<'_>,
) -> Result<usize, FormatError> {
    let mut cursor = ArgCursor::default();
    let mut pos = 0;
    while pos < format.len() {
        let Some(rel) = format[pos..].iter().position(|&b| b == b'%') else {
            out.extend_from_slice(&format[pos..]);
            break;
        };
        let percent = pos + rel;
        out.extend_from_slice(&format[pos..percent]);
        if format.get(percent + 1) == Some(&b'%') {
            out.push(b'%');
            pos = percent + 2;
            continue;
        }
        let mut cur = Cursor::new(format, percent + 1);
        format_directive(out, &mut cur, args, &mut cursor, percent)?;
        pos = cur.pos();
    }
    Ok(out.len())
}

/// Parse and render one directive. `start` is the byte offset of the `%`,
/// reported with malformed-directive errors.
fn format_directive(
    out: &mut Vec<u8>,
    cur: &mut Cursor<'_>,
    args: &ArgumentList<'_>,
    cursor: &mut ArgCursor,
    start: usize,
) -> Result<(), FormatError> {
    let mut spec = FormatSpec::default();
    let arg_index = parse_header(cur, &mut spec, args, cursor)?;
    if arg_index == Some(0) {
        return Err(FormatError::ArgumentIndexOutOfRange {
            index: 0,
            available: args.len(),
        });
    }
    let empty_precision = parse_precision(cur, &mut spec, args, cursor)?;

    // A truncated directive must be reported as such even when the
    // argument list is already exhausted, so the terminating conversion
    // character is checked before the argument is fetched.
    let target = parse_length(cur);
    let Some(conv) = cur.peek() else {
        return Err(FormatError::MalformedDirective { offset: start });
    };
    cur.bump();

    let mut arg = match arg_index {
        Some(index) => args.get(index)?,
        None => args.next(cursor)?,
    };

    // Zero values never get alternate-form decoration.
    if spec.alt && arg.is_zero_int() {
        spec.alt = false;
    }
    // Zero fill only applies to numbers.
    if spec.fill == b'0' {
        if arg.is_arithmetic() {
            spec.align = Align::Numeric;
        } else {
            spec.fill = b' ';
        }
    }

    if !is_known_conversion(conv) && !matches!(arg, Argument::Custom(_)) {
        return Err(FormatError::MalformedDirective { offset: start });
    }
    spec.conv = conv;
    arg = convert_arg(arg, target, conv);
    if arg.is_integral() {
        match spec.conv {
            b'i' | b'u' => spec.conv = b'd',
            b'c' => arg = to_char(arg),
            _ => {}
        }
    }
    // Legacy quirk: a bare `.` on a decimal conversion turns the
    // thousands separator into `.`, whatever the flags said.
    if spec.conv == b'd' && empty_precision {
        spec.thousands = Some(b'.');
    }

    dispatch(out, arg, &mut spec);
    Ok(())
}

fn is_known_conversion(conv: u8) -> bool {
    matches!(
        conv,
        b'd' | b'i'
            | b'u'
            | b'o'
            | b'x'
            | b'X'
            | b'c'
            | b's'
            | b'p'
            | b'f'
            | b'F'
            | b'e'
            | b'E'
            | b'g'
            | b'G'
            | b'a'
            | b'A'
    )
}

/// Route a normalized argument to the renderer, applying the handful of
/// printf special cases first.
fn dispatch(out: &mut Vec<u8>, arg: Argument<'_>, spec: &mut FormatSpec) {
    match arg {
        Argument::Bool(v) => {
            if spec.conv == b's' {
                spec.conv = 0;
                out.extend_from_slice(if v { b"true" } else { b"false" });
            } else {
                render::render_unsigned(v as u128, spec, out);
            }
        }
        Argument::Char(c) => {
            if spec.conv != 0 && spec.conv != b'c' {
                dispatch(out, Argument::I32(c as i32), spec);
                return;
            }
            spec.sign = Sign::None;
            spec.alt = false;
            spec.align = Align::Right;
            render::render_char(c, spec, out);
        }
        Argument::I8(v) => render::render_signed(v as i128, spec, out),
        Argument::I16(v) => render::render_signed(v as i128, spec, out),
        Argument::I32(v) => render::render_signed(v as i128, spec, out),
        Argument::I64(v) => render::render_signed(v as i128, spec, out),
        Argument::I128(v) => render::render_signed(v, spec, out),
        Argument::U8(v) => render::render_unsigned(v as u128, spec, out),
        Argument::U16(v) => render::render_unsigned(v as u128, spec, out),
        Argument::U32(v) => render::render_unsigned(v as u128, spec, out),
        Argument::U64(v) => render::render_unsigned(v as u128, spec, out),
        Argument::U128(v) => render::render_unsigned(v, spec, out),
        Argument::F32(v) => render::render_float(v as f64, spec, out),
        Argument::F64(v) => render::render_float(v, spec, out),
        Argument::CStr(Some(s)) => render::render_str(s, spec, out),
        Argument::CStr(None) | Argument::WideStr(None) => write_null_string(spec, out),
        Argument::WideStr(Some(units)) => render::render_wide_str(units, spec, out),
        Argument::Str(s) => render::render_str(s.as_bytes(), spec, out),
        Argument::Pointer(0) => {
            spec.conv = 0;
            out.extend_from_slice(b"(nil)");
        }
        Argument::Pointer(addr) => render::render_pointer(addr, spec, out),
        Argument::Custom(handle) => handle.format(spec, out),
    }
}

/// Null C strings render the pointer marker under `%p` and the string
/// marker everywhere else. Markers bypass field layout.
fn write_null_string(spec: &mut FormatSpec, out: &mut Vec<u8>) {
    if spec.conv == b'p' {
        spec.conv = 0;
        out.extend_from_slice(b"(nil)");
    } else {
        out.extend_from_slice(b"(null)");
    }
}
