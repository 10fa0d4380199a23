//! Length-modifier resolution and argument width conversion.
//!
//! The conversion matrix truncates the argument to the resolved target
//! width first and then extends it explicitly, so results never depend on
//! implementation-defined narrowing of the source type.

use crate::arg::Argument;
use crate::parse::Cursor;

/// Target integer width selected by a length modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// No modifier (or `L`): the argument keeps its own width.
    Natural,
    /// `hh`
    Int8,
    /// `h`
    Int16,
    /// `l` (LP64 long)
    Long,
    /// `ll`
    Int64,
    /// `j`
    IntMax,
    /// `z`
    Size,
    /// `t`
    PtrDiff,
}

impl Target {
    fn bits(self, natural: u32) -> u32 {
        match self {
            Target::Natural => natural,
            Target::Int8 => 8,
            Target::Int16 => 16,
            Target::Long | Target::Int64 | Target::IntMax => 64,
            Target::Size | Target::PtrDiff => usize::BITS,
        }
    }
}

/// Consume up to two length-modifier bytes, greedily left to right.
///
/// `L` applies only to floating-point conversions and needs no integer
/// conversion, so it maps to [`Target::Natural`].
pub(crate) fn parse_length(cur: &mut Cursor<'_>) -> Target {
    match cur.peek() {
        Some(b'h') => {
            cur.bump();
            if cur.peek() == Some(b'h') {
                cur.bump();
                Target::Int8
            } else {
                Target::Int16
            }
        }
        Some(b'l') => {
            cur.bump();
            if cur.peek() == Some(b'l') {
                cur.bump();
                Target::Int64
            } else {
                Target::Long
            }
        }
        Some(b'j') => {
            cur.bump();
            Target::IntMax
        }
        Some(b'z') => {
            cur.bump();
            Target::Size
        }
        Some(b't') => {
            cur.bump();
            Target::PtrDiff
        }
        Some(b'L') => {
            cur.bump();
            Target::Natural
        }
        _ => Target::Natural,
    }
}

fn truncate(raw: u128, bits: u32) -> u128 {
    if bits >= 128 {
        raw
    } else {
        raw & ((1u128 << bits) - 1)
    }
}

fn sign_extend(raw: u128, bits: u32) -> i128 {
    let shift = 128 - bits;
    ((raw << shift) as i128) >> shift
}

/// Re-sign and resize an integral argument per the resolved target width
/// and conversion character. Non-integral arguments pass through
/// unchanged, as does a boolean bound for textual `%s` rendering.
///
/// `d`/`i` request a signed interpretation unless the argument is itself
/// an unsigned kind, in which case the conversion degrades to unsigned
/// decimal (legacy printf treats unsigned arguments under `%d` as
/// unsigned).
pub(crate) fn convert_arg<'a>(arg: Argument<'a>, target: Target, conv: u8) -> Argument<'a> {
    if !arg.is_integral() {
        return arg;
    }
    if matches!(arg, Argument::Bool(_)) && conv == b's' {
        return arg;
    }
    let signed = (conv == b'd' || conv == b'i') && !arg.is_unsigned_kind();
    let raw = arg.raw_bits();
    let target_bits = target.bits(arg.int_bits());
    if target_bits <= 32 {
        // Common fast path: everything at or below native int width goes
        // through a 32-bit representation.
        let t = truncate(raw, target_bits);
        if signed {
            Argument::I32(sign_extend(t, target_bits) as i32)
        } else {
            Argument::U32(t as u32)
        }
    } else if signed {
        if target_bits > 64 {
            Argument::I128(raw as i128)
        } else {
            Argument::I64(sign_extend(truncate(raw, 64), 64) as i64)
        }
    } else {
        // Unsigned wide targets reinterpret the source at its own width.
        let bits = arg.int_bits();
        let t = truncate(raw, bits);
        if bits > 64 {
            Argument::U128(t)
        } else {
            Argument::U64(t as u64)
        }
    }
}

/// `%c` with an integral argument: truncating cast to a 32-bit code unit.
/// Code units outside the Unicode scalar range render as U+FFFD.
pub(crate) fn to_char(arg: Argument<'_>) -> Argument<'_> {
    if !arg.is_integral() {
        return arg;
    }
    let code = truncate(arg.raw_bits(), 32) as u32;
    Argument::Char(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
}
