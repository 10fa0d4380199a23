//! Typed arguments and the argument store.
//!
//! Arguments are supplied once per format call and are read-only for the
//! duration of the call. Sequential access state lives in an explicit
//! [`ArgCursor`] owned by the format loop, so a shared read-only
//! [`ArgumentList`] stays safe across concurrent calls.

use std::fmt;

use crate::error::FormatError;
use crate::spec::{Align, FormatSpec};

/// Hook for rendering opaque user-defined values through the engine.
///
/// The dispatcher hands the populated per-directive [`FormatSpec`] to the
/// handle and appends whatever it writes.
pub trait CustomFormat {
    fn format(&self, spec: &FormatSpec, out: &mut Vec<u8>);
}

/// A single statically-typed printf argument.
#[derive(Clone, Copy)]
pub enum Argument<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Bool(bool),
    Char(char),
    F32(f32),
    F64(f64),
    /// Narrow C string contents (no terminator byte); `None` is a null
    /// pointer.
    CStr(Option<&'a [u8]>),
    /// Wide C string code units; `None` is a null pointer.
    WideStr(Option<&'a [u32]>),
    /// Borrowed string view.
    Str(&'a str),
    /// Raw pointer value; zero is the null pointer.
    Pointer(usize),
    /// User-defined type rendered through [`CustomFormat`].
    Custom(&'a dyn CustomFormat),
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::I8(v) => write!(f, "I8({v})"),
            Argument::I16(v) => write!(f, "I16({v})"),
            Argument::I32(v) => write!(f, "I32({v})"),
            Argument::I64(v) => write!(f, "I64({v})"),
            Argument::I128(v) => write!(f, "I128({v})"),
            Argument::U8(v) => write!(f, "U8({v})"),
            Argument::U16(v) => write!(f, "U16({v})"),
            Argument::U32(v) => write!(f, "U32({v})"),
            Argument::U64(v) => write!(f, "U64({v})"),
            Argument::U128(v) => write!(f, "U128({v})"),
            Argument::Bool(v) => write!(f, "Bool({v})"),
            Argument::Char(v) => write!(f, "Char({v:?})"),
            Argument::F32(v) => write!(f, "F32({v})"),
            Argument::F64(v) => write!(f, "F64({v})"),
            Argument::CStr(v) => write!(f, "CStr({v:?})"),
            Argument::WideStr(v) => write!(f, "WideStr({v:?})"),
            Argument::Str(v) => write!(f, "Str({v:?})"),
            Argument::Pointer(v) => write!(f, "Pointer({v:#x})"),
            Argument::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Argument<'_> {
    /// Integer, boolean, or character kinds.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            Argument::I8(_)
                | Argument::I16(_)
                | Argument::I32(_)
                | Argument::I64(_)
                | Argument::I128(_)
                | Argument::U8(_)
                | Argument::U16(_)
                | Argument::U32(_)
                | Argument::U64(_)
                | Argument::U128(_)
                | Argument::Bool(_)
                | Argument::Char(_)
        )
    }

    /// Integral or floating-point kinds. Zero-fill applies only to these.
    pub fn is_arithmetic(&self) -> bool {
        self.is_integral() || matches!(self, Argument::F32(_) | Argument::F64(_))
    }

    /// Unsigned integer kinds. Booleans and characters do not count:
    /// only genuine unsigned integers force `%d` to render as unsigned.
    pub(crate) fn is_unsigned_kind(&self) -> bool {
        matches!(
            self,
            Argument::U8(_)
                | Argument::U16(_)
                | Argument::U32(_)
                | Argument::U64(_)
                | Argument::U128(_)
        )
    }

    /// True iff the argument is an integral zero. Alternate-form
    /// decoration is suppressed for these.
    pub(crate) fn is_zero_int(&self) -> bool {
        match *self {
            Argument::I8(v) => v == 0,
            Argument::I16(v) => v == 0,
            Argument::I32(v) => v == 0,
            Argument::I64(v) => v == 0,
            Argument::I128(v) => v == 0,
            Argument::U8(v) => v == 0,
            Argument::U16(v) => v == 0,
            Argument::U32(v) => v == 0,
            Argument::U64(v) => v == 0,
            Argument::U128(v) => v == 0,
            Argument::Bool(v) => !v,
            Argument::Char(v) => v == '\0',
            _ => false,
        }
    }

    /// Two's-complement bits of an integral argument, sign- or
    /// zero-extended to 128 bits per the source signedness.
    pub(crate) fn raw_bits(&self) -> u128 {
        match *self {
            Argument::I8(v) => v as i128 as u128,
            Argument::I16(v) => v as i128 as u128,
            Argument::I32(v) => v as i128 as u128,
            Argument::I64(v) => v as i128 as u128,
            Argument::I128(v) => v as u128,
            Argument::U8(v) => v as u128,
            Argument::U16(v) => v as u128,
            Argument::U32(v) => v as u128,
            Argument::U64(v) => v as u128,
            Argument::U128(v) => v,
            Argument::Bool(v) => v as u128,
            Argument::Char(v) => v as u128,
            _ => 0,
        }
    }

    /// Bit width of an integral argument's own type.
    pub(crate) fn int_bits(&self) -> u32 {
        match self {
            Argument::I8(_) | Argument::U8(_) | Argument::Bool(_) => 8,
            Argument::I16(_) | Argument::U16(_) => 16,
            Argument::I32(_) | Argument::U32(_) | Argument::Char(_) => 32,
            Argument::I64(_) | Argument::U64(_) => 64,
            Argument::I128(_) | Argument::U128(_) => 128,
            _ => 32,
        }
    }

    /// Magnitude and sign of an integral argument, or `None` for
    /// non-integral kinds. Used by the width/precision handlers.
    pub(crate) fn integral_value(&self) -> Option<(u128, bool)> {
        match *self {
            Argument::I8(v) => Some((v.unsigned_abs() as u128, v < 0)),
            Argument::I16(v) => Some((v.unsigned_abs() as u128, v < 0)),
            Argument::I32(v) => Some((v.unsigned_abs() as u128, v < 0)),
            Argument::I64(v) => Some((v.unsigned_abs() as u128, v < 0)),
            Argument::I128(v) => Some((v.unsigned_abs(), v < 0)),
            Argument::U8(v) => Some((v as u128, false)),
            Argument::U16(v) => Some((v as u128, false)),
            Argument::U32(v) => Some((v as u128, false)),
            Argument::U64(v) => Some((v as u128, false)),
            Argument::U128(v) => Some((v, false)),
            Argument::Bool(v) => Some((v as u128, false)),
            Argument::Char(v) => Some((v as u128, false)),
            _ => None,
        }
    }
}

/// Ordered, read-only argument store for one format call.
///
/// Lookup is by 1-based explicit index or through a caller-owned
/// [`ArgCursor`]. Mixing both in one call is permitted; any out-of-range
/// access fails immediately with no clamping.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentList<'a> {
    args: &'a [Argument<'a>],
}

impl<'a> ArgumentList<'a> {
    pub fn new(args: &'a [Argument<'a>]) -> Self {
        Self { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Fetch by explicit 1-based index. Index 0 is invalid.
    pub fn get(&self, index: usize) -> Result<Argument<'a>, FormatError> {
        if index == 0 || index > self.args.len() {
            return Err(FormatError::ArgumentIndexOutOfRange {
                index,
                available: self.args.len(),
            });
        }
        Ok(self.args[index - 1])
    }

    /// Fetch the next sequential argument, advancing `cursor` on success.
    pub fn next(&self, cursor: &mut ArgCursor) -> Result<Argument<'a>, FormatError> {
        let fetched = self.get(cursor.consumed + 1)?;
        cursor.consumed += 1;
        Ok(fetched)
    }
}

/// Implicit sequential-access cursor, reset at the start of each call and
/// advanced once per unindexed access.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgCursor {
    consumed: usize,
}

/// Resolve a `*` width argument. A negative value forces left alignment
/// and contributes its absolute value; a magnitude above `i32::MAX` is
/// rejected.
pub(crate) fn width_from_arg(
    arg: &Argument<'_>,
    spec: &mut FormatSpec,
) -> Result<u32, FormatError> {
    let Some((magnitude, negative)) = arg.integral_value() else {
        return Err(FormatError::InvalidWidth);
    };
    if negative {
        spec.align = Align::Left;
    }
    if magnitude > i32::MAX as u128 {
        return Err(FormatError::ValueTooLarge);
    }
    Ok(magnitude as u32)
}

/// Resolve a `.*` precision argument. Values that do not fit in a signed
/// 32-bit integer are rejected; representable negatives clamp silently
/// to zero.
pub(crate) fn precision_from_arg(arg: &Argument<'_>) -> Result<u32, FormatError> {
    let Some((magnitude, negative)) = arg.integral_value() else {
        return Err(FormatError::InvalidPrecision);
    };
    if negative {
        if magnitude > 1 << 31 {
            return Err(FormatError::ValueTooLarge);
        }
        Ok(0)
    } else if magnitude > i32::MAX as u128 {
        Err(FormatError::ValueTooLarge)
    } else {
        Ok(magnitude as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_cursor_advances() {
        let args = [Argument::I32(3), Argument::I32(7)];
        let list = ArgumentList::new(&args);
        let mut cursor = ArgCursor::default();
        assert!(matches!(list.next(&mut cursor), Ok(Argument::I32(3))));
        assert!(matches!(list.next(&mut cursor), Ok(Argument::I32(7))));
        assert!(matches!(
            list.next(&mut cursor),
            Err(FormatError::ArgumentIndexOutOfRange {
                index: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_explicit_index_is_one_based() {
        let args = [Argument::I32(3), Argument::I32(7)];
        let list = ArgumentList::new(&args);
        assert!(matches!(list.get(1), Ok(Argument::I32(3))));
        assert!(matches!(list.get(2), Ok(Argument::I32(7))));
        assert!(matches!(
            list.get(0),
            Err(FormatError::ArgumentIndexOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            list.get(3),
            Err(FormatError::ArgumentIndexOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn test_positional_access_does_not_move_cursor() {
        let args = [Argument::I32(3), Argument::I32(7)];
        let list = ArgumentList::new(&args);
        let mut cursor = ArgCursor::default();
        assert!(matches!(list.get(2), Ok(Argument::I32(7))));
        assert!(matches!(list.next(&mut cursor), Ok(Argument::I32(3))));
    }

    #[test]
    fn test_width_from_negative_arg_forces_left() {
        let mut spec = FormatSpec::default();
        let width = width_from_arg(&Argument::I32(-5), &mut spec).unwrap();
        assert_eq!(width, 5);
        assert_eq!(spec.align, Align::Left);
    }

    #[test]
    fn test_width_from_non_integral_arg_fails() {
        let mut spec = FormatSpec::default();
        assert!(matches!(
            width_from_arg(&Argument::F64(5.0), &mut spec),
            Err(FormatError::InvalidWidth)
        ));
        assert!(matches!(
            width_from_arg(&Argument::Str("5"), &mut spec),
            Err(FormatError::InvalidWidth)
        ));
    }

    #[test]
    fn test_width_magnitude_overflow() {
        let mut spec = FormatSpec::default();
        assert!(matches!(
            width_from_arg(&Argument::I64(i64::MIN), &mut spec),
            Err(FormatError::ValueTooLarge)
        ));
        assert!(matches!(
            width_from_arg(&Argument::U64(1 << 40), &mut spec),
            Err(FormatError::ValueTooLarge)
        ));
    }

    #[test]
    fn test_precision_negative_clamps_to_zero() {
        assert_eq!(precision_from_arg(&Argument::I32(-7)).unwrap(), 0);
        assert_eq!(precision_from_arg(&Argument::I32(i32::MIN)).unwrap(), 0);
    }

    #[test]
    fn test_precision_overflow_and_kind_errors() {
        assert!(matches!(
            precision_from_arg(&Argument::I64(1 << 40)),
            Err(FormatError::ValueTooLarge)
        ));
        assert!(matches!(
            precision_from_arg(&Argument::I64(-(1i64 << 40))),
            Err(FormatError::ValueTooLarge)
        ));
        assert!(matches!(
            precision_from_arg(&Argument::CStr(Some(b"3"))),
            Err(FormatError::InvalidPrecision)
        ));
    }

    #[test]
    fn test_zero_int_predicate() {
        assert!(Argument::U64(0).is_zero_int());
        assert!(Argument::Bool(false).is_zero_int());
        assert!(!Argument::I32(1).is_zero_int());
        assert!(!Argument::F64(0.0).is_zero_int());
    }
}
