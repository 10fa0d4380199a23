//! End-to-end conformance tests against reference printf behavior.

use printfc_core::{sprintf, vsprintf, Argument, ArgumentList, FormatError};

fn fmt(format: &str, args: &[Argument<'_>]) -> String {
    sprintf(format, &ArgumentList::new(args)).unwrap()
}

fn fmt_err(format: &str, args: &[Argument<'_>]) -> FormatError {
    sprintf(format, &ArgumentList::new(args)).unwrap_err()
}

#[test]
fn literal_text_is_copied_unchanged() {
    assert_eq!(fmt("no directives here", &[]), "no directives here");
    assert_eq!(fmt("", &[]), "");
}

#[test]
fn percent_escape_emits_one_percent() {
    assert_eq!(fmt("50%% off", &[]), "50% off");
    // No argument is consumed, so a full list is untouched.
    assert_eq!(fmt("%%%d", &[Argument::I32(9)]), "%9");
}

#[test]
fn sequential_cursor_advances_once_per_directive() {
    let args = [Argument::I32(3), Argument::I32(7)];
    assert_eq!(fmt("%d %d", &args), "3 7");
}

#[test]
fn positional_indices_are_one_based() {
    let args = [Argument::I32(3), Argument::I32(7)];
    assert_eq!(fmt("%2$d %1$d", &args), "7 3");
}

#[test]
fn index_zero_always_fails() {
    assert!(matches!(
        fmt_err("%0$d", &[Argument::I32(1), Argument::I32(2)]),
        FormatError::ArgumentIndexOutOfRange { index: 0, .. }
    ));
}

#[test]
fn index_past_list_fails() {
    assert!(matches!(
        fmt_err("%3$d", &[Argument::I32(1), Argument::I32(2)]),
        FormatError::ArgumentIndexOutOfRange {
            index: 3,
            available: 2
        }
    ));
}

#[test]
fn cursor_overrun_fails() {
    assert!(matches!(
        fmt_err("%d %d", &[Argument::I32(1)]),
        FormatError::ArgumentIndexOutOfRange { .. }
    ));
}

#[test]
fn width_from_argument() {
    let args = [Argument::I32(5), Argument::I32(42)];
    assert_eq!(fmt("%*d", &args), "   42");
}

#[test]
fn negative_width_argument_left_aligns() {
    let args = [Argument::I32(-5), Argument::I32(42)];
    assert_eq!(fmt("%*d", &args), "42   ");
}

#[test]
fn precision_from_argument() {
    let args = [Argument::I32(2), Argument::F64(3.14159)];
    assert_eq!(fmt("%.*f", &args), "3.14");
    // Negative precision clamps to zero instead of erroring.
    let args = [Argument::I32(-2), Argument::F64(3.7)];
    assert_eq!(fmt("%.*f", &args), "4");
}

#[test]
fn non_integral_width_or_precision_argument_fails() {
    assert!(matches!(
        fmt_err("%*d", &[Argument::Str("5"), Argument::I32(42)]),
        FormatError::InvalidWidth
    ));
    assert!(matches!(
        fmt_err("%.*f", &[Argument::F64(2.0), Argument::F64(3.14)]),
        FormatError::InvalidPrecision
    ));
}

#[test]
fn oversized_width_fails() {
    assert!(matches!(
        fmt_err("%*d", &[Argument::I64(1 << 40), Argument::I32(1)]),
        FormatError::ValueTooLarge
    ));
    assert!(matches!(
        fmt_err("%2147483648d", &[Argument::I32(1)]),
        FormatError::ValueTooLarge
    ));
}

#[test]
fn alternate_form_suppressed_for_zero() {
    let zero = [Argument::I32(0)];
    assert_eq!(fmt("%#o", &zero), fmt("%o", &zero));
    assert_eq!(fmt("%#x", &zero), "0");
    assert_eq!(fmt("%#x", &[Argument::I32(255)]), "0xff");
}

#[test]
fn null_string_markers() {
    assert_eq!(fmt("%s", &[Argument::CStr(None)]), "(null)");
    assert_eq!(fmt("%p", &[Argument::CStr(None)]), "(nil)");
}

#[test]
fn rendering_is_pure() {
    let args = [Argument::I32(-7), Argument::Str("x"), Argument::F64(2.5)];
    let list = ArgumentList::new(&args);
    let first = vsprintf(b"%05d %s %.1f", &list).unwrap();
    let second = vsprintf(b"%05d %s %.1f", &list).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, b"-0007 x 2.5");
}

#[test]
fn truncated_directives_fail() {
    for format in ["tail%", "%5", "%-", "%.", "%l", "%1$"] {
        assert!(
            matches!(
                fmt_err(format, &[Argument::I32(1)]),
                FormatError::MalformedDirective { .. }
            ),
            "expected malformed directive for {format:?}"
        );
        // Truncation wins over an exhausted argument list.
        assert!(
            matches!(
                fmt_err(format, &[]),
                FormatError::MalformedDirective { .. }
            ),
            "expected malformed directive for {format:?} with no arguments"
        );
    }
}

#[test]
fn flags_and_signs() {
    let args = [Argument::I32(42)];
    assert_eq!(fmt("%+d", &args), "+42");
    assert_eq!(fmt("% d", &args), " 42");
    assert_eq!(fmt("%-6d|", &args), "42    |");
    assert_eq!(fmt("%06d", &args), "000042");
    assert_eq!(fmt("%+d", &[Argument::I32(-42)]), "-42");
}

#[test]
fn zero_pad_goes_between_sign_and_digits() {
    assert_eq!(fmt("%08d", &[Argument::I32(-42)]), "-0000042");
    assert_eq!(fmt("%08.2f", &[Argument::F64(-1.5)]), "-0001.50");
}

#[test]
fn integer_precision_is_minimum_digits() {
    assert_eq!(fmt("%.5d", &[Argument::I32(42)]), "00042");
    assert_eq!(fmt("%.0d", &[Argument::I32(0)]), "");
    assert_eq!(fmt("%8.3d", &[Argument::I32(42)]), "     042");
}

#[test]
fn hex_octal_and_case() {
    let args = [Argument::U32(0xABCD)];
    assert_eq!(fmt("%x", &args), "abcd");
    assert_eq!(fmt("%X", &args), "ABCD");
    assert_eq!(fmt("%o", &[Argument::U32(8)]), "10");
}

#[test]
fn length_modifiers_resize_arguments() {
    assert_eq!(fmt("%hhd", &[Argument::I32(300)]), "44");
    assert_eq!(fmt("%hhu", &[Argument::I32(-1)]), "255");
    assert_eq!(fmt("%hd", &[Argument::I32(0x1_0005)]), "5");
    assert_eq!(fmt("%lld", &[Argument::I8(-5)]), "-5");
    assert_eq!(fmt("%zu", &[Argument::I32(-1)]), "4294967295");
    assert_eq!(
        fmt("%jd", &[Argument::I64(i64::MIN)]),
        "-9223372036854775808"
    );
}

#[test]
fn unsigned_argument_under_percent_d_prints_unsigned() {
    assert_eq!(fmt("%d", &[Argument::U32(u32::MAX)]), "4294967295");
    assert_eq!(
        fmt("%d", &[Argument::U64(u64::MAX)]),
        "18446744073709551615"
    );
}

#[test]
fn int128_arguments() {
    assert_eq!(
        fmt("%d", &[Argument::I128(-(1i128 << 100))]),
        "-1267650600228229401496703205376"
    );
    assert_eq!(
        fmt("%d", &[Argument::U128(u128::MAX)]),
        "340282366920938463463374607431768211455"
    );
}

#[test]
fn char_and_string_conversions() {
    assert_eq!(fmt("%c", &[Argument::Char('A')]), "A");
    assert_eq!(fmt("%c", &[Argument::I32(0x42)]), "B");
    assert_eq!(fmt("%.3s", &[Argument::Str("hello")]), "hel");
    assert_eq!(fmt("%-7s|", &[Argument::Str("ab")]), "ab     |");
    assert_eq!(fmt("%s", &[Argument::CStr(Some(b"bytes"))]), "bytes");
    let wide = [0x77u32, 0x69, 0x64, 0x65];
    assert_eq!(fmt("%ls", &[Argument::WideStr(Some(&wide))]), "wide");
}

#[test]
fn bool_under_s_is_textual() {
    assert_eq!(fmt("%s %s", &[Argument::Bool(true), Argument::Bool(false)]), "true false");
    assert_eq!(fmt("%d", &[Argument::Bool(false)]), "0");
}

#[test]
fn float_families() {
    assert_eq!(fmt("%f", &[Argument::F64(3.5)]), "3.500000");
    assert_eq!(fmt("%.2e", &[Argument::F64(12345.0)]), "1.23e+04");
    assert_eq!(fmt("%g", &[Argument::F64(0.00001)]), "1e-05");
    assert_eq!(fmt("%a", &[Argument::F64(1.5)]), "0x1.8p+0");
    assert_eq!(fmt("%.1f", &[Argument::F32(2.25)]), "2.2");
    assert_eq!(fmt("%F", &[Argument::F64(f64::NAN)]), "NAN");
}

#[test]
fn empty_precision_thousands_quirk() {
    assert_eq!(fmt("%.d", &[Argument::I32(1234567)]), "1.234.567");
    // Applies to decimal only; other conversions keep precision zero
    // semantics without separators.
    assert_eq!(fmt("%.f", &[Argument::F64(1234.5)]), "1234");
}

#[test]
fn thousands_separator_flags() {
    assert_eq!(fmt("%,d", &[Argument::I64(1234567)]), "1,234,567");
    assert_eq!(fmt("%'d", &[Argument::I32(1000)]), "1'000");
    assert_eq!(fmt("%_d", &[Argument::I32(42)]), "42");
}

#[test]
fn partial_output_remains_after_failure() {
    let args = [Argument::I32(1)];
    let list = ArgumentList::new(&args);
    let mut out = Vec::new();
    let result = printfc_core::vformat_to(&mut out, b"a=%d b=%q", &list);
    assert!(result.is_err());
    assert_eq!(&out, b"a=1 b=");
}
