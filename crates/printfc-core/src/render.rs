//! Layout renderer.
//!
//! Takes a normalized value plus a populated [`FormatSpec`] and appends
//! padded, aligned, signed text to a byte buffer. Alignment, fill, sign
//! placement, alternate-form prefixes, precision, and decimal thousands
//! grouping all happen here; directive parsing and argument conversion
//! happen upstream.

use crate::spec::{Align, FormatSpec, Sign};

/// Render a signed integer according to `spec`.
pub fn render_signed(value: i128, spec: &FormatSpec, out: &mut Vec<u8>) {
    render_int(value.unsigned_abs(), value < 0, spec, out);
}

/// Render an unsigned integer according to `spec`.
pub fn render_unsigned(value: u128, spec: &FormatSpec, out: &mut Vec<u8>) {
    render_int(value, false, spec, out);
}

fn render_int(magnitude: u128, negative: bool, spec: &FormatSpec, out: &mut Vec<u8>) {
    let (base, upper) = int_base(spec.conv);
    let mut digits = [0u8; 48];
    let count = render_digits(magnitude, base, upper, &mut digits);
    let raw = &digits[48 - count..];

    let sign = sign_byte(negative, spec.sign);

    // Precision is the minimum digit count; precision 0 with value 0
    // emits no digits at all.
    let min_digits = spec.precision.unwrap_or(1) as usize;
    let suppress = magnitude == 0 && spec.precision == Some(0);
    let mut body = Vec::with_capacity(count + 8);
    if !suppress {
        body.resize(min_digits.saturating_sub(count), b'0');
        body.extend_from_slice(raw);
        if base == 10 {
            if let Some(sep) = spec.thousands {
                body = group_thousands(&body, sep);
            }
        }
    }

    let prefix: &[u8] = if spec.alt && magnitude != 0 {
        match spec.conv {
            b'o' => b"0",
            b'x' => b"0x",
            b'X' => b"0X",
            _ => b"",
        }
    } else {
        b""
    };

    // An explicit precision disables zero padding for integers.
    let (align, fill) = if spec.precision.is_some() && spec.align == Align::Numeric {
        (Align::Right, b' ')
    } else {
        (spec.align, spec.fill)
    };

    let content = usize::from(sign.is_some()) + prefix.len() + body.len();
    let padding = (spec.width as usize).saturating_sub(content);
    emit_field(out, sign, prefix, &body, align, fill, padding);
}

/// Render string bytes: precision truncates, width pads.
pub fn render_str(s: &[u8], spec: &FormatSpec, out: &mut Vec<u8>) {
    let max = spec.precision.map(|p| p as usize).unwrap_or(s.len());
    let effective = &s[..s.len().min(max)];
    let padding = (spec.width as usize).saturating_sub(effective.len());
    match spec.align {
        Align::Left => {
            out.extend_from_slice(effective);
            pad(out, spec.fill, padding);
        }
        _ => {
            pad(out, spec.fill, padding);
            out.extend_from_slice(effective);
        }
    }
}

/// Render wide-string code units. Precision truncates in code units;
/// width counts emitted bytes, like the narrow renderers. Units outside
/// the Unicode scalar range render as U+FFFD.
pub fn render_wide_str(units: &[u32], spec: &FormatSpec, out: &mut Vec<u8>) {
    let take = spec
        .precision
        .map(|p| (p as usize).min(units.len()))
        .unwrap_or(units.len());
    let mut body = Vec::with_capacity(take);
    for &unit in &units[..take] {
        let c = char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER);
        let mut enc = [0u8; 4];
        body.extend_from_slice(c.encode_utf8(&mut enc).as_bytes());
    }
    let padding = (spec.width as usize).saturating_sub(body.len());
    match spec.align {
        Align::Left => {
            out.extend_from_slice(&body);
            pad(out, spec.fill, padding);
        }
        _ => {
            pad(out, spec.fill, padding);
            out.extend_from_slice(&body);
        }
    }
}

/// Render a single character inside its field.
pub fn render_char(c: char, spec: &FormatSpec, out: &mut Vec<u8>) {
    let mut enc = [0u8; 4];
    let encoded = c.encode_utf8(&mut enc).as_bytes();
    let padding = (spec.width as usize).saturating_sub(1);
    match spec.align {
        Align::Left => {
            out.extend_from_slice(encoded);
            pad(out, spec.fill, padding);
        }
        _ => {
            pad(out, spec.fill, padding);
            out.extend_from_slice(encoded);
        }
    }
}

/// Render a non-null pointer as `0x` plus lowercase hex.
pub fn render_pointer(addr: usize, spec: &FormatSpec, out: &mut Vec<u8>) {
    let mut digits = [0u8; 48];
    let count = render_digits(addr as u128, 16, false, &mut digits);
    let body = &digits[48 - count..];
    let padding = (spec.width as usize).saturating_sub(2 + count);
    emit_field(out, None, b"0x", body, spec.align, spec.fill, padding);
}

/// Render a double according to `spec`. Covers `f`/`e`/`g`/`a` families
/// in both cases; the default precision is 6.
pub fn render_float(value: f64, spec: &FormatSpec, out: &mut Vec<u8>) {
    let conv = if spec.conv == 0 { b'f' } else { spec.conv };
    let upper = conv.is_ascii_uppercase();
    let negative = value.is_sign_negative();
    let sign = sign_byte(negative, spec.sign);

    if !value.is_finite() {
        let word: &[u8] = match (value.is_nan(), upper) {
            (true, false) => b"nan",
            (true, true) => b"NAN",
            (false, false) => b"inf",
            (false, true) => b"INF",
        };
        let content = usize::from(sign.is_some()) + word.len();
        let padding = (spec.width as usize).saturating_sub(content);
        // Words never zero-pad.
        let align = if spec.align == Align::Numeric {
            Align::Right
        } else {
            spec.align
        };
        emit_field(out, sign, b"", word, align, b' ', padding);
        return;
    }

    let abs = value.abs();
    let precision = spec.precision.map(|p| p as usize);
    let body = match conv.to_ascii_lowercase() {
        b'e' => format_e(abs, precision.unwrap_or(6), upper, spec.alt),
        b'g' => format_g(abs, precision.unwrap_or(6), upper, spec.alt),
        b'a' => format_a(abs, precision, upper, spec.alt),
        _ => format_f(abs, precision.unwrap_or(6), spec.alt),
    };
    let content = usize::from(sign.is_some()) + body.len();
    let padding = (spec.width as usize).saturating_sub(content);
    emit_field(out, sign, b"", body.as_bytes(), spec.align, spec.fill, padding);
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn sign_byte(negative: bool, sign: Sign) -> Option<u8> {
    if negative {
        Some(b'-')
    } else {
        match sign {
            Sign::Plus => Some(b'+'),
            Sign::Space => Some(b' '),
            Sign::None => None,
        }
    }
}

fn int_base(conv: u8) -> (u128, bool) {
    match conv {
        b'o' => (8, false),
        b'x' => (16, false),
        b'X' => (16, true),
        _ => (10, false),
    }
}

/// Render `value` in `base` into the END of `buf`, right-aligned.
/// Returns the digit count. 48 bytes covers 128-bit octal.
fn render_digits(mut value: u128, base: u128, upper: bool, buf: &mut [u8; 48]) -> usize {
    if value == 0 {
        buf[47] = b'0';
        return 1;
    }
    let alpha = if upper { b'A' } else { b'a' };
    let mut pos = 48;
    while value > 0 && pos > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
    }
    48 - pos
}

/// Insert `sep` every three digits, counting from the right. Applies to
/// the digit run only; width padding is never grouped.
fn group_thousands(digits: &[u8], sep: u8) -> Vec<u8> {
    let mut grouped = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(d);
    }
    grouped
}

/// Assemble sign, prefix, padding, and body in alignment order.
fn emit_field(
    out: &mut Vec<u8>,
    sign: Option<u8>,
    prefix: &[u8],
    body: &[u8],
    align: Align,
    fill: u8,
    padding: usize,
) {
    match align {
        Align::Right => {
            pad(out, fill, padding);
            out.extend(sign);
            out.extend_from_slice(prefix);
            out.extend_from_slice(body);
        }
        Align::Numeric => {
            out.extend(sign);
            out.extend_from_slice(prefix);
            pad(out, b'0', padding);
            out.extend_from_slice(body);
        }
        Align::Left => {
            out.extend(sign);
            out.extend_from_slice(prefix);
            out.extend_from_slice(body);
            pad(out, fill, padding);
        }
    }
}

fn pad(out: &mut Vec<u8>, byte: u8, count: usize) {
    out.extend(std::iter::repeat_n(byte, count));
}

/// `%f` body: fixed-point decimal.
fn format_f(value: f64, precision: usize, alt: bool) -> String {
    let mut s = format!("{value:.precision$}");
    if alt && precision == 0 {
        s.push('.');
    }
    s
}

/// `%e` body: scientific notation with a signed two-digit exponent.
fn format_e(value: f64, precision: usize, upper: bool, alt: bool) -> String {
    let formatted = format!("{value:.precision$e}");
    let (mantissa, exp) = match formatted.split_once('e') {
        Some(parts) => parts,
        None => (formatted.as_str(), "0"),
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    let dot = if alt && precision == 0 { "." } else { "" };
    format!("{mantissa}{dot}{e}{sign}{:02}", exp.unsigned_abs())
}

/// `%g` body: `%f` or `%e`, whichever is shorter per the C rules, with
/// trailing zeros stripped unless alternate form keeps them.
fn format_g(value: f64, precision: usize, upper: bool, alt: bool) -> String {
    let p = if precision == 0 { 1 } else { precision };
    if value == 0.0 {
        let mut s = String::from("0");
        if alt && p > 1 {
            s.push('.');
            s.extend(std::iter::repeat_n('0', p - 1));
        }
        return s;
    }
    let exp = value.log10().floor() as i32;
    if (-4..p as i32).contains(&exp) {
        let frac = (p as i32 - 1 - exp).max(0) as usize;
        let mut s = format!("{value:.frac$}");
        if !alt {
            strip_trailing_zeros(&mut s);
        }
        s
    } else {
        let mut s = format_e(value, p - 1, upper, alt);
        if !alt {
            if let Some(epos) = s.find(['e', 'E']) {
                let mut mantissa = s[..epos].to_string();
                strip_trailing_zeros(&mut mantissa);
                s = format!("{mantissa}{}", &s[epos..]);
            }
        }
        s
    }
}

/// `%a` body: hexadecimal floating point, `0x1.xxxp±e`.
fn format_a(value: f64, precision: Option<usize>, upper: bool, alt: bool) -> String {
    let bits = value.to_bits();
    let exp_field = ((bits >> 52) & 0x7FF) as i64;
    let frac = bits & ((1u64 << 52) - 1);

    let (mut lead, exp) = if value == 0.0 {
        (0u64, 0i64)
    } else if exp_field == 0 {
        // Subnormals keep the 0. leading form with the minimum exponent.
        (0, -1022)
    } else {
        (1, exp_field - 1023)
    };

    let mut nibbles: Vec<u8> = (0..13)
        .map(|i| ((frac >> (48 - 4 * i)) & 0xF) as u8)
        .collect();
    match precision {
        None => {
            while nibbles.last() == Some(&0) {
                nibbles.pop();
            }
        }
        Some(p) if p < 13 => {
            // Round to nearest, ties to even.
            let first_dropped = nibbles[p];
            let rest_nonzero = nibbles[p + 1..].iter().any(|&n| n != 0);
            nibbles.truncate(p);
            let last_kept = nibbles.last().copied().unwrap_or(lead as u8);
            if first_dropped > 8 || (first_dropped == 8 && (rest_nonzero || last_kept & 1 == 1)) {
                let mut i = nibbles.len();
                loop {
                    if i == 0 {
                        lead += 1;
                        break;
                    }
                    i -= 1;
                    if nibbles[i] == 0xF {
                        nibbles[i] = 0;
                    } else {
                        nibbles[i] += 1;
                        break;
                    }
                }
            }
        }
        Some(p) => nibbles.resize(p, 0),
    }

    let mut s = String::from("0x");
    s.push(char::from_digit(lead as u32, 16).unwrap_or('0'));
    if !nibbles.is_empty() || alt {
        s.push('.');
        for &n in &nibbles {
            s.push(char::from_digit(n as u32, 16).unwrap_or('0'));
        }
    }
    s.push('p');
    s.push(if exp < 0 { '-' } else { '+' });
    s.push_str(&exp.unsigned_abs().to_string());
    if upper { s.to_uppercase() } else { s }
}

/// Remove trailing zeros after the decimal point.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
