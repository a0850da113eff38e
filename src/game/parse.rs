//! Guess parsing.

/// Coerces `text` to a number and keeps it only if it is a whole number.
///
/// The coercion follows loose numeric-literal rules: surrounding whitespace
/// is ignored, an empty string counts as `0`, `0x`/`0o`/`0b` prefixes select
/// a radix, and decimal literals may carry a sign, a fraction and an
/// exponent. The result is `None` when the text is not a number, is not
/// finite, has a fractional part, or does not fit in an `i64`.
///
/// # Examples
///
/// ```rust
/// use guessing_game::game::parse_int;
///
/// assert_eq!(parse_int("3"), Some(3));
/// assert_eq!(parse_int(" 4.0 "), Some(4));
/// assert_eq!(parse_int("0x10"), Some(16));
/// assert_eq!(parse_int("2.5"), None);
/// assert_eq!(parse_int("three"), None);
/// ```
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let number = parse_radix_literal(trimmed).or_else(|| parse_decimal_literal(trimmed))?;
    whole_number(number)
}

#[allow(clippy::cast_precision_loss)]
fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|digit| digit.is_digit(radix)) {
        return Some(f64::NAN);
    }
    // u128 covers every literal that can still land inside the i64 range.
    u128::from_str_radix(digits, radix)
        .map_or(Some(f64::INFINITY), |value| Some(value as f64))
}

fn parse_decimal_literal(text: &str) -> Option<f64> {
    // Rust also accepts "inf" and "nan" spellings; neither is a whole number.
    let unsigned = text.trim_start_matches(['+', '-']);
    if !unsigned.starts_with(|first: char| first.is_ascii_digit() || first == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

#[allow(clippy::cast_possible_truncation)]
fn whole_number(number: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or past it overflows i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !number.is_finite() || number.fract() != 0.0 || number >= LIMIT || number < -LIMIT {
        return None;
    }
    Some(number as i64)
}
