//! Numeric validation functions

/// Coerce form text into a number the way a browser number cast does.
///
/// All whitespace is removed first and the empty string is not a number.
/// The rest follows the JS string-to-number grammar: an optionally signed
/// decimal literal with exponent, `Infinity`, or an unsigned `0x`/`0o`/`0b`
/// integer. Anything else (including `inf` and `NaN`) is not a number.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    match compact.as_str() {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(&compact) {
        return value;
    }

    // f64::from_str also takes "inf", "nan" and "infinity"; the JS grammar
    // has no letters besides the exponent marker.
    let decimal_chars = |b: u8| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E');
    if !compact.bytes().all(decimal_chars) {
        return None;
    }
    compact.parse::<f64>().ok()
}

/// `Some(result)` when `s` carries a radix prefix, `None` when it does not.
fn parse_prefixed_integer(s: &str) -> Option<Option<f64>> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    }))
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + std::fmt::Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}
