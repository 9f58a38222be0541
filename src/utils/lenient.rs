//! Forgiving numeric parsing for hand-edited record files.
//!
//! Both parsers accept the longest numeric prefix of the input after leading
//! whitespace and fall back to zero when there is none, so `"12ft"` reads as
//! `12` and `"abc"` reads as `0`. This keeps old data files loadable.

/// Parses a decimal number prefix such as `"-12.5e1xyz"`; no prefix yields `0.0`.
pub fn lenient_f64(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses an integer prefix such as `"42B"`; out-of-range values saturate.
pub fn lenient_i32(text: &str) -> i32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }

    match text[..end].parse::<i64>() {
        Ok(value) => value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        Err(_) if bytes[0] == b'-' => i32::MIN,
        Err(_) => i32::MAX,
    }
}
