//! One-decimal number formatting for the canonical shape text.
//!
//! Renderers extract numbers from the text form with fixed patterns, so the
//! rounding must match what existing consumers expect: the shortest decimal
//! representation of the value, rounded half-up to one fractional digit
//! (`0.25` -> `0.3`, `0.35` -> `0.4`). `format!("{:.1}")` rounds on the exact
//! binary value instead and disagrees on those ties.

/// Format `value` with exactly one fractional digit, rounding half-up.
pub fn one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.1}", value);
    }

    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut frac_digits = frac_part.bytes().map(|b| b - b'0');
    let tenths = frac_digits.next().unwrap_or(0);
    let round_up = frac_digits.next().is_some_and(|d| d >= 5);

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.push(tenths);

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let (whole, last) = digits.split_at(digits.len() - 1);
    let whole: String = whole.iter().map(|d| char::from(b'0' + d)).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    format!("{}{}.{}", sign, whole, last[0])
}
