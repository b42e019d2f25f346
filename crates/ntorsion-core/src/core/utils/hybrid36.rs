//! Hybrid-36 encoding of five-column PDB serial numbers.
//!
//! Values up to 99999 are plain decimal. Larger values continue as base-36 with an
//! upper-case leading letter (`A0000` is 100000), then with a lower-case one.

const WIDTH: u32 = 5;
const DECIMAL_LIMIT: i64 = 100_000;
const DECIMAL_FLOOR: i64 = -9_999;
/// 10 * 36^4: the base-36 value of `A0000`.
const LETTER_OFFSET: i64 = 10 * 36_i64.pow(WIDTH - 1);
/// Number of values covered by one letter case.
const CASE_SPAN: i64 = 26 * 36_i64.pow(WIDTH - 1);

/// Decodes a (trimmed) serial field; `None` for blanks, overflow markers such as
/// `*****`, and anything else that is neither decimal nor hybrid-36.
pub fn decode(field: &str) -> Option<i64> {
    if let Ok(value) = field.parse::<i64>() {
        return Some(value);
    }
    if field.len() != WIDTH as usize {
        return None;
    }

    let first = field.chars().next()?;
    let lower = if first.is_ascii_uppercase() {
        false
    } else if first.is_ascii_lowercase() {
        true
    } else {
        return None;
    };
    let same_case = |c: char| {
        c.is_ascii_digit()
            || if lower {
                c.is_ascii_lowercase()
            } else {
                c.is_ascii_uppercase()
            }
    };
    if !field.chars().all(same_case) {
        return None;
    }
    let case_base = if lower { CASE_SPAN } else { 0 };

    let raw = i64::from_str_radix(&field.to_ascii_uppercase(), 36).ok()?;
    Some(raw - LETTER_OFFSET + DECIMAL_LIMIT + case_base)
}

/// Encodes a serial into at most five characters; `None` when out of range.
pub fn encode(value: i64) -> Option<String> {
    if (DECIMAL_FLOOR..DECIMAL_LIMIT).contains(&value) {
        return Some(value.to_string());
    }
    if value < DECIMAL_FLOOR {
        return None;
    }

    let shifted = value - DECIMAL_LIMIT;
    let (raw, lower) = if shifted < CASE_SPAN {
        (shifted + LETTER_OFFSET, false)
    } else if shifted < 2 * CASE_SPAN {
        (shifted - CASE_SPAN + LETTER_OFFSET, true)
    } else {
        return None;
    };

    let mut digits = Vec::with_capacity(WIDTH as usize);
    let mut rest = raw;
    for _ in 0..WIDTH {
        let digit = (rest % 36) as u32;
        rest /= 36;
        let c = char::from_digit(digit, 36)?;
        digits.push(if lower { c } else { c.to_ascii_uppercase() });
    }
    Some(digits.into_iter().rev().collect())
}
