//! Brazilian phone number validation.
//!
//! Landlines carry 10 digits, mobile numbers 11 (the extra leading 9 in the
//! local part). Server-side forms only accept the fully masked rendering,
//! while input fields tolerate anything with the right amount of digits, so
//! both rules are exposed behind an explicit mode.

/// How strictly a phone number must be formatted to pass validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneValidation {
    /// Accepts only the masked forms `(00) 0000-0000` and `(00) 00000-0000`.
    Strict,
    /// Ignores formatting and accepts any input with 10 or 11 digits.
    Lenient,
}

/// Validates a phone number under the chosen mode.
pub fn is_valid_phone(raw: &str, mode: PhoneValidation) -> bool {
    match mode {
        PhoneValidation::Strict => is_masked_phone(raw),
        PhoneValidation::Lenient => {
            let digits = raw.chars().filter(char::is_ascii_digit).count();
            digits == 10 || digits == 11
        }
    }
}

/// Checks the exact shape `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN`.
fn is_masked_phone(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    // 14 bytes for the landline form, 15 for the mobile form.
    let local_len = match bytes.len() {
        14 => 4,
        15 => 5,
        _ => return false,
    };

    let all_digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    bytes[0] == b'('
        && all_digits(1..3)
        && bytes[3] == b')'
        && bytes[4] == b' '
        && all_digits(5..5 + local_len)
        && bytes[5 + local_len] == b'-'
        && all_digits(6 + local_len..bytes.len())
}
