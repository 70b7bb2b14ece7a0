//! Brazilian CPF document validation.
//!
//! A CPF is an 11-digit taxpayer number whose last two digits are check
//! digits computed from the first nine. Input may arrive masked
//! (`000.000.000-00`) or as bare digits; everything but digits is ignored.

/// Validates a CPF using the two-pass check digit algorithm.
///
/// Strips non-digits first, then rejects inputs that do not contain exactly
/// 11 digits and the well-formed but invalid numbers made of a single
/// repeated digit. Each pass multiplies the leading digits by descending
/// weights and compares the normalized remainder against a check digit.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }

    // Sequences like 111.111.111-11 satisfy the checksum but are not
    // valid documents.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    // First check digit: weights 10 down to 2 over the first nine digits.
    let mut sum = 0u32;
    for i in 1..=9 {
        sum += digits[i - 1] * (11 - i as u32);
    }
    let mut remainder = (sum * 10) % 11;
    if remainder == 10 || remainder == 11 {
        remainder = 0;
    }
    if remainder != digits[9] {
        return false;
    }

    // Second check digit: weights 11 down to 2 over the first ten digits.
    let mut sum = 0u32;
    for i in 1..=10 {
        sum += digits[i - 1] * (12 - i as u32);
    }
    let mut remainder = (sum * 10) % 11;
    if remainder == 10 || remainder == 11 {
        remainder = 0;
    }
    remainder == digits[10]
}
