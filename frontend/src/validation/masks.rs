//! Progressive input masks for CPF and phone fields.
//!
//! A mask re-derives the display string from the digits typed so far, so
//! feeding each keystroke's result back through the mask ends at the same
//! string as formatting the complete number in one call. Digits beyond the
//! field's capacity are dropped.

/// Formats a phone number prefix, ending at `(DD) 0000-0000` for 10 digits
/// or `(DD) 00000-0000` for 11. Keeps at most 11 digits.
///
/// The area code parentheses appear from the third digit on; the hyphen
/// appears once the local part outgrows its leading block, and shifts right
/// when an eleventh digit arrives.
pub fn mask_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(11).collect();

    if digits.len() < 3 {
        return digits;
    }

    let (area, local) = digits.split_at(2);
    let block = if digits.len() == 11 { 5 } else { 4 };

    if local.len() <= block {
        format!("({area}) {local}")
    } else {
        let (prefix, suffix) = local.split_at(block);
        format!("({area}) {prefix}-{suffix}")
    }
}

/// Formats a CPF prefix, ending at `000.000.000-00`. Keeps at most 11
/// digits.
///
/// Dots appear after the third and sixth digits as soon as a digit follows
/// them; the hyphen appears once a tenth digit exists.
pub fn mask_cpf(input: &str) -> String {
    let digits = input.chars().filter(char::is_ascii_digit).take(11);

    let mut masked = String::with_capacity(14);
    for (i, digit) in digits.enumerate() {
        if i == 3 || i == 6 {
            masked.push('.');
        } else if i == 9 {
            masked.push('-');
        }
        masked.push(digit);
    }
    masked
}
