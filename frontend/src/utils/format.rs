//! Brazilian Portuguese display formatting.

use chrono::{DateTime, NaiveDate};

/// Formats an ISO date (`2024-03-07`) or RFC 3339 timestamp as
/// `DD/MM/YYYY`. Unparseable input is returned unchanged.
pub fn format_date_br(input: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return datetime.format("%d/%m/%Y").to_string();
    }
    input.to_string()
}

/// Formats an amount in reais: `R$ 1.234,56`, minus sign in front of the
/// currency symbol. Cents are rounded half-up.
pub fn format_currency_brl(value: f64) -> String {
    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents:02}")
}
