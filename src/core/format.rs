pub const CURRENCY_SYMBOL: &str = "₹";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, 2)
}

/// Renders amounts using the Indian crore/lakh tiers:
/// `₹1.25 Cr`, `₹3.40 L`, otherwise `₹12,345.67`.
pub fn format_currency_with(amount: f64, decimal_places: usize) -> String {
    if amount >= CRORE {
        format!("{CURRENCY_SYMBOL}{:.2} Cr", amount / CRORE)
    } else if amount >= LAKH {
        format!("{CURRENCY_SYMBOL}{:.2} L", amount / LAKH)
    } else {
        format!(
            "{CURRENCY_SYMBOL}{}",
            group_thousands(amount, decimal_places)
        )
    }
}

pub fn format_percentage(decimal_value: f64, decimal_places: usize) -> String {
    format!("{:.*}%", decimal_places, decimal_value * 100.0)
}

pub fn round_to(value: f64, decimal_places: i32) -> f64 {
    let factor = 10_f64.powi(decimal_places);
    (value * factor).round() / factor
}

fn group_thousands(amount: f64, decimal_places: usize) -> String {
    let rendered = format!("{:.*}", decimal_places, amount.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let digits = integer.as_bytes();
    let mut grouped = String::with_capacity(rendered.len() + digits.len() / 3 + 1);
    if amount < 0.0 && rendered.bytes().any(|b| b != b'0' && b != b'.') {
        grouped.push('-');
    }
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
