//! Display formatting for money, weights and percentages

/// Currency prefix used across every report surface
pub const CURRENCY: &str = "R$";

/// Format an amount with two decimals and comma thousands separators
///
/// `224750.0` becomes `"R$ 224,750.00"`, `-15000.0` becomes `"R$ -15,000.00"`.
pub fn currency(amount: f64) -> String {
    format!("{} {}", CURRENCY, grouped(amount, 2))
}

/// Weight in kg with one decimal, e.g. `"435.0 kg"`
pub fn kilograms(weight: f64) -> String {
    format!("{:.1} kg", weight)
}

/// Weight in arrobas with one decimal, e.g. `"14.5 @"`
pub fn arrobas(weight: f64) -> String {
    format!("{:.1} @", weight)
}

/// Percentage with one decimal, e.g. `"14.5%"`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Fixed-point number with comma thousands separators
pub fn grouped(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    // "-0.00" would be noise
    if value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(224_750.0), "R$ 224,750.00");
        assert_eq!(currency(196_250.0), "R$ 196,250.00");
        assert_eq!(currency(999.999), "R$ 1,000.00");
        assert_eq!(currency(12.5), "R$ 12.50");
        assert_eq!(currency(1_234_567.891), "R$ 1,234,567.89");
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(currency(-15_000.0), "R$ -15,000.00");
        assert_eq!(currency(-0.001), "R$ 0.00");
    }

    #[test]
    fn test_units() {
        assert_eq!(kilograms(435.0), "435.0 kg");
        assert_eq!(arrobas(14.5), "14.5 @");
        assert_eq!(percent(14.522292993630574), "14.5%");
        assert_eq!(grouped(1000.0, 0), "1,000");
    }
}
