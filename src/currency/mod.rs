use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> Option<&'static str> {
        match self.as_str() {
            "USD" | "CAD" | "AUD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Formats an amount with en-US grouping and two decimals, e.g. `$12,345.60` or
/// `-CHF 4.00` for codes without a known symbol.
pub fn format_currency(amount: f64, code: &CurrencyCode) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let body = format!("{}.{:02}", whole, cents % 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match code.symbol() {
        Some(symbol) => format!("{sign}{symbol}{body}"),
        None => format!("{sign}{} {body}", code.as_str()),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd_with_grouping() {
        let usd = CurrencyCode::default();
        assert_eq!(format_currency(0.0, &usd), "$0.00");
        assert_eq!(format_currency(185.0, &usd), "$185.00");
        assert_eq!(format_currency(12345.6, &usd), "$12,345.60");
        assert_eq!(format_currency(1_000_000.0, &usd), "$1,000,000.00");
        assert_eq!(format_currency(-42.5, &usd), "-$42.50");
    }

    #[test]
    fn unknown_codes_use_prefix() {
        assert_eq!(format_currency(4.0, &CurrencyCode::new("chf")), "CHF 4.00");
    }
}
