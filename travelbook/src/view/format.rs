//! Display formatting for prices and timestamps.

use chrono::NaiveDateTime;

/// Format an amount in rupees with Indian digit grouping, e.g. `₹1,00,000`.
///
/// Fractions are rounded to paise and trailing zeros dropped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_price(amount: f64) -> String {
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = paise / 100;
    let fraction = paise % 100;

    let mut out = String::from("₹");
    if amount < 0.0 && paise > 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if fraction != 0 {
        let fraction = format!("{fraction:02}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// Last three digits, then groups of two: 12,34,567.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `05 Jan 2025, 02:30 pm`.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d %b %Y, %I:%M %P").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(0.0), "₹0");
        assert_eq!(format_price(999.0), "₹999");
        assert_eq!(format_price(1000.0), "₹1,000");
        assert_eq!(format_price(100_000.0), "₹1,00,000");
        assert_eq!(format_price(1_234_567.0), "₹12,34,567");
    }

    #[test]
    fn test_format_price_fraction() {
        assert_eq!(format_price(1234.5), "₹1,234.5");
        assert_eq!(format_price(2450.75), "₹2,450.75");
        assert_eq!(format_price(10.004), "₹10");
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDateTime::parse_from_str("2025-01-05 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_datetime(&dt), "05 Jan 2025, 02:30 pm");
    }
}
