//! Lenient price recovery from slip lines.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Scrub a line down to a price.
///
/// Keeps digits and decimal points, then parses the longest numeric
/// prefix (a second point ends the number). Lines with nothing numeric
/// come back as zero rather than an error.
pub fn parse_price(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut prefix = String::new();
    let mut seen_point = false;
    for ch in cleaned.chars() {
        if ch == '.' {
            if seen_point {
                break;
            }
            seen_point = true;
        }
        prefix.push(ch);
    }

    let prefix = prefix.trim_end_matches('.');
    if prefix.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = if prefix.starts_with('.') {
        format!("0{}", prefix)
    } else {
        prefix.to_string()
    };

    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_price_with_label_and_grouping() {
        assert_eq!(parse_price("TOTAL: 3,200"), dec("3200"));
        assert_eq!(parse_price("Total: 3,200.50 php"), dec("3200.50"));
        assert_eq!(parse_price("DOWNPAYMENT: 1,000 gcash"), dec("1000"));
    }

    #[test]
    fn test_parse_price_stops_at_second_point() {
        assert_eq!(parse_price("1.234.50"), dec("1.234"));
    }

    #[test]
    fn test_parse_price_trailing_and_leading_points() {
        assert_eq!(parse_price("500."), dec("500"));
        assert_eq!(parse_price("php .50"), dec("0.50"));
    }

    #[test]
    fn test_parse_price_nothing_numeric() {
        assert_eq!(parse_price("PAID"), Decimal::ZERO);
        assert_eq!(parse_price(""), Decimal::ZERO);
        assert_eq!(parse_price("..."), Decimal::ZERO);
    }
}
