//! Quantity recovery from short item phrases.

use super::patterns::{BARE_NUMBER, QTY_DOZEN, QTY_PRICE_DASH, QTY_UNIT};

/// Extract an item count from a phrase like "2 doz roses" or "500 - 3 sunflower".
///
/// Tried in order: dozen multiples, explicit piece/stem counts, a leading
/// price followed by the real quantity, then any bare number small enough
/// to not be a price. `None` means the phrase named no usable count.
pub fn extract_qty(text: &str) -> Option<u32> {
    if let Some(caps) = QTY_DOZEN.captures(text) {
        return caps[1].parse::<u32>().ok().and_then(|n| n.checked_mul(12));
    }

    if let Some(caps) = QTY_UNIT.captures(text) {
        return caps[1].parse().ok();
    }

    if let Some(caps) = QTY_PRICE_DASH.captures(text) {
        return caps[2].parse().ok();
    }

    // Numbers of 100 or more are prices, not counts
    BARE_NUMBER
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .find(|&n| n < 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dozen_multiplies() {
        assert_eq!(extract_qty("2 doz roses"), Some(24));
        assert_eq!(extract_qty("1 dozen local red"), Some(12));
        assert_eq!(extract_qty("3 dozens"), Some(36));
    }

    #[test]
    fn test_unit_counts() {
        assert_eq!(extract_qty("3 pcs sunflower"), Some(3));
        assert_eq!(extract_qty("1 pc stargazer"), Some(1));
        assert_eq!(extract_qty("6 stems tulips"), Some(6));
        assert_eq!(extract_qty("500 - 3 pcs"), Some(3));
    }

    #[test]
    fn test_price_prefix_skipped() {
        assert_eq!(extract_qty("500 - 3 sunflower"), Some(3));
        assert_eq!(extract_qty("1500 - 2 carnation"), Some(2));
    }

    #[test]
    fn test_loose_number_guarded_against_prices() {
        assert_eq!(extract_qty("3 local roses"), Some(3));
        assert_eq!(extract_qty("php500 2 red"), Some(2));
        assert_eq!(extract_qty("500 roses"), None);
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract_qty("sunflower"), None);
        assert_eq!(extract_qty(""), None);
    }
}
