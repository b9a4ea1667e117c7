//! Flower item aggregation over slip text.

use crate::models::draft::{FlowerCategory, FlowerCounts};

use super::rules::patterns::PAREN_BREAKDOWN;
use super::rules::quantity::extract_qty;

/// Tally every flower category mentioned in the given text.
///
/// Untouched categories stay zero; the caller decides whether an
/// all-zero tally is worth keeping.
pub fn tally_flowers(text: &str) -> FlowerCounts {
    let mut counts = FlowerCounts::default();
    let lower = text.to_lowercase();

    for segment in split_segments(&lower) {
        // Fee lines (e.g. "delivery fee: 150") never describe flowers
        if segment.contains("fee") {
            continue;
        }
        tally_segment(segment, &mut counts);
    }

    counts
}

/// Split item text into top-level segments.
///
/// Newlines always split; commas split only outside parentheses, so a
/// breakdown like "(2 red, 1 pink)" stays attached to its item.
fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(&text[start..index]);
                start = index + 1;
            }
            '\n' => {
                segments.push(&text[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(&text[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn tally_segment(segment: &str, counts: &mut FlowerCounts) {
    // No number at all still counts one item ("sunflower" is one sunflower)
    let main_qty = extract_qty(segment).unwrap_or(1);

    if let Some(caps) = PAREN_BREAKDOWN.captures(segment) {
        let parts: Vec<&str> = caps[1].split([',', '&', '+']).map(str::trim).collect();
        let mut matched_any = false;

        for part in &parts {
            // A lone unnumbered part inherits the main quantity; listed
            // parts without numbers count one each
            let count = match extract_qty(part) {
                Some(count) => count,
                None if parts.len() == 1 => main_qty,
                None => 1,
            };

            if let Some(category) = classify_part(part, segment) {
                counts.add(category, count);
                matched_any = true;
            }
        }

        // A matched breakdown fully accounts for its segment
        if matched_any {
            return;
        }
    }

    if let Some(category) = classify_segment(segment) {
        counts.add(category, main_qty);
    }
}

/// Classify one part of a parenthesized breakdown.
///
/// Rose colors default to the local bucket unless the surrounding
/// segment marks the item as imported.
fn classify_part(part: &str, segment: &str) -> Option<FlowerCategory> {
    if part.contains("two") || part.contains("tone") {
        Some(FlowerCategory::TwoTonePink)
    } else if part.contains("china") || part.contains("fuschia") {
        Some(FlowerCategory::ChinaPink)
    } else if segment.contains("imported") || segment.contains("ecuador") {
        if part.contains("red") {
            Some(FlowerCategory::ImportedRed)
        } else {
            None
        }
    } else if part.contains("red") {
        Some(FlowerCategory::LocalRed)
    } else if part.contains("white") {
        Some(FlowerCategory::LocalWhite)
    } else if part.contains("pink") || part.contains("old") {
        Some(FlowerCategory::LocalPink)
    } else {
        None
    }
}

/// Classify a whole segment by its keywords.
fn classify_segment(segment: &str) -> Option<FlowerCategory> {
    if segment.contains("two") || segment.contains("tone") {
        return Some(FlowerCategory::TwoTonePink);
    }
    if segment.contains("china") || segment.contains("fuschia") {
        return Some(FlowerCategory::ChinaPink);
    }
    if segment.contains("sun") {
        return Some(FlowerCategory::Sunflower);
    }
    if segment.contains("carnation") {
        return Some(FlowerCategory::Carnation);
    }
    if segment.contains("star") {
        return Some(FlowerCategory::Stargazer);
    }
    if segment.contains("tulip") {
        return Some(FlowerCategory::Tulips);
    }

    let imported = segment.contains("imported") || segment.contains("ecuador");
    let local = segment.contains("local")
        || (!imported && (segment.contains("rose") || segment.contains("flower")));

    if imported {
        // Red is the imported default when no color is given
        Some(FlowerCategory::ImportedRed)
    } else if local {
        if segment.contains("red") {
            Some(FlowerCategory::LocalRed)
        } else if segment.contains("white") {
            Some(FlowerCategory::LocalWhite)
        } else if segment.contains("pink") || segment.contains("old") {
            Some(FlowerCategory::LocalPink)
        } else {
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_keeps_parenthesized_commas_together() {
        assert_eq!(split_segments("a (b, c), d"), vec!["a (b, c)", "d"]);
        assert_eq!(split_segments("a, b\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_segments("a (b\nc, d)"), vec!["a (b", "c, d)"]);
    }

    #[test]
    fn test_split_survives_unbalanced_parens() {
        assert_eq!(split_segments("a), b"), vec!["a)", "b"]);
        assert_eq!(split_segments(""), Vec::<&str>::new());
    }

    #[test]
    fn test_breakdown_overrides_outer_keywords() {
        let counts = tally_flowers("3 local roses (1 red, 2 pink)");
        assert_eq!(counts.local_red, 1);
        assert_eq!(counts.local_pink, 2);
        assert_eq!(counts.local_white, 0);
    }

    #[test]
    fn test_single_part_breakdown_inherits_main_quantity() {
        let counts = tally_flowers("6 local roses (white)");
        assert_eq!(counts.local_white, 6);
        assert_eq!(counts.local_red, 0);
    }

    #[test]
    fn test_multi_part_breakdown_defaults_each_to_one() {
        let counts = tally_flowers("6 local roses (red & white)");
        assert_eq!(counts.local_red, 1);
        assert_eq!(counts.local_white, 1);
    }

    #[test]
    fn test_imported_segment_breakdown_only_counts_red() {
        let counts = tally_flowers("2 dozen imported roses (12 red, 12 white)");
        assert_eq!(counts.imported_red, 12);
        assert_eq!(counts.local_white, 0);
        assert_eq!(counts.local_red, 0);
    }

    #[test]
    fn test_unmatched_breakdown_falls_back_to_segment() {
        let counts = tally_flowers("3 sunflowers (wrapped)");
        assert_eq!(counts.sunflower, 3);
    }

    #[test]
    fn test_outer_keyword_ladder() {
        let counts = tally_flowers(
            "2 two tone\n1 china pink\n3 sunflower\n4 carnation\n5 stargazer\n6 tulips",
        );
        assert_eq!(counts.two_tone_pink, 2);
        assert_eq!(counts.china_pink, 1);
        assert_eq!(counts.sunflower, 3);
        assert_eq!(counts.carnation, 4);
        assert_eq!(counts.stargazer, 5);
        assert_eq!(counts.tulips, 6);
    }

    #[test]
    fn test_imported_defaults_to_red() {
        let counts = tally_flowers("1 dozen ecuadorian roses");
        assert_eq!(counts.imported_red, 12);

        let counts = tally_flowers("5 imported white roses");
        assert_eq!(counts.imported_red, 5);
    }

    #[test]
    fn test_local_without_color_counts_nothing() {
        let counts = tally_flowers("2 local roses");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_bare_item_counts_one() {
        let counts = tally_flowers("sunflower");
        assert_eq!(counts.sunflower, 1);
    }

    #[test]
    fn test_dozen_quantities() {
        let counts = tally_flowers("2 doz local red roses");
        assert_eq!(counts.local_red, 24);
    }

    #[test]
    fn test_fee_lines_are_ignored() {
        let counts = tally_flowers("3 red roses\ndelivery fee: 150");
        assert_eq!(counts.local_red, 3);
        assert_eq!(counts.entries().iter().map(|(_, n)| n).sum::<u32>(), 3);
    }
}
