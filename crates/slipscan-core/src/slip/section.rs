//! Line-topic tracking across slip sections.

use crate::models::draft::{OrderDraft, OrderType};

use super::rules::patterns::{
    NOTES_HEADER, PICKUP_HEADER, RECIPIENT_HEADER, SECTION_RESET, SENDER_HEADER, SUMMARY_HEADER,
};

/// The topic governing interpretation of the current line.
///
/// "Name:" means the recipient under [`Section::Recipient`] and the
/// customer under [`Section::Sender`]; elsewhere it means nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Recipient,
    Sender,
    Summary,
    Notes,
}

/// End the summary block when a new labeled topic starts.
pub fn reset_on_new_topic(current: Section, lower: &str) -> Section {
    if current == Section::Summary && SECTION_RESET.is_match(lower) {
        Section::None
    } else {
        current
    }
}

/// Recognize a section header line.
///
/// Returns the section the header opens; header lines carry no field
/// content of their own, except an inline notes remainder which lands
/// in the draft immediately. Pickup headers also pin the order type.
pub fn detect_header(line: &str, lower: &str, draft: &mut OrderDraft) -> Option<Section> {
    if SUMMARY_HEADER.is_match(lower) {
        return Some(Section::Summary);
    }
    if RECIPIENT_HEADER.is_match(lower) {
        return Some(Section::Recipient);
    }
    if PICKUP_HEADER.is_match(lower) {
        draft.order_type = Some(OrderType::PickUp);
        return Some(Section::Recipient);
    }
    if SENDER_HEADER.is_match(lower) {
        return Some(Section::Sender);
    }
    if let Some(caps) = NOTES_HEADER.captures(line) {
        let content = caps[1].trim();
        if !content.is_empty() {
            draft.notes = Some(content.to_string());
        }
        return Some(Section::Notes);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(line: &str) -> (Option<Section>, OrderDraft) {
        let mut draft = OrderDraft::default();
        let section = detect_header(line, &line.to_lowercase(), &mut draft);
        (section, draft)
    }

    #[test]
    fn test_header_detection() {
        assert_eq!(header_for("ORDER SUMMARY").0, Some(Section::Summary));
        assert_eq!(header_for("Delivered To:").0, Some(Section::Recipient));
        assert_eq!(header_for("Recipient Details").0, Some(Section::Recipient));
        assert_eq!(header_for("Ordered By:").0, Some(Section::Sender));
        assert_eq!(header_for("Customer Info").0, Some(Section::Sender));
        assert_eq!(header_for("Name: Ana").0, None);
    }

    #[test]
    fn test_pickup_header_pins_order_type() {
        let (section, draft) = header_for("(Pick up by Ana)");
        assert_eq!(section, Some(Section::Recipient));
        assert_eq!(draft.order_type, Some(OrderType::PickUp));

        let (section, draft) = header_for("Pickup by Ana");
        assert_eq!(section, Some(Section::Recipient));
        assert_eq!(draft.order_type, Some(OrderType::PickUp));
    }

    #[test]
    fn test_notes_header_captures_inline_content() {
        let (section, draft) = header_for("Notes: call first");
        assert_eq!(section, Some(Section::Notes));
        assert_eq!(draft.notes.as_deref(), Some("call first"));

        let (section, draft) = header_for("NB.");
        assert_eq!(section, Some(Section::Notes));
        assert_eq!(draft.notes, None);

        // "notes" without its separator is not a header
        assert_eq!(header_for("Notes for the driver").0, None);
    }

    #[test]
    fn test_summary_ends_on_new_topic() {
        assert_eq!(reset_on_new_topic(Section::Summary, "total: 3200"), Section::None);
        assert_eq!(reset_on_new_topic(Section::Summary, "gsh 500"), Section::None);
        assert_eq!(
            reset_on_new_topic(Section::Summary, "2 dozen roses"),
            Section::Summary
        );
        // Only the summary block resets
        assert_eq!(
            reset_on_new_topic(Section::Recipient, "total: 3200"),
            Section::Recipient
        );
    }
}
