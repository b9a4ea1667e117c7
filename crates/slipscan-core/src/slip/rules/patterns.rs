//! Common regex patterns for order slip extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Section headers
    pub static ref SUMMARY_HEADER: Regex = Regex::new(
        r"(?i)^order summary"
    ).unwrap();

    pub static ref RECIPIENT_HEADER: Regex = Regex::new(
        r"(?i)delivered to|recipient"
    ).unwrap();

    pub static ref PICKUP_HEADER: Regex = Regex::new(
        r"(?i)^\(?pick\s*up\s*by"
    ).unwrap();

    pub static ref SENDER_HEADER: Regex = Regex::new(
        r"(?i)ordered by|customer"
    ).unwrap();

    pub static ref NOTES_HEADER: Regex = Regex::new(
        r"(?i)^(?:notes|ps|nb|internal notes)[:.]\s*(.*)"
    ).unwrap();

    // A new labeled topic ends the summary block
    pub static ref SECTION_RESET: Regex = Regex::new(
        r"(?i)^(?:total|down|gsh|payment|date|time|name|address|contact)"
    ).unwrap();

    // Pickup marker anywhere in the text
    pub static ref PICKUP_MARKER: Regex = Regex::new(
        r"(?i)pick\s*up"
    ).unwrap();

    // Labeled field lines
    pub static ref DATE_LINE: Regex = Regex::new(
        r"(?i)^(?:DATE|TARGET DATE)(?:.*:)?\s*(.*)"
    ).unwrap();

    pub static ref TIME_LINE: Regex = Regex::new(
        r"(?i)^(?:TIME|DELIVERY TIME)\s*[:.]?\s*(.*)"
    ).unwrap();

    pub static ref NAME_LINE: Regex = Regex::new(
        r"(?i)^Name\s*[:.]\s*(.*)"
    ).unwrap();

    pub static ref CONTACT_LINE: Regex = Regex::new(
        r"(?i)^(?:Contact|Mobile|Cp|Phone)\s*(?:No|Number|#)?\.?\s*[:.]?\s*([0-9\s-]+)"
    ).unwrap();

    pub static ref ADDRESS_LINE: Regex = Regex::new(
        r"(?i)^(?:Complete Address|Address|Location|Loc|Landmark)\s*[:.]\s*(.*)"
    ).unwrap();

    pub static ref MESSAGE_LINE: Regex = Regex::new(
        r"(?i)^(?:Short greetings|Message|Card|Greetings)\s*[:.]\s*(.*)"
    ).unwrap();

    // Order codes like "R01" in summary lines (case-sensitive)
    pub static ref ORDER_CODE: Regex = Regex::new(
        r"\b([A-Z]{1,2}\d{1,2})\b"
    ).unwrap();

    // Quantity patterns
    pub static ref QTY_DOZEN: Regex = Regex::new(
        r"(?i)\b(\d+)\s*(?:doz|dozen|dozens)\b"
    ).unwrap();

    pub static ref QTY_UNIT: Regex = Regex::new(
        r"(?i)\b(\d+)\s*(?:pcs?|stems?)\b"
    ).unwrap();

    // Price prefix followed by the real quantity, e.g. "500 - 3 sunflower"
    pub static ref QTY_PRICE_DASH: Regex = Regex::new(
        r"^\s*(\d+)[\s-]+(\d+)"
    ).unwrap();

    pub static ref BARE_NUMBER: Regex = Regex::new(
        r"\b(\d+)\b"
    ).unwrap();

    // Time expressions: "2:30", "2:30pm", "2:30-3:00pm", "2-3pm"
    pub static ref TIME_RANGE: Regex = Regex::new(
        r"^(\d{1,2}(?:[:.]\d{2})?)(?:(?:-|to)(\d{1,2}(?:[:.]\d{2})?))?([ap]m)?$"
    ).unwrap();

    pub static ref TIME_LOOSE: Regex = Regex::new(
        r"(\d{1,2}(?:[:.]\d{2})?)([ap]m)?"
    ).unwrap();

    // Parenthesized color breakdown inside an item segment
    pub static ref PAREN_BREAKDOWN: Regex = Regex::new(
        r"\((.*?)\)"
    ).unwrap();

    // Four-digit year anywhere in a date expression
    pub static ref FOUR_DIGIT_YEAR: Regex = Regex::new(
        r"\d{4}"
    ).unwrap();
}
