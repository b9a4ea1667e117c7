//! Line-oriented order slip parser.

use chrono::{Datelike, Local};
use tracing::{debug, trace};

use crate::models::draft::{OrderDraft, OrderType};

use super::finance::FinanceLedger;
use super::flowers::tally_flowers;
use super::rules::dates::parse_date;
use super::rules::patterns::{
    ADDRESS_LINE, CONTACT_LINE, DATE_LINE, MESSAGE_LINE, NAME_LINE, ORDER_CODE, PICKUP_MARKER,
    TIME_LINE,
};
use super::rules::times::normalize_time;
use super::section::{self, Section};

/// Parser turning pasted slip text into an [`OrderDraft`].
///
/// Parsing never fails; fields the text does not mention are simply
/// left empty. The same input always yields the same draft.
#[derive(Debug, Clone)]
pub struct SlipParser {
    reference_year: Option<i32>,
}

impl SlipParser {
    pub fn new() -> Self {
        Self {
            reference_year: None,
        }
    }

    /// Pin the year used for dates written without one, e.g. "Dec 25".
    ///
    /// Defaults to the current year.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Parse free-form slip text into a draft.
    pub fn parse(&self, text: &str) -> OrderDraft {
        debug!("parsing slip text of {} characters", text.len());

        let mut draft = OrderDraft::default();
        let mut ledger = FinanceLedger::default();
        let mut current = Section::default();

        // A pickup marker anywhere in the slip decides the order type
        draft.order_type = Some(if PICKUP_MARKER.is_match(text) {
            OrderType::PickUp
        } else {
            OrderType::Delivery
        });

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let lower = line.to_lowercase();

            current = section::reset_on_new_topic(current, &lower);

            if let Some(next) = section::detect_header(line, &lower, &mut draft) {
                trace!("header {:?} opened section {:?}", line, next);
                current = next;
                continue;
            }

            match current {
                Section::Notes => {
                    append_block(&mut draft.notes, line);
                    continue;
                }
                Section::Summary => {
                    append_block(&mut draft.order_summary, line);
                    if draft.code.is_none() {
                        if let Some(caps) = ORDER_CODE.captures(line) {
                            draft.code = Some(caps[1].to_string());
                        }
                    }
                }
                _ => {}
            }

            self.scan_fields(line, current, &mut draft);
            ledger.observe(line, &lower);
        }

        // The summary block, when present, is the authoritative item list
        let flower_text = draft.order_summary.as_deref().unwrap_or(text);
        let flowers = tally_flowers(flower_text);
        if !flowers.is_empty() {
            draft.flowers = Some(flowers);
        }

        ledger.settle(&mut draft);

        debug!(
            "extracted draft: type={:?}, total={:?}, status={:?}",
            draft.order_type, draft.total, draft.status
        );

        draft
    }

    fn scan_fields(&self, line: &str, current: Section, draft: &mut OrderDraft) {
        if let Some(caps) = DATE_LINE.captures(line) {
            if let Some(date) = parse_date(caps[1].trim(), self.reference_year()) {
                draft.target_date = Some(date);
            }
        }

        if let Some(caps) = TIME_LINE.captures(line) {
            if let Some(time) = normalize_time(&caps[1]) {
                draft.delivery_time = Some(time);
            }
        }

        if let Some(caps) = NAME_LINE.captures(line) {
            let value = caps[1].trim();
            if !value.is_empty() {
                match current {
                    Section::Recipient => {
                        draft.delivered_to = Some(value.to_string());
                        // On pickups the person picking up is also the customer
                        if draft.order_type == Some(OrderType::PickUp) {
                            draft.ordered_by = Some(value.to_string());
                        }
                    }
                    Section::Sender => draft.ordered_by = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        if let Some(caps) = CONTACT_LINE.captures(line) {
            let digits: String = caps[1].chars().filter(char::is_ascii_digit).collect();
            if !digits.is_empty() {
                match current {
                    Section::Sender => draft.contact_number = Some(digits),
                    Section::Recipient => {
                        // The customer's number wins if a later sender
                        // section provides one
                        if draft.contact_number.is_none() {
                            draft.contact_number = Some(digits.clone());
                        }
                        if draft.order_type == Some(OrderType::Delivery) {
                            if let Some(name) = draft.delivered_to.take() {
                                draft.delivered_to = Some(if name.contains(&digits) {
                                    name
                                } else {
                                    format!("{} Contact No. {}", name, digits)
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        if let Some(caps) = ADDRESS_LINE.captures(line) {
            let value = caps[1].trim();
            if !value.is_empty() {
                draft.address = Some(value.to_string());
            }
        }

        if let Some(caps) = MESSAGE_LINE.captures(line) {
            let value = caps[1].trim();
            if !value.is_empty() {
                draft.card_message = Some(value.to_string());
            }
        }
    }
}

impl Default for SlipParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse slip text with the default parser settings.
pub fn parse_order_text(text: &str) -> OrderDraft {
    SlipParser::new().parse(text)
}

fn append_block(slot: &mut Option<String>, line: &str) {
    match slot {
        Some(block) => {
            block.push('\n');
            block.push_str(line);
        }
        None => *slot = Some(line.to_string()),
    }
}
