//! Order draft models matching the order sheet layout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A partially filled order recovered from pasted slip text.
///
/// Every field is optional; absent fields are omitted from serialized
/// output so consumers only merge what was actually found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Date the order is due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    /// Delivery or pickup time in canonical 24-hour "HH:MM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,

    /// How the order leaves the shop.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,

    /// Payment status derived from total and amount paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,

    /// Recipient name, possibly with an appended contact number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_to: Option<String>,

    /// Customer who placed the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<String>,

    /// Contact number, digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,

    /// Delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Message for the card included with the flowers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_message: Option<String>,

    /// Per-category flower counts; present only when something was counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flowers: Option<FlowerCounts>,

    /// Short order code (e.g. "R01") found in the summary block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Free-form extras; never filled by the parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others: Option<String>,

    /// Raw lines captured from the order summary block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_summary: Option<String>,

    /// Internal notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Delivery fee, kept out of the flower tally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,

    /// Order total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,

    /// Amount already paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Decimal>,

    /// Amount still owed, floored at zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
}

/// How the order leaves the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Brought to the recipient's address.
    Delivery,
    /// Collected at the shop; the collector is both parties.
    PickUp,
}

/// Payment status derived during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Nothing left to pay.
    Paid,
    /// No payment recorded.
    Unpaid,
    /// Partially paid.
    Downpayment,
}

/// The closed set of flower inventory buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowerCategory {
    LocalRed,
    LocalPink,
    LocalWhite,
    ImportedRed,
    TwoTonePink,
    ChinaPink,
    Sunflower,
    Carnation,
    Tulips,
    Stargazer,
}

/// Per-category flower counts.
///
/// Categories are fixed columns on the order sheet; untouched ones stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowerCounts {
    #[serde(default)]
    pub local_red: u32,
    #[serde(default)]
    pub local_pink: u32,
    #[serde(default)]
    pub local_white: u32,
    #[serde(default)]
    pub imported_red: u32,
    #[serde(default)]
    pub two_tone_pink: u32,
    #[serde(default)]
    pub china_pink: u32,
    #[serde(default)]
    pub sunflower: u32,
    #[serde(default)]
    pub carnation: u32,
    #[serde(default)]
    pub tulips: u32,
    #[serde(default)]
    pub stargazer: u32,
}

impl FlowerCounts {
    /// Check whether any category was counted.
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, count)| *count == 0)
    }

    /// Add to one category's count.
    pub fn add(&mut self, category: FlowerCategory, count: u32) {
        let slot = match category {
            FlowerCategory::LocalRed => &mut self.local_red,
            FlowerCategory::LocalPink => &mut self.local_pink,
            FlowerCategory::LocalWhite => &mut self.local_white,
            FlowerCategory::ImportedRed => &mut self.imported_red,
            FlowerCategory::TwoTonePink => &mut self.two_tone_pink,
            FlowerCategory::ChinaPink => &mut self.china_pink,
            FlowerCategory::Sunflower => &mut self.sunflower,
            FlowerCategory::Carnation => &mut self.carnation,
            FlowerCategory::Tulips => &mut self.tulips,
            FlowerCategory::Stargazer => &mut self.stargazer,
        };
        *slot = slot.saturating_add(count);
    }

    /// All categories with their counts, in sheet column order.
    pub fn entries(&self) -> [(&'static str, u32); 10] {
        [
            ("localRed", self.local_red),
            ("localPink", self.local_pink),
            ("localWhite", self.local_white),
            ("importedRed", self.imported_red),
            ("twoTonePink", self.two_tone_pink),
            ("chinaPink", self.china_pink),
            ("sunflower", self.sunflower),
            ("carnation", self.carnation),
            ("tulips", self.tulips),
            ("stargazer", self.stargazer),
        ]
    }
}
