//! Core library for flower order slip parsing.
//!
//! Turns pasted order text into a structured draft through:
//!
//! - Section-aware line classification (recipient, sender, summary, notes)
//! - Labeled field extraction (dates, times, names, contacts, addresses)
//! - Quantity and flower category aggregation
//! - Financial reconciliation (total, payments, balance, status)

pub mod models;
pub mod slip;

pub use models::draft::{FlowerCategory, FlowerCounts, OrderDraft, OrderType, PaymentStatus};
pub use slip::{parse_order_text, SlipParser};
