//! Data models for order drafts.

pub mod draft;

pub use draft::{FlowerCategory, FlowerCounts, OrderDraft, OrderType, PaymentStatus};
