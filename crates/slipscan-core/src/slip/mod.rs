//! Order slip parsing module.

mod finance;
mod flowers;
mod parser;
pub mod rules;
mod section;

pub use parser::{parse_order_text, SlipParser};
