//! Rule-based field extractors for order slips.

pub mod dates;
pub mod money;
pub mod patterns;
pub mod quantity;
pub mod times;

pub use dates::parse_date;
pub use money::parse_price;
pub use patterns::*;
pub use quantity::extract_qty;
pub use times::normalize_time;
