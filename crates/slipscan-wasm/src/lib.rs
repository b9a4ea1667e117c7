//! WASM bindings for flower order slip parsing.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use slipscan_core::SlipParser;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse order slip text into a structured draft.
///
/// Takes pasted slip text and returns a draft object with every field the
/// text mentions. Fields the text does not mention are left out.
#[wasm_bindgen]
pub fn parse_order_text(text: &str) -> Result<JsValue, JsValue> {
    let draft = slipscan_core::parse_order_text(text);

    serde_wasm_bindgen::to_value(&draft).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Normalize a time expression to 24-hour HH:MM (e.g., "2-3pm" -> "14:00").
#[wasm_bindgen]
pub fn normalize_time(raw: &str) -> Option<String> {
    slipscan_core::slip::rules::normalize_time(raw)
}

/// Extract an item quantity from text (e.g., "2 dozen roses" -> 24).
#[wasm_bindgen]
pub fn extract_quantity(text: &str) -> Option<u32> {
    slipscan_core::slip::rules::extract_qty(text)
}

/// Parse a money amount from slip text (e.g., "TOTAL: 3,200" -> 3200).
#[wasm_bindgen]
pub fn parse_price(text: &str) -> f64 {
    slipscan_core::slip::rules::parse_price(text)
        .to_string()
        .parse()
        .unwrap_or(0.0)
}

/// Slip parser class for browser use.
#[wasm_bindgen]
pub struct SlipScanner {
    parser: SlipParser,
}

#[wasm_bindgen]
impl SlipScanner {
    /// Create a new slip scanner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: SlipParser::new(),
        }
    }

    /// Pin the year used for dates written without one.
    #[wasm_bindgen]
    pub fn set_reference_year(&mut self, year: i32) {
        self.parser = SlipParser::new().with_reference_year(year);
    }

    /// Parse slip text into a draft object.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        let draft = self.parser.parse(text);

        serde_wasm_bindgen::to_value(&draft).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for SlipScanner {
    fn default() -> Self {
        Self::new()
    }
}
