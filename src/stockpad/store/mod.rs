//! # Persistence Slot
//!
//! The whole product collection lives in one named slot, written wholesale
//! after every mutation and read once at startup. [`ProductSlot`] abstracts
//! where that slot lives:
//!
//! - [`fs::FileSlot`]: production storage, a JSON file in the data directory
//! - [`memory::MemorySlot`]: in-memory text, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── inventoryApp_products.json   # JSON array of product records
//! └── config.json                  # Display settings
//! ```
//!
//! ## Load Policy
//!
//! An absent slot is an empty inventory, and so is one holding no text or
//! only whitespace. Any other content that does not parse is reported as
//! [`StockError::CorruptSlot`] and left as-is on disk; nothing is saved over
//! it.
//!
//! [`StockError::CorruptSlot`]: crate::error::StockError::CorruptSlot

use crate::error::{Result, StockError};
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Name of the single slot holding the serialized collection.
pub const SLOT_NAME: &str = "inventoryApp_products";

pub trait ProductSlot {
    /// Replace the slot contents with the full collection.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Read the collection back, or an empty one if the slot was never written.
    fn load(&self) -> Result<Vec<Product>>;

    /// Where the slot lives, for messages and the `path` command.
    fn location(&self) -> String;
}

pub(crate) fn encode(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).map_err(StockError::Serialization)
}

pub(crate) fn decode(text: &str, location: impl Into<String>) -> Result<Vec<Product>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(|e| StockError::CorruptSlot {
        location: location.into(),
        message: e.to_string(),
    })
}
