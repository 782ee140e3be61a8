use super::{decode, encode, ProductSlot};
use crate::error::Result;
use crate::model::Product;

/// Slot kept in memory as serialized text, so tests go through the same
/// encoding as the file slot.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    text: Option<String>,
    saves: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `text`, well-formed or not.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            saves: 0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// How many times `save` has run.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ProductSlot for MemorySlot {
    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.text = Some(encode(products)?);
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Product>> {
        match &self.text {
            Some(text) => decode(text, self.location()),
            None => Ok(Vec::new()),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ProductDraft, ProductId};

    pub struct SlotFixture {
        pub slot: MemorySlot,
        products: Vec<Product>,
    }

    impl Default for SlotFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SlotFixture {
        pub fn new() -> Self {
            Self {
                slot: MemorySlot::new(),
                products: Vec::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = ProductDraft::new(format!("Product {}", i + 1), 1.0 + i as f64, 1)
                    .with_description(format!("Description {}", i + 1));
                self = self.with_draft(draft);
            }
            self
        }

        pub fn with_product(self, name: &str, price: f64, quantity: u32) -> Self {
            self.with_draft(ProductDraft::new(name, price, quantity))
        }

        pub fn with_draft(mut self, draft: ProductDraft) -> Self {
            let id = ProductId(1_000 + self.products.len() as i64);
            self.products.push(Product::from_draft(id, draft));
            self
        }

        /// Writes the seeded products into the slot without counting as a save.
        pub fn build(self) -> MemorySlot {
            let mut slot = self.slot;
            slot.text = Some(encode(&self.products).expect("fixture products encode"));
            slot
        }
    }
}
