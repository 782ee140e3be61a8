//! # Product Store
//!
//! The in-memory, insertion-ordered product collection plus the edit cursor.
//! This is the only owner of the collection: persistence reads from it, the
//! renderer projects it, and every mutation goes through the methods here.
//!
//! Missing ids are not errors at this level. `update` and `remove` report
//! them through `Option` and leave the collection untouched; callers decide
//! how to surface that.

use crate::model::{Product, ProductDraft, ProductId};
use chrono::Utc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    edit_cursor: Option<ProductId>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            edit_cursor: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn add(&mut self, draft: ProductDraft) -> &Product {
        let id = self.next_id(Utc::now().timestamp_millis());
        debug!(%id, name = %draft.name, "adding product");
        self.products.push(Product::from_draft(id, draft));
        &self.products[self.products.len() - 1]
    }

    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> Option<&Product> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "update target missing");
            return None;
        };
        product.apply(draft);
        debug!(%id, "updated product");
        Some(&*product)
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let position = self.products.iter().position(|p| p.id == id)?;
        debug!(%id, "removing product");
        Some(self.products.remove(position))
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn edit_cursor(&self) -> Option<ProductId> {
        self.edit_cursor
    }

    pub fn set_edit_cursor(&mut self, id: ProductId) {
        self.edit_cursor = Some(id);
    }

    pub fn clear_edit_cursor(&mut self) {
        self.edit_cursor = None;
    }

    /// Picks `now_millis` unless an existing id already claims it (or a later
    /// instant), in which case the id lands just past the current maximum.
    /// When the maximum is `i64::MAX` the first free id from `now_millis`
    /// onwards (wrapping to the bottom of the range) is used instead.
    fn next_id(&self, now_millis: i64) -> ProductId {
        match self.products.iter().map(|p| p.id.0).max() {
            Some(max) if max >= now_millis => match max.checked_add(1) {
                Some(next) => ProductId(next),
                None => self.first_free_id(now_millis),
            },
            _ => ProductId(now_millis),
        }
    }

    fn first_free_id(&self, from: i64) -> ProductId {
        let taken = |id: i64| self.products.iter().any(|p| p.id.0 == id);
        (from..=i64::MAX)
            .chain(i64::MIN..from)
            .find(|id| !taken(*id))
            .map(ProductId)
            .unwrap_or(ProductId(from))
    }
}
