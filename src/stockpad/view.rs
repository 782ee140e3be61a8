//! # View Regions
//!
//! Exactly one of the list, the add form, or the edit form is on screen.
//! The floating "add" trigger shows only alongside the list.
//!
//! ```text
//!            show_add_form             begin_edit(id)
//!   Adding <─────────────── List ───────────────> Editing(id)
//!      └───── show_list ────>  <──── show_list ─────┘
//! ```
//!
//! The two forms never switch directly into each other.

use crate::error::{Result, StockError};
use crate::model::ProductId;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewRegion {
    #[default]
    List,
    Adding,
    Editing(ProductId),
}

impl fmt::Display for ViewRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewRegion::List => write!(f, "product list"),
            ViewRegion::Adding => write!(f, "add form"),
            ViewRegion::Editing(id) => write!(f, "edit form ({})", id),
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewSwitcher {
    current: ViewRegion,
}

impl ViewSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewRegion {
        self.current
    }

    pub fn show_add_form(&mut self) -> Result<()> {
        self.transition(ViewRegion::Adding)
    }

    pub fn begin_edit(&mut self, id: ProductId) -> Result<()> {
        self.transition(ViewRegion::Editing(id))
    }

    /// Every region may return to the list.
    pub fn show_list(&mut self) {
        if self.current != ViewRegion::List {
            debug!(from = %self.current, "showing product list");
        }
        self.current = ViewRegion::List;
    }

    /// Whether `region` is the one on screen. Any `Editing` matches an
    /// `Editing` query regardless of id.
    pub fn is_visible(&self, region: ViewRegion) -> bool {
        match (self.current, region) {
            (ViewRegion::Editing(_), ViewRegion::Editing(_)) => true,
            (current, region) => current == region,
        }
    }

    pub fn add_trigger_visible(&self) -> bool {
        self.current == ViewRegion::List
    }

    fn transition(&mut self, to: ViewRegion) -> Result<()> {
        if self.current != ViewRegion::List {
            return Err(StockError::InvalidTransition {
                from: self.current,
                to,
            });
        }
        debug!(%to, "switching view");
        self.current = to;
        Ok(())
    }
}
