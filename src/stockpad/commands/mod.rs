use crate::config::StockConfig;
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::model::Product;
use crate::render::ProductListView;
use crate::store::ProductSlot;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Product>,
    pub listed: Option<ProductListView>,
    pub config: Option<StockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, products: Vec<Product>) -> Self {
        self.affected = products;
        self
    }

    pub fn with_listed(mut self, view: ProductListView) -> Self {
        self.listed = Some(view);
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The last message, which is what the notification line shows.
    pub fn headline(&self) -> Option<&CmdMessage> {
        self.messages.last()
    }
}

pub(crate) fn missing_message(id: crate::model::ProductId) -> CmdMessage {
    CmdMessage::warning(format!("Product {} no longer exists.", id))
}

/// Writes `staged` to the slot and only then makes it the live store. A
/// failed save leaves `store` exactly as it was.
pub(crate) fn commit<S: ProductSlot>(
    store: &mut ProductStore,
    staged: ProductStore,
    slot: &mut S,
) -> Result<()> {
    slot.save(staged.products())?;
    *store = staged;
    Ok(())
}
