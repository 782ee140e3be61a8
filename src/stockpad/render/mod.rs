//! # Rendering
//!
//! Two steps, both full re-renders with no diffing:
//!
//! 1. [`project`] turns the collection into a [`ProductListView`]: either the
//!    empty-inventory message or one [`ProductCard`] per product, in order.
//!    Cards hold display-ready strings (fallback image and description,
//!    formatted price) plus the typed actions a UI binds to its buttons.
//! 2. [`render_list`] / [`render_card`] turn view models into terminal text
//!    through minijinja templates and the [`theme::STOCK_THEME`] styles.
//!
//! Width math (description truncation) stays in Rust; templates only lay out
//! and pick styles.

use crate::config::StockConfig;
use crate::error::Result;
use crate::model::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod templates;
pub mod theme;

use templates::{CARD_TEMPLATE, LIST_TEMPLATE};
use theme::STOCK_THEME;

pub const EMPTY_MESSAGE: &str = "No products in inventory.";
pub const NO_DESCRIPTION: &str = "No description available.";
/// Descriptions wider than this are cut short in the list.
pub const DESCRIPTION_WIDTH: usize = 72;
const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Edit,
    Delete,
}

/// A button on a card: what it does and to which product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardAction {
    pub kind: ActionKind,
    pub id: ProductId,
}

impl CardAction {
    pub fn edit(id: ProductId) -> Self {
        Self {
            kind: ActionKind::Edit,
            id,
        }
    }

    pub fn delete(id: ProductId) -> Self {
        Self {
            kind: ActionKind::Delete,
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub image_url: String,
    pub image_alt: String,
    pub name: String,
    pub description: String,
    pub price_text: String,
    pub stock_text: String,
    pub added: Option<String>,
    pub actions: [CardAction; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView {
    Empty { message: String },
    Cards(Vec<ProductCard>),
}

impl ProductListView {
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ProductListView::Empty { .. } => &[],
            ProductListView::Cards(cards) => cards,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub placeholder_image: String,
    pub currency: String,
    /// When set, cards say how long ago each product was added.
    pub now: Option<DateTime<Utc>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&StockConfig::default())
    }
}

impl From<&StockConfig> for RenderOptions {
    fn from(config: &StockConfig) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
            currency: config.currency.clone(),
            now: None,
        }
    }
}

impl RenderOptions {
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

pub fn project(products: &[Product], options: &RenderOptions) -> ProductListView {
    if products.is_empty() {
        return ProductListView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }
    ProductListView::Cards(products.iter().map(|p| card(p, options)).collect())
}

pub fn card(product: &Product, options: &RenderOptions) -> ProductCard {
    let image_url = if product.image_url.is_empty() {
        options.placeholder_image.clone()
    } else {
        product.image_url.clone()
    };
    let description = if product.description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        product.description.clone()
    };

    ProductCard {
        id: product.id,
        image_url,
        image_alt: product.name.clone(),
        name: product.name.clone(),
        description,
        price_text: format_price(product.price, &options.currency),
        stock_text: format!("Stock: {}", product.quantity),
        added: options.now.and_then(|now| added_ago(product.id, now)),
        actions: [CardAction::edit(product.id), CardAction::delete(product.id)],
    }
}

pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

#[derive(Serialize)]
struct ListData<'a> {
    empty: bool,
    message: &'a str,
    cards: Vec<ProductCard>,
}

#[derive(Serialize)]
struct CardData<'a> {
    card: &'a ProductCard,
    rule: String,
}

pub fn render_list(view: &ProductListView, use_color: bool) -> Result<String> {
    let data = match view {
        ProductListView::Empty { message } => ListData {
            empty: true,
            message: message.as_str(),
            cards: Vec::new(),
        },
        ProductListView::Cards(cards) => ListData {
            empty: false,
            message: "",
            cards: cards
                .iter()
                .cloned()
                .map(|mut c| {
                    c.description = truncate_to_width(&c.description, DESCRIPTION_WIDTH);
                    c
                })
                .collect(),
        },
    };

    let env = theme::environment(&STOCK_THEME, use_color);
    Ok(env.render_str(LIST_TEMPLATE, &data)?)
}

pub fn render_card(card: &ProductCard, use_color: bool) -> Result<String> {
    let data = CardData {
        card,
        rule: "─".repeat(RULE_WIDTH),
    };
    let env = theme::environment(&STOCK_THEME, use_color);
    Ok(env.render_str(CARD_TEMPLATE, &data)?)
}

fn added_ago(id: ProductId, now: DateTime<Utc>) -> Option<String> {
    let created = id.created_at()?;
    let elapsed = now.signed_duration_since(created).to_std().ok()?;
    Some(format!("added {}", timeago::Formatter::new().convert(elapsed)))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
