use crate::model::ProductId;
use crate::validation::ValidationError;
use crate::view::ViewRegion;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Cannot switch from {from} to {to}")]
    InvalidTransition { from: ViewRegion, to: ViewRegion },

    #[error("Stored products at {location} are unreadable: {message}")]
    CorruptSlot { location: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
