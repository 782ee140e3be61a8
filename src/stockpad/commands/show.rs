use crate::commands::CmdResult;
use crate::error::{Result, StockError};
use crate::inventory::ProductStore;
use crate::model::ProductId;
use crate::render::{project, RenderOptions};

pub fn run(store: &ProductStore, id: ProductId, options: &RenderOptions) -> Result<CmdResult> {
    let product = store.find_by_id(id).ok_or(StockError::NotFound(id))?.clone();
    let view = project(std::slice::from_ref(&product), options);
    Ok(CmdResult::default()
        .with_affected(vec![product])
        .with_listed(view))
}
