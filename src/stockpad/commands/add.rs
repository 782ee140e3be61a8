use crate::commands::{commit, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::store::ProductSlot;
use crate::validation::{validate, ProductForm};
use tracing::info;

pub fn run<S: ProductSlot>(
    store: &mut ProductStore,
    slot: &mut S,
    form: &ProductForm,
) -> Result<CmdResult> {
    let draft = validate(form)?;
    let mut staged = store.clone();
    let product = staged.add(draft).clone();
    commit(store, staged, slot)?;
    info!(id = %product.id, "product added");

    let mut result = CmdResult::default().with_affected(vec![product]);
    result.add_message(CmdMessage::success("Product added successfully!"));
    Ok(result)
}
