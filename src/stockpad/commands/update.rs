use crate::commands::{commit, missing_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::model::ProductId;
use crate::store::ProductSlot;
use crate::validation::{validate, ProductForm};
use tracing::{info, warn};

/// Validates `form` and writes it over product `id`. A product that vanished
/// while its form was open is reported as a warning and nothing is saved.
pub fn run<S: ProductSlot>(
    store: &mut ProductStore,
    slot: &mut S,
    id: ProductId,
    form: &ProductForm,
) -> Result<CmdResult> {
    let draft = validate(form)?;
    let mut result = CmdResult::default();

    let mut staged = store.clone();
    let Some(product) = staged.update(id, draft).cloned() else {
        warn!(%id, "update target no longer exists");
        result.add_message(missing_message(id));
        return Ok(result);
    };

    commit(store, staged, slot)?;
    info!(%id, "product updated");
    result.affected.push(product);
    result.add_message(CmdMessage::success("Product updated successfully!"));
    Ok(result)
}
