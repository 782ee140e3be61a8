use crate::commands::{commit, missing_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::model::ProductId;
use crate::store::ProductSlot;
use tracing::{info, warn};

pub fn run<S: ProductSlot>(
    store: &mut ProductStore,
    slot: &mut S,
    id: ProductId,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut staged = store.clone();
    let Some(product) = staged.remove(id) else {
        warn!(%id, "delete target no longer exists");
        result.add_message(missing_message(id));
        return Ok(result);
    };

    commit(store, staged, slot)?;
    info!(%id, "product deleted");
    result.affected.push(product);
    result.add_message(CmdMessage::success("Product deleted successfully!"));
    Ok(result)
}
