use crate::commands::CmdResult;
use crate::inventory::ProductStore;
use crate::render::{project, RenderOptions};

pub fn run(store: &ProductStore, options: &RenderOptions) -> CmdResult {
    CmdResult::default().with_listed(project(store.products(), options))
}
