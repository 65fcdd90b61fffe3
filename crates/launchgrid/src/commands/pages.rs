use crate::commands::{CmdMessage, CmdResult};
use crate::layout;
use crate::store::{LayoutBackend, LayoutStore};
use tracing::debug;

pub fn list<B: LayoutBackend>(store: &LayoutStore<B>) -> CmdResult {
    let mut result = CmdResult::default().with_pages(store.pages().to_vec());
    if layout::item_count(store.pages()) == 0 {
        result.add_message(CmdMessage::info("No apps in the layout."));
    }
    result
}

/// Re-paginates the current order for a new page capacity. Nothing is saved:
/// capacity comes from configuration and is applied again on every load.
pub fn recalculate<B: LayoutBackend>(store: &mut LayoutStore<B>, capacity: usize) -> CmdResult {
    let before = store.pages().len();
    store.set_capacity(capacity);
    let after = store.pages().len();
    debug!(capacity, before, after, "pages recalculated");

    CmdResult::default()
        .with_pages(store.pages().to_vec())
        .with_message(CmdMessage::info(format!(
            "{} apps per page: {} page(s), was {}",
            store.capacity(),
            after,
            before
        )))
}
