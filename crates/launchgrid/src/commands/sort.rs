use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sort::SortOrder;
use crate::store::{LayoutBackend, LayoutStore};

/// Applies `order` to the in-memory layout. With `persist`, the sorted
/// arrangement becomes the saved one.
pub fn run<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    order: SortOrder,
    persist: bool,
) -> Result<CmdResult> {
    store.apply_sort(order)?;
    let mut result = CmdResult::default().with_pages(store.pages().to_vec());

    if persist && order != SortOrder::Default {
        store.save()?;
        result.add_message(CmdMessage::success(format!(
            "Layout saved in {} order.",
            order
        )));
    }
    Ok(result)
}
