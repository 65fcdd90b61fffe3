use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LayoutBackend, LayoutStore};

pub fn run<B: LayoutBackend>(store: &mut LayoutStore<B>) -> Result<CmdResult> {
    store.reset()?;
    Ok(CmdResult::default()
        .with_pages(store.pages().to_vec())
        .with_message(CmdMessage::success(
            "Layout reset: apps are back in discovery order.",
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{folder_rec, loaded_store, page_names};

    #[test]
    fn reset_dissolves_folders() {
        let mut store = loaded_store(vec![folder_rec("Work", 0, &["B", "A"])], &["A", "B"], 10);
        assert_eq!(page_names(&store), vec![vec!["Work"]]);

        let result = run(&mut store).unwrap();
        assert_eq!(page_names(&store), vec![vec!["A", "B"]]);
        assert_eq!(result.pages[0].len(), 2);
        assert!(store.backend().stored_layout().is_none());
    }
}
