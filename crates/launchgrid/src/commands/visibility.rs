use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GridError, Result};
use crate::layout::Placement;
use crate::store::{LayoutBackend, LayoutStore};

pub fn hide<B: LayoutBackend>(store: &mut LayoutStore<B>, path: &str) -> Result<CmdResult> {
    let name = match store.catalog().get(path) {
        Some(found) => found.name.clone(),
        None => return Err(GridError::UnknownReference(path.to_string())),
    };
    let mut result = CmdResult::default();
    if store.hide(path)? {
        result.add_message(CmdMessage::success(format!("Hidden: {}", name)));
        if matches!(store.find_path(path), Some(Placement::InFolder { .. })) {
            result.add_message(CmdMessage::warning(format!(
                "{} is inside a folder and stays visible until it is taken out.",
                name
            )));
        }
    } else {
        result.add_message(CmdMessage::info(format!("{} is already hidden", name)));
    }
    Ok(result)
}

pub fn unhide<B: LayoutBackend>(store: &mut LayoutStore<B>, path: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.unhide(path)? {
        result.add_message(CmdMessage::success(format!("Visible again: {}", path)));
    } else {
        result.add_message(CmdMessage::info(format!("{} is not hidden", path)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::{folder_rec, loaded_store, page_names};

    #[test]
    fn hide_removes_app_and_unhide_brings_it_back() {
        let mut store = loaded_store(vec![], &["A", "B"], 10);
        let result = hide(&mut store, "/A.app").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(page_names(&store), vec![vec!["B"]]);

        let again = hide(&mut store, "/A.app").unwrap();
        assert_eq!(again.messages[0].level, MessageLevel::Info);

        unhide(&mut store, "/A.app").unwrap();
        assert_eq!(page_names(&store), vec![vec!["A", "B"]]);
    }

    #[test]
    fn hiding_a_folder_member_warns() {
        let mut store = loaded_store(vec![folder_rec("Work", 0, &["A"])], &["A", "B"], 10);
        let result = hide(&mut store, "/A.app").unwrap();
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(page_names(&store), vec![vec!["Work", "B"]]);
    }

    #[test]
    fn unknown_paths_cannot_be_hidden() {
        let mut store = loaded_store(vec![], &["A"], 10);
        assert!(matches!(
            hide(&mut store, "/Nope.app"),
            Err(GridError::UnknownReference(_))
        ));
    }

    #[test]
    fn unhide_of_visible_app_is_informational() {
        let mut store = loaded_store(vec![], &["A"], 10);
        let result = unhide(&mut store, "/A.app").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
