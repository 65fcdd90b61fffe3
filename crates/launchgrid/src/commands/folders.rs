use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LayoutBackend, LayoutStore};
use uuid::Uuid;

pub fn rename<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    folder: Uuid,
    name: &str,
) -> Result<CmdResult> {
    let old = store
        .item(folder)
        .map(|item| item.name().to_string())
        .unwrap_or_default();
    store.rename_folder(folder, name)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Renamed folder {} to {}",
        old,
        name.trim()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::test_utils::{folder_contents, folder_rec, loaded_store};

    #[test]
    fn rename_keeps_contents() {
        let mut store = loaded_store(vec![folder_rec("Work", 0, &["A", "B"])], &["A", "B"], 10);
        let id = store.find_folder_by_name("Work").unwrap();

        let result = rename(&mut store, id, "Office").unwrap();
        assert!(result.messages[0].content.contains("Office"));
        assert_eq!(folder_contents(&store, "Office"), vec!["A", "B"]);
        assert!(store.find_folder_by_name("Work").is_none());
    }

    #[test]
    fn blank_name_is_rejected_without_saving() {
        let mut store = loaded_store(vec![folder_rec("Work", 0, &["A"])], &["A"], 10);
        let id = store.find_folder_by_name("Work").unwrap();
        assert!(matches!(rename(&mut store, id, " "), Err(GridError::Api(_))));
        assert_eq!(store.backend().save_count(), 0);
    }
}
