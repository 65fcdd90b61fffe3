use crate::error::{GridError, Result};
use crate::layout::Placement;
use crate::store::{LayoutBackend, LayoutStore};
use uuid::Uuid;

/// Finds the app whose external reference is `path`, on a page or in a folder.
pub fn resolve_path<B: LayoutBackend>(store: &LayoutStore<B>, path: &str) -> Result<Placement> {
    store
        .find_path(path)
        .ok_or_else(|| GridError::UnknownReference(path.to_string()))
}

/// Resolves a drop target to a top-level item id.
///
/// `reference` is tried as an app path first, then as a folder name. An app
/// inside a folder stands for its folder, since that is what sits on the page.
pub fn resolve_item<B: LayoutBackend>(store: &LayoutStore<B>, reference: &str) -> Result<Uuid> {
    match store.find_path(reference) {
        Some(Placement::Top { id, .. }) => Ok(id),
        Some(Placement::InFolder { folder, .. }) => Ok(folder),
        None => store
            .find_folder_by_name(reference)
            .ok_or_else(|| GridError::UnknownReference(reference.to_string())),
    }
}

/// Resolves a folder by name, or by the path of one of its apps.
pub fn resolve_folder<B: LayoutBackend>(store: &LayoutStore<B>, reference: &str) -> Result<Uuid> {
    if let Some(id) = store.find_folder_by_name(reference) {
        return Ok(id);
    }
    match store.find_path(reference) {
        Some(Placement::InFolder { folder, .. }) => Ok(folder),
        Some(Placement::Top { .. }) => Err(GridError::Api(format!(
            "{} is not in a folder",
            reference
        ))),
        None => Err(GridError::UnknownReference(reference.to_string())),
    }
}

/// Display name for a placement, or an empty string if it no longer resolves.
pub fn display_name<B: LayoutBackend>(store: &LayoutStore<B>, placement: Placement) -> String {
    match placement {
        Placement::Top { id, .. } => store
            .item(id)
            .map(|item| item.name().to_string())
            .unwrap_or_default(),
        Placement::InFolder { folder, app, .. } => store
            .item(folder)
            .and_then(|item| item.as_folder())
            .and_then(|f| f.apps().iter().find(|a| a.id == app))
            .map(|a| a.name.clone())
            .unwrap_or_default(),
    }
}
