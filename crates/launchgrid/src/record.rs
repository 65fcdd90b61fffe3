//! Serialized shape of a layout, shared by the persisted blob and the
//! export/import document.
//!
//! ```json
//! [
//!   {"type": "app", "id": "…", "name": "Mail", "page": 0, "path": "/Applications/Mail.app"},
//!   {"type": "folder", "id": "…", "name": "Work", "page": 0,
//!    "apps": [{"id": "…", "name": "Notes", "page": 0, "path": "/Applications/Notes.app"}]}
//! ]
//! ```
//!
//! Only `path` and `page` are required for apps and only `name` and `apps` for
//! folders: ids are regenerated on every load and app names come from the catalog.
//! Records with an unrecognized `type` decode to [`LayoutRecord::Unknown`] and are
//! skipped during resolution. A record with no `type` at all fails to decode,
//! which rejects the document it belongs to.

use crate::model::{AppItem, Folder, GridItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutRecord {
    App(AppRecord),
    Folder(FolderRecord),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub page: usize,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub page: usize,
    pub apps: Vec<AppRecord>,
}

impl From<&AppItem> for AppRecord {
    fn from(app: &AppItem) -> Self {
        Self {
            id: app.id,
            name: app.name.clone(),
            page: app.page,
            path: app.path.clone(),
        }
    }
}

impl From<&Folder> for FolderRecord {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            page: folder.page,
            apps: folder.apps().iter().map(AppRecord::from).collect(),
        }
    }
}

impl From<&GridItem> for LayoutRecord {
    fn from(item: &GridItem) -> Self {
        match item {
            GridItem::App(app) => LayoutRecord::App(app.into()),
            GridItem::Folder(folder) => LayoutRecord::Folder(folder.into()),
        }
    }
}

/// Serializes items in order, one record each.
pub fn to_records<'a>(items: impl IntoIterator<Item = &'a GridItem>) -> Vec<LayoutRecord> {
    items.into_iter().map(LayoutRecord::from).collect()
}
