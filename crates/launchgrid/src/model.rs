//! # Grid Item Model
//!
//! The positional units placed into pages.
//!
//! - [`AppItem`]: a single launchable item. Carries a per-session [`Uuid`], a display
//!   name, the external reference (`path`) used to match it across restarts, and the
//!   page that currently contains it. The two timestamps belong to discovery and are
//!   only read by the sort engine.
//! - [`Folder`]: a named, ordered group of apps. Folders hold [`AppItem`]s only, so
//!   nested folders cannot be expressed.
//! - [`GridItem`]: the element type of a page, either an app or a folder. Category
//!   labels are a view filter and have no variant here, so they can never end up
//!   inside a page.
//!
//! Identity is per process: every construction from the catalog mints a fresh id.
//! Equality of grid items is equality of ids.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AppItem {
    pub id: Uuid,
    pub name: String,
    pub path: String,
    pub page: usize,
    pub last_opened: Option<DateTime<Utc>>,
    pub installed: Option<DateTime<Utc>>,
}

impl AppItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>, page: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            path: path.into(),
            page,
            last_opened: None,
            installed: None,
        }
    }

    pub fn with_last_opened(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_opened = at;
        self
    }

    pub fn with_installed(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.installed = at;
        self
    }
}

impl PartialEq for AppItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AppItem {}

/// A folder always holds at least one app once it is reachable from a page.
///
/// The app list is private so callers go through [`Folder::new`], which refuses
/// to build an empty folder, and through [`Folder::remove_app`], after which the
/// caller is expected to drop the folder when [`Folder::is_empty`] reports true.
#[derive(Debug, Clone)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub page: usize,
    apps: Vec<AppItem>,
}

impl Folder {
    /// Builds a folder, or `None` when `apps` is empty.
    pub fn new(name: impl Into<String>, page: usize, apps: Vec<AppItem>) -> Option<Self> {
        if apps.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            page,
            apps,
        })
    }

    pub fn apps(&self) -> &[AppItem] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn contains(&self, app_id: Uuid) -> bool {
        self.apps.iter().any(|a| a.id == app_id)
    }

    pub fn position(&self, app_id: Uuid) -> Option<usize> {
        self.apps.iter().position(|a| a.id == app_id)
    }

    pub fn push_app(&mut self, app: AppItem) {
        self.apps.push(app);
    }

    pub fn remove_app(&mut self, app_id: Uuid) -> Option<AppItem> {
        let idx = self.position(app_id)?;
        Some(self.apps.remove(idx))
    }

    /// Moves the app at `from` so that it ends up at index `to`.
    pub fn move_app(&mut self, from: usize, to: usize) {
        if from >= self.apps.len() || to >= self.apps.len() || from == to {
            return;
        }
        let app = self.apps.remove(from);
        self.apps.insert(to, app);
    }

    /// Most recent timestamp among the contained apps.
    fn max_of(&self, pick: impl Fn(&AppItem) -> Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        self.apps.iter().filter_map(pick).max()
    }
}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Folder {}

#[derive(Debug, Clone)]
pub enum GridItem {
    App(AppItem),
    Folder(Folder),
}

impl GridItem {
    pub fn id(&self) -> Uuid {
        match self {
            GridItem::App(app) => app.id,
            GridItem::Folder(folder) => folder.id,
        }
    }

    pub fn page(&self) -> usize {
        match self {
            GridItem::App(app) => app.page,
            GridItem::Folder(folder) => folder.page,
        }
    }

    pub fn set_page(&mut self, page: usize) {
        match self {
            GridItem::App(app) => app.page = page,
            GridItem::Folder(folder) => folder.page = page,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GridItem::App(app) => &app.name,
            GridItem::Folder(folder) => &folder.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, GridItem::Folder(_))
    }

    pub fn as_app(&self) -> Option<&AppItem> {
        match self {
            GridItem::App(app) => Some(app),
            GridItem::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            GridItem::App(_) => None,
            GridItem::Folder(folder) => Some(folder),
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            GridItem::App(_) => None,
            GridItem::Folder(folder) => Some(folder),
        }
    }

    /// Folders report the newest last-used time of their apps.
    pub fn last_opened(&self) -> Option<DateTime<Utc>> {
        match self {
            GridItem::App(app) => app.last_opened,
            GridItem::Folder(folder) => folder.max_of(|a| a.last_opened),
        }
    }

    pub fn installed(&self) -> Option<DateTime<Utc>> {
        match self {
            GridItem::App(app) => app.installed,
            GridItem::Folder(folder) => folder.max_of(|a| a.installed),
        }
    }

    /// External references covered by this item.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            GridItem::App(app) => vec![app.path.as_str()],
            GridItem::Folder(folder) => folder.apps.iter().map(|a| a.path.as_str()).collect(),
        }
    }
}

impl PartialEq for GridItem {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for GridItem {}

impl From<AppItem> for GridItem {
    fn from(app: AppItem) -> Self {
        GridItem::App(app)
    }
}

impl From<Folder> for GridItem {
    fn from(folder: Folder) -> Self {
        GridItem::Folder(folder)
    }
}
