use super::backend::LayoutBackend;
use crate::catalog::Catalog;
use crate::error::{GridError, Result};
use crate::layout::{self, Page, Placement};
use crate::model::GridItem;
use crate::record::{self, LayoutRecord};
use crate::sort::{self, SortOrder};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Owns the page sequence for one layout and keeps it in step with its backend.
pub struct LayoutStore<B: LayoutBackend> {
    /// The underlying persistence backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    capacity: usize,
    pages: Vec<Page>,
    catalog: Catalog,
    hidden: BTreeSet<String>,
}

impl<B: LayoutBackend> LayoutStore<B> {
    pub fn new(backend: B, capacity: usize) -> Self {
        Self {
            backend,
            capacity: capacity.max(1),
            pages: vec![Vec::new()],
            catalog: Catalog::default(),
            hidden: BTreeSet::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub(crate) fn pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.pages
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn hidden(&self) -> &BTreeSet<String> {
        &self.hidden
    }

    pub fn is_hidden(&self, path: &str) -> bool {
        self.hidden.contains(path)
    }

    pub fn item(&self, id: Uuid) -> Option<&GridItem> {
        let (page, slot) = layout::locate(&self.pages, id)?;
        self.pages.get(page)?.get(slot)
    }

    pub fn find_path(&self, path: &str) -> Option<Placement> {
        layout::find_path(&self.pages, path)
    }

    pub fn find_folder_by_name(&self, name: &str) -> Option<Uuid> {
        self.pages
            .iter()
            .flatten()
            .filter_map(GridItem::as_folder)
            .find(|f| f.name == name)
            .map(|f| f.id)
    }

    // --- Load / Save ---

    /// Rebuilds the layout from `catalog` and the persisted arrangement.
    pub fn load(&mut self, catalog: Catalog) -> Result<()> {
        self.catalog = catalog;
        self.hidden = self.backend.load_hidden()?;
        self.reload()
    }

    /// Re-runs Load against the catalog from the last [`LayoutStore::load`].
    pub fn reload(&mut self) -> Result<()> {
        let items = self.saved_arrangement()?;
        let visible = self.without_hidden(items);
        self.rebuild(visible);
        info!(
            pages = self.pages.len(),
            items = layout::item_count(&self.pages),
            "layout loaded"
        );
        Ok(())
    }

    /// Persisted records resolved against the catalog, followed by every
    /// catalog entry the records never mention. New entries land on the
    /// highest page number seen among the resolved records.
    fn saved_arrangement(&self) -> Result<Vec<GridItem>> {
        let records = match self.backend.load_layout() {
            Ok(records) => records.unwrap_or_default(),
            Err(GridError::Serialization(e)) => {
                warn!("ignoring unreadable saved layout: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut items = self.catalog.resolve_all(&records);
        let dropped = records.len() - items.len();
        if dropped > 0 {
            debug!(dropped, "saved entries skipped");
        }

        let used: HashSet<String> = items
            .iter()
            .flat_map(|item| item.paths())
            .map(str::to_string)
            .collect();
        let max_page = items.iter().map(GridItem::page).max().unwrap_or(0);

        for found in self.catalog.iter() {
            if used.contains(&found.path) {
                continue;
            }
            if let Some(app) = self.catalog.instantiate(&found.path, max_page) {
                items.push(GridItem::App(app));
            }
        }
        Ok(items)
    }

    /// Only top-level apps are hidden; folder members always stay.
    fn without_hidden(&self, items: Vec<GridItem>) -> Vec<GridItem> {
        items
            .into_iter()
            .filter(|item| match item {
                GridItem::App(app) => !self.hidden.contains(&app.path),
                GridItem::Folder(_) => true,
            })
            .collect()
    }

    pub fn records(&self) -> Vec<LayoutRecord> {
        record::to_records(self.pages.iter().flatten())
    }

    /// Persists the flattened layout as one document.
    pub fn save(&self) -> Result<()> {
        let records = self.records();
        self.backend.save_layout(&records)?;
        debug!(records = records.len(), "layout saved");
        Ok(())
    }

    // --- Pagination ---

    /// Replaces the pages with a fresh pagination of `items`.
    pub fn rebuild(&mut self, items: Vec<GridItem>) {
        self.pages = layout::paginate(items, self.capacity);
    }

    /// Changes the page capacity and re-paginates the current order.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        let items = layout::flatten(&self.pages);
        self.rebuild(items);
    }

    pub fn cascade_from(&mut self, page: usize) {
        layout::cascade_overflow(&mut self.pages, page, self.capacity);
    }

    /// Adds an empty page at the end and returns its index.
    pub fn append_page(&mut self) -> usize {
        self.pages.push(Vec::new());
        self.pages.len() - 1
    }

    // --- Whole-layout operations ---

    /// Reorders all items under `order` and re-paginates from page 0.
    /// [`SortOrder::Default`] reloads the saved arrangement instead.
    /// Nothing is persisted.
    pub fn apply_sort(&mut self, order: SortOrder) -> Result<()> {
        if order == SortOrder::Default {
            return self.reload();
        }
        let mut items = layout::flatten(&self.pages);
        sort::sort_items(&mut items, order);
        for item in items.iter_mut() {
            item.set_page(0);
        }
        self.rebuild(items);
        debug!(%order, "layout sorted");
        Ok(())
    }

    /// Replaces the layout with `records` resolved against the catalog, then saves.
    /// Returns how many records did not resolve or repeated an earlier path.
    /// The current pages are kept if the save fails.
    pub fn replace_with(&mut self, records: &[LayoutRecord]) -> Result<usize> {
        let items = self.catalog.resolve_all(records);
        let dropped = records.len() - items.len();
        let visible = self.without_hidden(items);
        let pages = layout::paginate(visible, self.capacity);

        let replacement = record::to_records(pages.iter().flatten());
        self.backend.save_layout(&replacement)?;
        self.pages = pages;
        debug!(records = replacement.len(), dropped, "layout replaced");
        Ok(dropped)
    }

    /// Forgets the saved arrangement and lays out the catalog from scratch.
    pub fn reset(&mut self) -> Result<()> {
        self.backend.clear_layout()?;
        self.reload()
    }

    /// Returns false when `path` was already hidden.
    pub fn hide(&mut self, path: &str) -> Result<bool> {
        if self.hidden.contains(path) {
            return Ok(false);
        }
        let mut hidden = self.hidden.clone();
        hidden.insert(path.to_string());
        self.commit_hidden(hidden)?;
        Ok(true)
    }

    /// Returns false when `path` was not hidden.
    pub fn unhide(&mut self, path: &str) -> Result<bool> {
        if !self.hidden.contains(path) {
            return Ok(false);
        }
        let mut hidden = self.hidden.clone();
        hidden.remove(path);
        self.commit_hidden(hidden)?;
        Ok(true)
    }

    /// Adopts `hidden` only once it is persisted, then re-runs Load.
    fn commit_hidden(&mut self, hidden: BTreeSet<String>) -> Result<()> {
        self.backend.save_hidden(&hidden)?;
        self.hidden = hidden;
        self.reload()
    }

    pub fn rename_folder(&mut self, folder_id: Uuid, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GridError::Api("Folder name cannot be empty".into()));
        }
        let (page, slot) =
            layout::locate(&self.pages, folder_id).ok_or(GridError::ItemNotFound(folder_id))?;
        let folder = self.pages[page][slot]
            .as_folder_mut()
            .ok_or_else(|| GridError::Api("Only folders can be renamed".into()))?;
        folder.name = name.to_string();
        self.save()
    }
}
