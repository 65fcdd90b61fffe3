//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every launchgrid operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the [`LayoutStore`] and the drag [`Reconciler`] for one session
//! - **Normalizes inputs**: external references (paths, folder names) become
//!   session ids or [`crate::layout::Placement`]s; 1-based page numbers stay a
//!   UI concern
//! - **Dispatches** to `commands/*` and returns `Result<CmdResult>`
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! ## Generic Over LayoutBackend
//!
//! `GridApi<B: LayoutBackend>` runs on `FsBackend` in production and on
//! `MemBackend` in tests.
//!
//! ## Live Gestures
//!
//! Graphical clients that stream pointer events use [`GridApi::session`] to
//! reach the store and reconciler directly; the gesture commands here replay a
//! whole gesture at once.

use crate::catalog::Catalog;
use crate::commands::{self, helpers, CmdResult};
use crate::config::GridConfig;
use crate::drag::Reconciler;
use crate::error::Result;
use crate::layout::Page;
use crate::sort::SortOrder;
use crate::store::{LayoutBackend, LayoutStore};
use std::path::Path;

pub use crate::commands::{CmdMessage, MessageLevel, TransferReport};

pub struct GridApi<B: LayoutBackend> {
    store: LayoutStore<B>,
    reconciler: Reconciler,
    export_file_name: String,
}

impl<B: LayoutBackend> GridApi<B> {
    pub fn new(backend: B, config: &GridConfig) -> Self {
        Self {
            store: LayoutStore::new(backend, config.apps_per_page()),
            reconciler: Reconciler::new(config.drop_delay(), config.folder_name()),
            export_file_name: config.export_file_name.clone(),
        }
    }

    /// Builds the layout from `catalog` and whatever the backend has saved.
    pub fn load(&mut self, catalog: Catalog) -> Result<()> {
        self.store.load(catalog)
    }

    pub fn store(&self) -> &LayoutStore<B> {
        &self.store
    }

    pub fn pages(&self) -> &[Page] {
        self.store.pages()
    }

    pub fn session(&mut self) -> (&mut LayoutStore<B>, &mut Reconciler) {
        (&mut self.store, &mut self.reconciler)
    }

    pub fn list(&self) -> Result<CmdResult> {
        Ok(commands::pages::list(&self.store))
    }

    pub fn recalculate(&mut self, capacity: usize) -> Result<CmdResult> {
        Ok(commands::pages::recalculate(&mut self.store, capacity))
    }

    pub fn sort(&mut self, order: SortOrder, persist: bool) -> Result<CmdResult> {
        commands::sort::run(&mut self.store, order, persist)
    }

    pub fn place(&mut self, path: &str, target_path: &str) -> Result<CmdResult> {
        let source = helpers::resolve_path(&self.store, path)?;
        let target = helpers::resolve_path(&self.store, target_path)?;
        commands::arrange::place(&mut self.store, &mut self.reconciler, source, target)
    }

    /// `target` is an app path or a folder name.
    pub fn group(&mut self, path: &str, target: &str) -> Result<CmdResult> {
        let source = helpers::resolve_item(&self.store, path)?;
        let target = helpers::resolve_item(&self.store, target)?;
        commands::arrange::group(&mut self.store, &mut self.reconciler, source, target)
    }

    /// `page` is 0-based.
    pub fn move_to_page(&mut self, path: &str, page: usize) -> Result<CmdResult> {
        let source = helpers::resolve_path(&self.store, path)?;
        commands::arrange::move_to_page(&mut self.store, &mut self.reconciler, source, page)
    }

    pub fn ungroup(&mut self, path: &str) -> Result<CmdResult> {
        let source = helpers::resolve_path(&self.store, path)?;
        commands::arrange::ungroup(&mut self.store, &mut self.reconciler, source)
    }

    /// `folder` is a folder name or the path of one of its apps.
    pub fn rename_folder(&mut self, folder: &str, name: &str) -> Result<CmdResult> {
        let id = helpers::resolve_folder(&self.store, folder)?;
        commands::folders::rename(&mut self.store, id, name)
    }

    pub fn hide(&mut self, path: &str) -> Result<CmdResult> {
        commands::visibility::hide(&mut self.store, path)
    }

    pub fn unhide(&mut self, path: &str) -> Result<CmdResult> {
        commands::visibility::unhide(&mut self.store, path)
    }

    pub fn export(&self, dir: &Path) -> Result<CmdResult> {
        Ok(commands::transfer::export(
            &self.store,
            dir,
            &self.export_file_name,
        ))
    }

    pub fn import(&mut self, dir: &Path) -> Result<CmdResult> {
        Ok(commands::transfer::import(
            &mut self.store,
            dir,
            &self.export_file_name,
        ))
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.store)
    }
}
