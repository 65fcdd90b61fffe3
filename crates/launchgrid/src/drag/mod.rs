//! # Drag Reconciler
//!
//! Applies drag-gesture signals to a [`LayoutStore`]. A session starts with
//! [`Reconciler::begin_drag`] (an item on a page) or
//! [`Reconciler::begin_folder_drag`] (an app inside an open folder), then
//! receives three kinds of signal:
//!
//! - **entered** ([`Reconciler::drag_entered`]): the drag is over a candidate item.
//!   - Same page, or same folder: a delayed move is armed. It fires from
//!     [`Reconciler::tick`] once the settle delay has passed, and only if the same
//!     target is still hovered.
//!   - Different page: the item moves to the hovered slot at once and the
//!     destination page is cascaded.
//! - **exited** ([`Reconciler::drag_exited`]): clears the hover if it still points
//!   at that target. Nothing is undone; there is no cancelled state.
//! - **dropped** ([`Reconciler::drop_on_item`], [`Reconciler::drop_on_page`],
//!   [`Reconciler::drop_on_dismiss`]): commits the gesture, saves, and ends the
//!   session.
//!
//! ## Drop Policies
//!
//! | Dragged     | Target            | Effect                                            |
//! |-------------|-------------------|---------------------------------------------------|
//! | app         | itself            | nothing moves; the arrangement is saved           |
//! | app         | another app       | folder `[dragged, target]` in the target's slot   |
//! | app         | folder            | appended to the folder                            |
//! | folder      | any item          | nothing moves; the arrangement is saved           |
//! | any item    | page area         | appended to that page, cascade                    |
//! | folder app  | dismiss surface   | appended to the folder's page, cascade            |
//! | folder app  | page area         | appended to that page, cascade                    |
//! | folder app  | app of its folder | folder order is saved                             |
//!
//! A folder emptied by an extraction is removed. A drop with no session
//! returns `Ok(false)` and touches nothing.
//!
//! ## Time
//!
//! The reconciler never reads the clock. Callers pass `now` into
//! [`Reconciler::drag_entered`] and [`Reconciler::tick`], which keeps the
//! debounce deterministic under test.

mod policies;
mod reorder;

pub use reorder::PendingMove;

use crate::error::{GridError, Result};
use crate::layout;
use crate::store::{LayoutBackend, LayoutStore};
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// What the current session is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dragged {
    /// A top-level item (app or folder) picked up from a page.
    Item(Uuid),
    /// An app picked up from inside an open folder.
    FolderApp { folder: Uuid, app: Uuid },
}

#[derive(Debug, Clone)]
pub struct Reconciler {
    settle_delay: Duration,
    folder_name: String,
    dragged: Option<Dragged>,
    hovered: Option<Uuid>,
    pending: Option<PendingMove>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), DEFAULT_FOLDER_NAME)
    }
}

impl Reconciler {
    pub fn new(settle_delay: Duration, folder_name: impl Into<String>) -> Self {
        Self {
            settle_delay,
            folder_name: folder_name.into(),
            dragged: None,
            hovered: None,
            pending: None,
        }
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn dragged(&self) -> Option<Dragged> {
        self.dragged
    }

    pub fn hovered(&self) -> Option<Uuid> {
        self.hovered
    }

    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin_drag(&mut self, id: Uuid) {
        self.cancel();
        self.dragged = Some(Dragged::Item(id));
    }

    pub fn begin_folder_drag(&mut self, folder: Uuid, app: Uuid) {
        self.cancel();
        self.dragged = Some(Dragged::FolderApp { folder, app });
    }

    /// Forgets the session without committing anything.
    pub fn cancel(&mut self) {
        self.dragged = None;
        self.hovered = None;
        self.pending = None;
    }

    // --- Hover ---

    pub fn drag_entered<B: LayoutBackend>(
        &mut self,
        store: &mut LayoutStore<B>,
        target: Uuid,
        now: Instant,
    ) -> Result<()> {
        let Some(dragged) = self.dragged else {
            return Ok(());
        };
        self.hovered = Some(target);

        match dragged {
            Dragged::Item(id) => {
                if id == target {
                    return Ok(());
                }
                let pages = store.pages();
                let (Some((from_page, _)), Some((to_page, _))) =
                    (layout::locate(pages, id), layout::locate(pages, target))
                else {
                    return Ok(());
                };
                if from_page == to_page {
                    self.pending = Some(PendingMove::schedule(target, now, self.settle_delay));
                } else {
                    self.pending = None;
                    let capacity = store.capacity();
                    if policies::move_across_pages(store.pages_mut(), capacity, id, target) {
                        debug!(%id, from_page, to_page, "moved across pages");
                    }
                }
            }
            Dragged::FolderApp { folder, app } => {
                if app == target {
                    return Ok(());
                }
                let shares_folder = store
                    .item(folder)
                    .and_then(|item| item.as_folder())
                    .is_some_and(|f| f.contains(target));
                if shares_folder {
                    self.pending = Some(PendingMove::schedule(target, now, self.settle_delay));
                }
            }
        }
        Ok(())
    }

    pub fn drag_exited(&mut self, target: Uuid) {
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }

    /// Fires the armed move if it is due. A move whose target is no longer the
    /// hovered one, or no longer shares a page or folder with the dragged item,
    /// is discarded. Returns whether the arrangement changed.
    pub fn tick<B: LayoutBackend>(&mut self, store: &mut LayoutStore<B>, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if !pending.is_due(now) {
            return false;
        }
        self.pending = None;

        if self.hovered != Some(pending.target) {
            return false;
        }
        let moved = match self.dragged {
            Some(Dragged::Item(id)) => {
                reorder::move_within_page(store.pages_mut(), id, pending.target)
            }
            Some(Dragged::FolderApp { folder, app }) => {
                reorder::move_within_folder(store.pages_mut(), folder, app, pending.target)
            }
            None => false,
        };
        if moved {
            debug!(hovered = %pending.target, "reorder preview applied");
        }
        moved
    }

    // --- Drops ---

    pub fn drop_on_item<B: LayoutBackend>(
        &mut self,
        store: &mut LayoutStore<B>,
        target: Uuid,
    ) -> Result<bool> {
        let Some(dragged) = self.dragged else {
            return Ok(false);
        };

        if let Dragged::Item(id) = dragged {
            if id != target {
                self.commit_on_item(store, id, target);
            }
        }
        self.finish(store)
    }

    fn commit_on_item<B: LayoutBackend>(&self, store: &mut LayoutStore<B>, id: Uuid, target: Uuid) {
        let dragged_is_app = store.item(id).is_some_and(|item| item.as_app().is_some());
        if !dragged_is_app {
            return;
        }
        match store.item(target).map(|item| item.is_folder()) {
            Some(false) => {
                if let Some(folder) =
                    policies::create_folder(store.pages_mut(), id, target, &self.folder_name)
                {
                    debug!(%folder, "folder created");
                }
            }
            Some(true) => {
                if policies::merge_into_folder(store.pages_mut(), id, target) {
                    debug!(%id, folder = %target, "app added to folder");
                }
            }
            None => {}
        }
    }

    /// Drop onto the empty area of `page`.
    pub fn drop_on_page<B: LayoutBackend>(
        &mut self,
        store: &mut LayoutStore<B>,
        page: usize,
    ) -> Result<bool> {
        let Some(dragged) = self.dragged else {
            return Ok(false);
        };
        if page >= store.pages().len() {
            return Err(GridError::PageOutOfRange(page));
        }

        let capacity = store.capacity();
        let moved = match dragged {
            Dragged::Item(id) => policies::move_to_page(store.pages_mut(), capacity, id, page),
            Dragged::FolderApp { folder, app } => {
                policies::extract_from_folder(store.pages_mut(), capacity, folder, app, Some(page))
            }
        };
        if moved {
            debug!(page, "dropped on page");
        }
        self.finish(store)
    }

    /// Drop onto the surface around an open folder: the app leaves the folder.
    pub fn drop_on_dismiss<B: LayoutBackend>(&mut self, store: &mut LayoutStore<B>) -> Result<bool> {
        let Some(Dragged::FolderApp { folder, app }) = self.dragged else {
            return Ok(false);
        };
        let capacity = store.capacity();
        if policies::extract_from_folder(store.pages_mut(), capacity, folder, app, None) {
            debug!(%app, %folder, "app taken out of folder");
        }
        self.finish(store)
    }

    fn finish<B: LayoutBackend>(&mut self, store: &mut LayoutStore<B>) -> Result<bool> {
        self.cancel();
        store.save()?;
        Ok(true)
    }
}
