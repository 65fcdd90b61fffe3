//! Gesture commands.
//!
//! Each command replays the drag signals a pointer would produce, so the same
//! [`Reconciler`] policies apply whether the layout is edited from a GUI or from
//! the command line:
//!
//! - [`place`]: pick up, hover the target until the settle delay has passed,
//!   then drop on the item's own slot. Same page reorders; another page moves
//!   the item to the target's slot and cascades. Inside a folder it reorders
//!   the folder.
//! - [`group`]: pick up and drop on the target item (folder creation or merge).
//! - [`move_to_page`]: pick up and drop on a page area. One past the last page
//!   first adds an empty page.
//! - [`ungroup`]: pick up from the open folder and drop on the dismiss surface.

use crate::commands::helpers::display_name;
use crate::commands::{CmdMessage, CmdResult};
use crate::drag::Reconciler;
use crate::error::{GridError, Result};
use crate::layout::{self, Placement};
use crate::store::{LayoutBackend, LayoutStore};
use std::time::Instant;
use uuid::Uuid;

fn position_message<B: LayoutBackend>(store: &LayoutStore<B>, id: Uuid, name: &str) -> CmdMessage {
    match layout::locate(store.pages(), id) {
        Some((page, slot)) => CmdMessage::success(format!(
            "{} is now on page {}, slot {}",
            name,
            page + 1,
            slot + 1
        )),
        None => CmdMessage::warning(format!("{} is no longer on a page", name)),
    }
}

pub fn place<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    reconciler: &mut Reconciler,
    source: Placement,
    target: Placement,
) -> Result<CmdResult> {
    let name = display_name(store, source);
    let now = Instant::now();
    let settle = now + reconciler.settle_delay();

    match (source, target) {
        (Placement::Top { id, .. }, Placement::Top { id: target_id, .. }) => {
            if id == target_id {
                return Ok(CmdResult::default()
                    .with_message(CmdMessage::info(format!("{} is already there", name))));
            }
            reconciler.begin_drag(id);
            reconciler.drag_entered(store, target_id, now)?;
            reconciler.tick(store, settle);
            reconciler.drop_on_item(store, id)?;
            Ok(CmdResult::default().with_message(position_message(store, id, &name)))
        }
        (
            Placement::InFolder { folder, app, .. },
            Placement::InFolder {
                folder: target_folder,
                app: target_app,
                ..
            },
        ) if folder == target_folder => {
            reconciler.begin_folder_drag(folder, app);
            reconciler.drag_entered(store, target_app, now)?;
            reconciler.tick(store, settle);
            reconciler.drop_on_item(store, target_app)?;

            let slot = store
                .item(folder)
                .and_then(|item| item.as_folder())
                .and_then(|f| f.position(app))
                .unwrap_or_default();
            Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "{} is now at position {} in its folder",
                name,
                slot + 1
            ))))
        }
        (Placement::InFolder { .. }, _) => Err(GridError::Api(format!(
            "{} is inside a folder; ungroup it first or place it next to an app of the same folder",
            name
        ))),
        (_, Placement::InFolder { .. }) => Err(GridError::Api(format!(
            "{} can only be placed next to items on a page; use group to add it to a folder",
            name
        ))),
    }
}

/// Drops top-level app `source` on top-level item `target`.
pub fn group<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    reconciler: &mut Reconciler,
    source: Uuid,
    target: Uuid,
) -> Result<CmdResult> {
    let source_name = store
        .item(source)
        .filter(|item| !item.is_folder())
        .map(|item| item.name().to_string())
        .ok_or_else(|| GridError::Api("Only apps on a page can be grouped".into()))?;
    let target_item = store.item(target).ok_or(GridError::ItemNotFound(target))?;
    let target_name = target_item.name().to_string();
    let into_folder = target_item.is_folder();

    if source == target {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} cannot be grouped with itself",
            source_name
        ))));
    }

    reconciler.begin_drag(source);
    reconciler.drop_on_item(store, target)?;

    let message = if into_folder {
        CmdMessage::success(format!("Added {} to {}", source_name, target_name))
    } else {
        let folder = layout::locate_folder_of(store.pages(), source)
            .and_then(|(page, slot)| store.pages()[page].get(slot))
            .map(|item| item.name().to_string())
            .unwrap_or_default();
        CmdMessage::success(format!(
            "Created folder {} with {} and {}",
            folder, source_name, target_name
        ))
    };
    Ok(CmdResult::default().with_message(message))
}

/// Drops `source` on the empty area of `page` (0-based).
pub fn move_to_page<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    reconciler: &mut Reconciler,
    source: Placement,
    page: usize,
) -> Result<CmdResult> {
    let name = display_name(store, source);
    if page == store.pages().len() {
        store.append_page();
    }

    let id = match source {
        Placement::Top { id, .. } => {
            reconciler.begin_drag(id);
            id
        }
        Placement::InFolder { folder, app, .. } => {
            reconciler.begin_folder_drag(folder, app);
            app
        }
    };
    if let Err(e) = reconciler.drop_on_page(store, page) {
        reconciler.cancel();
        return Err(e);
    }
    Ok(CmdResult::default().with_message(position_message(store, id, &name)))
}

/// Takes an app out of its folder onto the folder's page.
pub fn ungroup<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    reconciler: &mut Reconciler,
    source: Placement,
) -> Result<CmdResult> {
    let name = display_name(store, source);
    let Placement::InFolder { folder, app, .. } = source else {
        return Err(GridError::Api(format!("{} is not in a folder", name)));
    };
    let folder_name = store
        .item(folder)
        .map(|item| item.name().to_string())
        .unwrap_or_default();

    reconciler.begin_folder_drag(folder, app);
    reconciler.drop_on_dismiss(store)?;

    let mut result = CmdResult::default().with_message(position_message(store, app, &name));
    if store.item(folder).is_none() {
        result.add_message(CmdMessage::info(format!(
            "Folder {} was empty and has been removed",
            folder_name
        )));
    }
    Ok(result)
}
