//! Debounced reorder preview.
//!
//! Hovering over a neighbour on the same page (or inside the same folder) does
//! not move anything right away. It arms a [`PendingMove`] keyed by the hovered
//! target; a later hover replaces it, and [`super::Reconciler::tick`] only
//! applies it if the target is still the one being hovered when it comes due.

use crate::layout::{self, Page};
use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub target: Uuid,
    pub due: Instant,
}

impl PendingMove {
    pub fn schedule(target: Uuid, now: Instant, delay: Duration) -> Self {
        Self {
            target,
            due: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Moves top-level item `id` into the slot `target` occupies, shifting the items
/// in between. Returns false unless both sit on the same page.
pub(crate) fn move_within_page(pages: &mut [Page], id: Uuid, target: Uuid) -> bool {
    let Some((page, from)) = layout::locate(pages, id) else {
        return false;
    };
    let Some((target_page, to)) = layout::locate(pages, target) else {
        return false;
    };
    if page != target_page || from == to {
        return false;
    }
    let item = pages[page].remove(from);
    pages[page].insert(to, item);
    true
}

/// Same as [`move_within_page`] for two apps of one folder.
pub(crate) fn move_within_folder(pages: &mut [Page], folder: Uuid, app: Uuid, target: Uuid) -> bool {
    let Some((page, slot)) = layout::locate(pages, folder) else {
        return false;
    };
    let Some(folder) = pages[page][slot].as_folder_mut() else {
        return false;
    };
    let (Some(from), Some(to)) = (folder.position(app), folder.position(target)) else {
        return false;
    };
    if from == to {
        return false;
    }
    folder.move_app(from, to);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::{app, names};
    use crate::model::{AppItem, Folder, GridItem};

    #[test]
    fn pending_move_comes_due_after_delay() {
        let now = Instant::now();
        let pending = PendingMove::schedule(Uuid::new_v4(), now, Duration::from_millis(500));
        assert!(!pending.is_due(now));
        assert!(!pending.is_due(now + Duration::from_millis(499)));
        assert!(pending.is_due(now + Duration::from_millis(500)));
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let now = Instant::now();
        assert!(PendingMove::schedule(Uuid::new_v4(), now, Duration::ZERO).is_due(now));
    }

    #[test]
    fn moving_forward_lands_on_target_slot() {
        let mut pages = vec![vec![app("A", 0), app("B", 0), app("C", 0), app("D", 0)]];
        let (a, c) = (pages[0][0].id(), pages[0][2].id());
        assert!(move_within_page(&mut pages, a, c));
        assert_eq!(names(&pages), vec![vec!["B", "C", "A", "D"]]);
    }

    #[test]
    fn moving_backward_lands_on_target_slot() {
        let mut pages = vec![vec![app("A", 0), app("B", 0), app("C", 0), app("D", 0)]];
        let (d, b) = (pages[0][3].id(), pages[0][1].id());
        assert!(move_within_page(&mut pages, d, b));
        assert_eq!(names(&pages), vec![vec!["A", "D", "B", "C"]]);
    }

    #[test]
    fn items_on_different_pages_are_left_alone() {
        let mut pages = vec![vec![app("A", 0)], vec![app("B", 1)]];
        let (a, b) = (pages[0][0].id(), pages[1][0].id());
        assert!(!move_within_page(&mut pages, a, b));
        assert_eq!(names(&pages), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn folder_apps_reorder_in_place() {
        let apps: Vec<AppItem> = ["X", "Y", "Z"]
            .iter()
            .map(|n| AppItem::new(*n, format!("/{}.app", n), 0))
            .collect();
        let (x, z) = (apps[0].id, apps[2].id);
        let folder = Folder::new("F", 0, apps).unwrap();
        let folder_id = folder.id;
        let mut pages = vec![vec![GridItem::Folder(folder)]];

        assert!(move_within_folder(&mut pages, folder_id, z, x));
        let order: Vec<&str> = pages[0][0]
            .as_folder()
            .unwrap()
            .apps()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(order, vec!["Z", "X", "Y"]);
        assert!(!move_within_folder(&mut pages, folder_id, z, Uuid::new_v4()));
    }
}
