//! # Sort Orders
//!
//! Sorting works on the flattened item list, ignoring current page boundaries.
//! Every order except [`SortOrder::Default`] is a stable comparator sort; the
//! store then resets each item's declared page to 0 and paginates from scratch.
//! [`SortOrder::Default`] bypasses the comparator and reloads the saved layout.
//!
//! | Order          | Key                                                           |
//! |----------------|---------------------------------------------------------------|
//! | `name`         | display name, ascending, case-sensitive                       |
//! | `type`         | folders first, then name                                      |
//! | `last-opened`  | newest first; undated after dated; undated ties by name       |
//! | `install-date` | as `last-opened`, keyed on install time                       |

use crate::model::GridItem;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Default,
    Name,
    Type,
    LastOpened,
    InstallDate,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::Name,
        SortOrder::Type,
        SortOrder::LastOpened,
        SortOrder::InstallDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Name => "name",
            SortOrder::Type => "type",
            SortOrder::LastOpened => "last-opened",
            SortOrder::InstallDate => "install-date",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "default" => Ok(SortOrder::Default),
            "name" => Ok(SortOrder::Name),
            "type" | "item-type" => Ok(SortOrder::Type),
            "last-opened" | "recent" => Ok(SortOrder::LastOpened),
            "install-date" | "installed" => Ok(SortOrder::InstallDate),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

fn by_name(a: &GridItem, b: &GridItem) -> Ordering {
    a.name().cmp(b.name())
}

fn by_type(a: &GridItem, b: &GridItem) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| by_name(a, b))
}

fn by_date(
    a: &GridItem,
    b: &GridItem,
    key: impl Fn(&GridItem) -> Option<DateTime<Utc>>,
) -> Ordering {
    match (key(a), key(b)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => by_name(a, b),
    }
}

/// Orders `items` in place. [`SortOrder::Default`] leaves them untouched.
pub fn sort_items(items: &mut [GridItem], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::Name => items.sort_by(by_name),
        SortOrder::Type => items.sort_by(by_type),
        SortOrder::LastOpened => items.sort_by(|a, b| by_date(a, b, GridItem::last_opened)),
        SortOrder::InstallDate => items.sort_by(|a, b| by_date(a, b, GridItem::installed)),
    }
}
