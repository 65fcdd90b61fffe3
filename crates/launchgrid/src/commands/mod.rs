//! # Command Layer
//!
//! The business logic of launchgrid. Each command lives in its own submodule as
//! a plain function over a [`crate::store::LayoutStore`] (and, for gestures, a
//! [`crate::drag::Reconciler`]).
//!
//! Commands:
//! - operate on resolved ids and [`crate::layout::Placement`]s, never on raw user input
//! - return a structured [`CmdResult`] with leveled messages and, where useful,
//!   the resulting pages
//! - never touch stdout, stderr or exit codes
//!
//! Command tests run against `MemBackend`; this is where most behavioural
//! testing lives.
//!
//! ## Command Modules
//!
//! - [`pages`]: list the layout, recalculate pages for a new capacity
//! - [`sort`]: apply a sort order, optionally persisting it
//! - [`arrange`]: place, group, move and ungroup through the drag reconciler
//! - [`folders`]: rename folders
//! - [`visibility`]: hide and unhide apps
//! - [`transfer`]: export and import the layout document
//! - [`reset`]: forget the saved arrangement
//! - [`helpers`]: reference resolution shared by the API

use crate::layout::Page;
use serde::Serialize;

pub mod arrange;
pub mod folders;
pub mod helpers;
pub mod pages;
pub mod reset;
pub mod sort;
pub mod transfer;
pub mod visibility;

pub use transfer::TransferReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Pages to display, when the command produces a view.
    pub pages: Vec<Page>,
    pub messages: Vec<CmdMessage>,
    /// Outcome of an export or import.
    pub transfer: Option<TransferReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_pages(mut self, pages: Vec<Page>) -> Self {
        self.pages = pages;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
