//! # Launchgrid
//!
//! A paginated launcher grid: launchable apps laid out on fixed-capacity pages,
//! grouped into folders, rearranged by drag-and-drop, sorted, and persisted
//! across restarts.
//!
//! This crate is the UI-agnostic layout engine. It never discovers apps and
//! never draws anything; it owns which page each item is on, its order within
//! the page, and folder membership.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (the `lgrid` CLI, a GUI shell, …)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves paths and folder names → ids / placements       │
//! │  - Dispatches to command modules, returns `CmdResult`       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                                 │
//! │  - Gestures, sort, import/export, hide, rename, reset       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: drag reconciler, sort engine, pagination             │
//! │  Storage: LayoutStore over a LayoutBackend (fs / memory)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! After any rebuild or cascade:
//! - every item's `page` equals the index of the page holding it
//! - no page holds more than `columns × rows` items
//! - no folder is empty, and folders never contain folders
//! - there is always at least one page
//!
//! ## Threading
//!
//! Everything runs on one logical thread. Mutations complete, including the
//! save, before the next event is handled. The only deferred work is the
//! reorder preview, which the caller drives through
//! [`drag::Reconciler::tick`].

pub mod api;
pub mod catalog;
pub mod codec;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod init;
pub mod layout;
pub mod model;
pub mod record;
pub mod sort;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
