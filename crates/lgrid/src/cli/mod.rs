//! # CLI Behavior
//!
//! One UI client for the launchgrid engine. Items are named by their external
//! reference (the app path); folders by name or by the path of one of their apps.
//!
//! Running `lgrid` with no arguments defaults to `lgrid list`.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch from parsed arguments to the API, tracing setup
//! - `render`: page and message output
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
