//! # lgrid
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/lgrid/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - tracing setup + dispatch (commands.rs)                   │
//! │  - colored terminal output (render.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  launchgrid (crates/launchgrid)                             │
//! │  - API facade, commands, reconciler, pagination, storage    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything inside `launchgrid` is UI agnostic. Terminal I/O, exit codes and
//! the 1-based page numbers users type stay on this side.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
