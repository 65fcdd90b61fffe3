//! # CLI Layer
//!
//! This module is **one possible UI client** for launchgrid, not the engine itself.
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Converts 1-based page numbers from the user into 0-based ones
//! - Formats output for human consumption
//!
//! Each invocation is one short session: load, run one command, render. Gestures
//! are replayed whole through the API, so the settle delay never blocks.

use super::render::{print_messages, print_pages};
use super::setup::{Cli, Commands};
use clap::Parser;
use launchgrid::api::GridApi;
use launchgrid::commands::CmdResult;
use launchgrid::error::{GridError, Result};
use launchgrid::init::initialize;
use launchgrid::store::FsBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LAUNCHGRID_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize(None, cli.catalog.clone())?;
    let mut api = ctx.api;

    let command = cli.command.unwrap_or(Commands::List { per_page: None });
    let show_pages = matches!(
        command,
        Commands::List { .. } | Commands::Sort { .. } | Commands::Reset
    );

    let result = dispatch(&mut api, command)?;
    if show_pages && !result.pages.is_empty() {
        print_pages(&result.pages);
    }
    print_messages(&result.messages);

    if let Some(report) = result.transfer.filter(|r| !r.success) {
        return Err(GridError::Api(format!(
            "transfer did not complete ({})",
            report.path.display()
        )));
    }
    Ok(())
}

fn dispatch(api: &mut GridApi<FsBackend>, command: Commands) -> Result<CmdResult> {
    match command {
        Commands::List { per_page: None } => api.list(),
        Commands::List {
            per_page: Some(n),
        } => api.recalculate(usize::from(n)),
        Commands::Sort { order, save } => api.sort(order, save),
        Commands::Place { path, target } => api.place(&path, &target),
        Commands::Group { path, target } => api.group(&path, &target),
        Commands::Move { path, page } => api
            .move_to_page(&path, usize::from(page) - 1)
            .map_err(|e| match e {
                GridError::PageOutOfRange(p) => GridError::PageOutOfRange(p + 1),
                other => other,
            }),
        Commands::Ungroup { path } => api.ungroup(&path),
        Commands::Rename { folder, name } => api.rename_folder(&folder, &name),
        Commands::Hide { path } => api.hide(&path),
        Commands::Unhide { path } => api.unhide(&path),
        Commands::Export { dir } => api.export(&resolve_dir(dir)?),
        Commands::Import { dir } => api.import(&resolve_dir(dir)?),
        Commands::Reset => api.reset(),
    }
}

fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(GridError::Io),
    }
}

/// Logs go to stderr so they never mix with rendered pages. `LAUNCHGRID_LOG`
/// takes an `EnvFilter` directive; `-v` raises the default from `warn` to `debug`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
