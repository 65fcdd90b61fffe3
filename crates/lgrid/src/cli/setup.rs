use clap::{Parser, Subcommand};
use launchgrid::sort::SortOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lgrid", bin_name = "lgrid", version)]
#[command(about = "Arrange launcher apps into pages and folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog manifest to read apps from (defaults to <data dir>/catalog.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every page (default)
    #[command(alias = "ls")]
    List {
        /// Preview the layout with a different number of apps per page
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
        per_page: Option<u16>,
    },

    /// Reorder all items (default, name, type, last-opened, install-date)
    Sort {
        order: SortOrder,

        /// Persist the sorted arrangement
        #[arg(long)]
        save: bool,
    },

    /// Put an item where another one is (same-page reorder or cross-page move)
    Place { path: String, target: String },

    /// Drop an app onto another app or a folder
    Group {
        path: String,

        /// App path or folder name
        target: String,
    },

    /// Drop an item onto a page (1-based; one past the last adds a page)
    #[command(alias = "mv")]
    Move {
        path: String,

        #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..))]
        page: u16,
    },

    /// Take an app out of its folder
    Ungroup { path: String },

    /// Rename a folder (by name, or by the path of one of its apps)
    Rename { folder: String, name: String },

    /// Hide an app from the grid
    Hide { path: String },

    /// Show a hidden app again
    Unhide { path: String },

    /// Write the layout document into a directory
    Export {
        /// Target directory (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Replace the layout with a previously exported document
    Import {
        /// Source directory (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Forget the saved layout and start over from the catalog
    Reset,
}
