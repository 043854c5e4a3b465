use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// `linktitle` - turn URLs into titled markdown links.
#[derive(Parser, Debug)]
#[command(name = "linktitle")]
#[command(version)]
#[command(about = "Turn pasted URLs into titled markdown links.", long_about = None)]
pub struct Cli {
    /// Settings file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the title of a page, escaped and shortened per settings
    Title {
        /// Page URL
        url: String,
    },

    /// Print a titled markdown link for a URL
    Convert {
        /// Page URL
        url: String,
    },

    /// Print a markdown link to the first search result for a query
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Print the favicon image tag for a URL
    Favicon {
        /// Page URL
        url: String,
    },

    /// Paste into a file at a byte offset, converting URLs like the editor would
    Paste {
        /// Markdown file to edit in place
        file: PathBuf,

        /// Selection start (byte offset)
        #[arg(long)]
        offset: usize,

        /// Selection end (byte offset, default: same as --offset)
        #[arg(long)]
        end: Option<usize>,

        /// Text to paste (default: read from stdin)
        #[arg(long)]
        text: Option<String>,
    },

    /// Add a fetched title to the URL or link selected in a file
    Enhance {
        /// Markdown file to edit in place
        file: PathBuf,

        /// Selection start (byte offset)
        #[arg(long)]
        offset: usize,

        /// Selection end (byte offset)
        #[arg(long)]
        end: usize,

        /// Insert the favicon instead of fetching a title
        #[arg(long)]
        favicon: bool,
    },

    /// Show the settings file location and contents
    Config,
}
