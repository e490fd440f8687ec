//! CLI module for tubenote.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// tubenote - YouTube summaries into Notion
///
/// Fetches captions for a video or every video of a playlist, summarizes them
/// with an LLM following your instructions, and files each summary as a Notion page.
#[derive(Parser, Debug)]
#[command(name = "tubenote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TUBENOTE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a video or playlist into Notion pages
    Run {
        /// YouTube video or playlist URL (prompted for if omitted)
        url: Option<String>,

        /// Summarization instructions (prompted for if omitted)
        #[arg(short, long, conflicts_with = "instructions_file")]
        instructions: Option<String>,

        /// Read summarization instructions from a file
        #[arg(long)]
        instructions_file: Option<String>,

        /// Maximum number of new videos to process
        #[arg(long)]
        limit: Option<usize>,

        /// Show what would be processed without calling any service
        #[arg(long)]
        dry_run: bool,
    },

    /// Show whether a URL is a video or a playlist
    Resolve {
        /// YouTube URL
        url: String,
    },

    /// List videos already published
    List,

    /// Check credentials and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
