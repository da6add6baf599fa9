use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "jeopardy", version, about = "Terminal trivia board")]
pub struct Cli {
    /// Base URL of the trivia service
    #[arg(long, value_name = "url")]
    pub api_url: Option<String>,

    /// Number of categories (columns) on the board
    #[arg(long, value_name = "n")]
    pub categories: Option<usize>,

    /// Number of clues per category (rows)
    #[arg(long, value_name = "n")]
    pub clues: Option<usize>,

    /// Seed for category offsets and clue shuffling
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,

    /// Config file [default: <config dir>/config.yaml]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log file [default: <data dir>/jeopardy.log]
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Fetch one board, print its categories and exit without entering the TUI
    #[arg(long)]
    pub check: bool,
}
