use std::path::PathBuf;

use clap::Parser;

use crate::session::SessionMode;

/// Vocabulary flashcards from a spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "kelime", version)]
pub struct Args {
    /// Path to a spreadsheet (.xlsx, .xls, .ods or .csv) with the columns
    /// English, Turkish and Example Sentence
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Only draw words that are not learned yet and finish once all are learned
    #[arg(long)]
    pub drill: bool,

    /// Seed for the word picker, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn mode(&self) -> SessionMode {
        if self.drill {
            SessionMode::Drill
        } else {
            SessionMode::Browse
        }
    }
}
