mod index;
mod output;
mod query;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "widx")]
#[command(about = "Concurrent word-to-file index with prefix search")]
struct Cli {
    /// Directory tree to index
    directory: PathBuf,

    /// Word or prefix to search for (case-insensitive)
    term: String,

    /// Number of concurrent file readers
    #[arg(short, long, default_value_t = index::build::DEFAULT_WORKERS)]
    workers: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = index::IndexOptions {
        workers: cli.workers,
    };
    let (trie, stats) = index::build_index(&cli.directory, &options)?;

    if stats.files_skipped > 0 {
        eprintln!(
            "index built successfully: {} files, {} distinct words ({} files skipped)",
            stats.files_indexed,
            trie.word_count(),
            stats.files_skipped
        );
    } else {
        eprintln!(
            "index built successfully: {} files, {} distinct words",
            stats.files_indexed,
            trie.word_count()
        );
    }

    let results = query::search(&trie, &cli.term);
    output::print_results(&cli.term, &results)?;

    Ok(())
}
