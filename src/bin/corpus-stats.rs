use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use news_prep::logging;
use news_prep::stats::{read_documents, DatasetStats};

/// Print dataset statistics for an NDJSON file produced by news_prep.
#[derive(Parser, Debug)]
#[command(name = "corpus-stats", version, about = "Summarize a preprocessed NDJSON corpus")]
struct Cli {
    /// Path to the NDJSON file
    path: PathBuf,

    /// Print the statistics as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging(None);
    let args = Cli::parse();

    let loaded = read_documents(&args.path)
        .with_context(|| format!("Failed to load documents from {}", args.path.display()))?;
    let stats = DatasetStats::from_documents(&loaded.documents);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("📊 {}", args.path.display());
        println!("   Total documents: {}", stats.total);
        println!("   Fake news: {}", stats.fake);
        println!("   Real news: {}", stats.real);
        println!("   Avg text length: {}", stats.avg_text_length);
        println!("   Avg title length: {}", stats.avg_title_length);
        if loaded.skipped_lines > 0 {
            println!("   Skipped lines: {}", loaded.skipped_lines);
        }
    }
    Ok(())
}
