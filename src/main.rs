use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use news_prep::config::{self, FileConfig, Overrides};
use news_prep::metrics::{init_metrics, render_snapshot};
use news_prep::{logging, Pipeline, PrepError};

#[derive(Parser, Debug)]
#[command(name = "news_prep")]
#[command(about = "Preprocess the Fake and Real News dataset into NDJSON")]
#[command(version)]
struct Cli {
    /// Directory containing Fake.csv and True.csv
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Output NDJSON file path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Minimum cleaned text length in characters [default: 100]
    #[arg(long)]
    min_length: Option<usize>,

    /// Maximum number of documents to write (first N in processing order)
    #[arg(long)]
    max_docs: Option<usize>,

    /// Optional TOML config file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write JSON logs to a daily-rotated file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write a Prometheus text snapshot of run metrics to this file
    #[arg(long)]
    metrics_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            input_dir: self.input_dir.clone(),
            out: self.out.clone(),
            min_length: self.min_length,
            max_docs: self.max_docs,
            log_dir: self.log_dir.clone(),
            metrics_file: self.metrics_file.clone(),
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = config::resolve(file_config, cli.overrides())?;

    logging::init_logging(config.log_dir.as_deref());
    if config.metrics_file.is_some() {
        init_metrics();
    }

    let result = Pipeline::run(&config)?;

    println!("\n📊 Preprocessing complete!");
    println!("   Total documents: {}", result.stats.total);
    println!("   Fake news: {}", result.stats.fake);
    println!("   Real news: {}", result.stats.real);
    println!("   Avg text length: {}", result.stats.avg_text_length);
    println!("   Avg title length: {}", result.stats.avg_title_length);
    println!("   Output file: {}", result.output_file.display());

    let failed: Vec<_> = result.sources.iter().filter(|s| s.error.is_some()).collect();
    if !failed.is_empty() {
        println!("\n⚠️  Files that contributed no documents:");
        for source in failed {
            println!("   - {}", source.path.display());
        }
    }

    if let Some(path) = &config.metrics_file {
        let snapshot = render_snapshot().unwrap_or_default();
        std::fs::write(path, snapshot)
            .with_context(|| format!("Failed to write metrics to {}", path.display()))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(PrepError::InputDirMissing(dir)) = e.downcast_ref::<PrepError>() {
                println!("Error: Input directory {} does not exist", dir.display());
            } else {
                eprintln!("Error: {e:#}");
            }
            error!("run failed: {:#}", e);
            ExitCode::from(1)
        }
    }
}
