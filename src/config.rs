use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MIN_TEXT_LENGTH;
use crate::error::{PrepError, Result};

/// Settings for one preprocessing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub min_length: usize,
    /// `None` keeps every document
    pub max_docs: Option<usize>,
    pub log_dir: Option<PathBuf>,
    pub metrics_file: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output: output.into(),
            min_length: DEFAULT_MIN_TEXT_LENGTH,
            max_docs: None,
            log_dir: None,
            metrics_file: None,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// A limit of zero means no limit
    pub fn with_max_docs(mut self, max_docs: Option<usize>) -> Self {
        self.max_docs = max_docs.filter(|&n| n > 0);
        self
    }
}

/// Optional TOML file; every key may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub min_length: Option<usize>,
    pub max_docs: Option<usize>,
    pub log_dir: Option<PathBuf>,
    pub metrics_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PrepError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Values given on the command line; these win over the file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub input_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub min_length: Option<usize>,
    pub max_docs: Option<usize>,
    pub log_dir: Option<PathBuf>,
    pub metrics_file: Option<PathBuf>,
}

/// Layer defaults, then the file, then command line overrides
pub fn resolve(file: FileConfig, cli: Overrides) -> Result<PipelineConfig> {
    let input_dir = cli
        .input_dir
        .or(file.input_dir)
        .ok_or_else(|| PrepError::Config("input directory is required (--input-dir)".to_string()))?;
    let output = cli
        .out
        .or(file.out)
        .ok_or_else(|| PrepError::Config("output file is required (--out)".to_string()))?;

    let mut config = PipelineConfig::new(input_dir, output)
        .with_max_docs(cli.max_docs.or(file.max_docs));
    if let Some(min_length) = cli.min_length.or(file.min_length) {
        config = config.with_min_length(min_length);
    }
    config.log_dir = cli.log_dir.or(file.log_dir);
    config.metrics_file = cli.metrics_file.or(file.metrics_file);
    Ok(config)
}
