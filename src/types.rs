use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::constants;
use crate::stats::DatasetStats;

/// Classification tag, decided by which input file a row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "fake",
            Label::Real => "real",
        }
    }

    /// File name inside the input directory that carries this label
    pub fn input_file(&self) -> &'static str {
        match self {
            Label::Fake => constants::FAKE_FILE,
            Label::Real => constants::TRUE_FILE,
        }
    }

    /// Sources in processing order: fake rows always precede real rows
    pub fn processing_order() -> [Label; 2] {
        [Label::Fake, Label::Real]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of tabular input, cells kept in header order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    #[cfg(test)]
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            cells: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Column names in header order
    #[cfg(test)]
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Cell value at a column position; empty string when absent
    pub fn value_at(&self, index: usize) -> &str {
        self.cells.get(index).map(|(_, v)| v.as_str()).unwrap_or("")
    }

    /// First cell whose column matches `name` exactly
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Canonical cleaned article, one per output line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "docId")]
    pub doc_id: String,
    pub title: String,
    pub text: String,
    pub label: Label,
    pub url: String,
    pub date: String,
    pub source: String,
}

/// Outcome of processing one input file
#[derive(Debug, Clone, Serialize)]
pub struct SourceResult {
    pub label: Label,
    pub path: PathBuf,
    pub found: bool,
    pub rows_read: usize,
    pub kept: usize,
    pub skipped_short: usize,
    pub skipped_duplicate: usize,
    pub error: Option<String>,
}

impl SourceResult {
    pub fn new(label: Label, path: PathBuf) -> Self {
        Self {
            label,
            path,
            found: true,
            rows_read: 0,
            kept: 0,
            skipped_short: 0,
            skipped_duplicate: 0,
            error: None,
        }
    }

    pub fn missing(label: Label, path: PathBuf) -> Self {
        Self {
            found: false,
            ..Self::new(label, path)
        }
    }
}

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub stats: DatasetStats,
    pub sources: Vec<SourceResult>,
    pub truncated: usize,
    pub written: usize,
    pub output_file: PathBuf,
}
