//! Dataset statistics over emitted documents, and a tolerant NDJSON reader
//! for files produced by earlier runs.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::cleaner::char_len;
use crate::error::Result;
use crate::types::{Document, Label};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    pub fake: usize,
    pub real: usize,
    pub avg_text_length: usize,
    pub avg_title_length: usize,
}

impl DatasetStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let total = documents.len();
        let fake = documents.iter().filter(|d| d.label == Label::Fake).count();
        let real = documents.iter().filter(|d| d.label == Label::Real).count();

        let text_chars: usize = documents.iter().map(|d| char_len(&d.text)).sum();
        let title_chars: usize = documents.iter().map(|d| char_len(&d.title)).sum();

        Self {
            total,
            fake,
            real,
            avg_text_length: rounded_mean(text_chars, total),
            avg_title_length: rounded_mean(title_chars, total),
        }
    }
}

fn rounded_mean(sum: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as usize
}

/// Documents recovered from an NDJSON file plus the number of lines skipped
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub documents: Vec<Document>,
    pub skipped_lines: usize,
}

/// Read every parsable document from `path`; blank lines are ignored and
/// unparsable lines are skipped with a warning.
pub fn read_documents(path: &Path) -> Result<LoadedDocuments> {
    let data = fs::read_to_string(path)?;
    let mut loaded = LoadedDocuments::default();

    for (lineno, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Document>(line) {
            Ok(doc) => loaded.documents.push(doc),
            Err(e) => {
                let preview: String = line.chars().take(100).collect();
                warn!("Failed to parse line {}: {} ({}...)", lineno + 1, e, preview);
                loaded.skipped_lines += 1;
            }
        }
    }

    info!(
        "Loaded {} documents from {} ({} lines skipped)",
        loaded.documents.len(),
        path.display(),
        loaded.skipped_lines
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, text: &str, label: Label) -> Document {
        Document {
            doc_id: crate::idempotency::compute_doc_id(title, text),
            title: title.to_string(),
            text: text.to_string(),
            label,
            url: String::new(),
            date: String::new(),
            source: "kaggle".to_string(),
        }
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(DatasetStats::from_documents(&[]), DatasetStats::default());
    }

    #[test]
    fn test_counts_and_averages() {
        let docs = vec![
            doc("0123456789", "aaaa", Label::Fake),
            doc("01234567890", "aaaaa", Label::Real),
            doc("012345678901", "aaaaaaa", Label::Fake),
        ];
        let stats = DatasetStats::from_documents(&docs);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.fake, 2);
        assert_eq!(stats.real, 1);
        // (4 + 5 + 7) / 3 = 5.33
        assert_eq!(stats.avg_text_length, 5);
        // (10 + 11 + 12) / 3 = 11
        assert_eq!(stats.avg_title_length, 11);
    }

    #[test]
    fn test_read_documents_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.jsonl");
        let good = serde_json::to_string(&doc("A long enough title", "body", Label::Real)).unwrap();
        fs::write(&path, format!("{good}\n\nnot json\n{{\"docId\":1}}\n{good}\n")).unwrap();

        let loaded = read_documents(&path).unwrap();
        assert_eq!(loaded.documents.len(), 2);
        assert_eq!(loaded.skipped_lines, 2);
    }

    #[test]
    fn test_read_documents_missing_file() {
        assert!(read_documents(Path::new("/no/such/file.jsonl")).is_err());
    }
}
