use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

use crate::cleaner::{char_len, clean_text};
use crate::config::PipelineConfig;
use crate::constants::{MIN_TITLE_LENGTH, PROGRESS_INTERVAL, SOURCE_NAME};
use crate::error::{PrepError, Result};
use crate::idempotency::{compute_doc_id, DedupSet};
use crate::loader::{load_csv, RawTable};
use crate::mapper::{ColumnMap, MappedFields};
use crate::metrics::{core::time_operation, FilterMetrics, IngestMetrics, OutputMetrics};
use crate::stats::DatasetStats;
use crate::types::{Document, Label, PipelineResult, SourceResult};
use crate::writer::write_documents;

/// Why a row did not become a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooShort,
    Duplicate,
}

pub struct Pipeline;

impl Pipeline {
    /// Clean a mapped row and apply the length thresholds
    fn build_document(fields: MappedFields, label: Label, min_length: usize) -> Option<Document> {
        let title = clean_text(&fields.title);
        let text = clean_text(&fields.text);

        if char_len(&text) < min_length || char_len(&title) < MIN_TITLE_LENGTH {
            return None;
        }

        Some(Document {
            doc_id: compute_doc_id(&title, &text),
            title,
            text,
            label,
            url: fields.url,
            date: fields.date,
            source: SOURCE_NAME.to_string(),
        })
    }

    /// Length checks run before the dedupe check, so a short row never
    /// enters the dedupe set.
    fn filter_row(
        fields: MappedFields,
        label: Label,
        min_length: usize,
        seen: &mut DedupSet,
    ) -> std::result::Result<Document, SkipReason> {
        let doc = Self::build_document(fields, label, min_length).ok_or(SkipReason::TooShort)?;
        if !seen.insert(&doc.title, &doc.text) {
            return Err(SkipReason::Duplicate);
        }
        Ok(doc)
    }

    /// Turn an already loaded table into documents, in row order.
    ///
    /// Uses a fresh dedupe set, so duplicates are only caught within `table`.
    pub fn process_table(
        table: &RawTable,
        label: Label,
        min_length: usize,
        result: &mut SourceResult,
    ) -> Vec<Document> {
        let columns = ColumnMap::from_headers(table.headers.iter().map(String::as_str));
        if columns.is_empty() {
            warn!("No recognizable columns in {} headers: {:?}", label, table.headers);
        }

        let mut seen = DedupSet::new();
        let mut documents = Vec::new();
        result.rows_read = table.len();

        for row in &table.rows {
            match Self::filter_row(columns.apply(row), label, min_length, &mut seen) {
                Ok(doc) => {
                    documents.push(doc);
                    if documents.len() % PROGRESS_INTERVAL == 0 {
                        println!("   Processed {} documents...", documents.len());
                    }
                }
                Err(SkipReason::TooShort) => result.skipped_short += 1,
                Err(SkipReason::Duplicate) => result.skipped_duplicate += 1,
            }
        }

        result.kept = documents.len();
        FilterMetrics::record_kept(label.as_str(), result.kept);
        FilterMetrics::record_skipped_short(label.as_str(), result.skipped_short);
        FilterMetrics::record_skipped_duplicate(label.as_str(), result.skipped_duplicate);
        documents
    }

    /// Load and filter one input file.
    ///
    /// Failures are contained here: the file contributes no documents and the
    /// error is recorded on the returned result.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn process_file(path: &Path, label: Label, min_length: usize) -> (Vec<Document>, SourceResult) {
        let mut result = SourceResult::new(label, path.to_path_buf());
        let _timing = time_operation(IngestMetrics::duration_histogram(), label.as_str());

        println!("📄 Processing {} with label: {}", path.display(), label);
        let table = match load_csv(path) {
            Ok(table) => table,
            Err(e) => {
                error!("Error processing {}: {}", path.display(), e);
                println!("❌ Error processing {}: {}", path.display(), e);
                IngestMetrics::record_file_failed(label.as_str());
                result.error = Some(e.to_string());
                return (Vec::new(), result);
            }
        };
        println!("   Found {} rows in {}", table.len(), path.display());
        IngestMetrics::record_file_loaded(label.as_str(), table.len());

        let documents = Self::process_table(&table, label, min_length, &mut result);
        info!(
            kept = result.kept,
            skipped_short = result.skipped_short,
            skipped_duplicate = result.skipped_duplicate,
            "finished file"
        );
        println!(
            "✅ Successfully processed {} documents from {}",
            documents.len(),
            path.display()
        );
        (documents, result)
    }

    /// Process every expected input file in order and concatenate the results.
    pub fn collect(config: &PipelineConfig) -> Result<(Vec<Document>, Vec<SourceResult>)> {
        if !config.input_dir.exists() {
            return Err(PrepError::InputDirMissing(config.input_dir.clone()));
        }

        let mut all_documents = Vec::new();
        let mut sources = Vec::new();

        for label in Label::processing_order() {
            let path = config.input_dir.join(label.input_file());
            if !path.exists() {
                warn!("{} not found", path.display());
                println!("⚠️  Warning: {} not found", path.display());
                IngestMetrics::record_file_missing(label.as_str());
                sources.push(SourceResult::missing(label, path));
                continue;
            }
            let (documents, result) = Self::process_file(&path, label, config.min_length);
            all_documents.extend(documents);
            sources.push(result);
        }

        Ok((all_documents, sources))
    }

    /// Run the complete pipeline and write the output file
    pub fn run(config: &PipelineConfig) -> Result<PipelineResult> {
        info!("🚀 Starting preprocessing of {}", config.input_dir.display());
        let (mut documents, sources) = Self::collect(config)?;

        let truncated = truncate_documents(&mut documents, config.max_docs);
        if truncated > 0 {
            println!("✂️  Limiting to {} documents", documents.len());
            OutputMetrics::record_truncated(truncated);
        }

        println!("💾 Writing {} documents to {}", documents.len(), config.output.display());
        write_documents(&config.output, &documents)?;
        OutputMetrics::record_written(documents.len());
        debug!("output written");

        Ok(PipelineResult {
            stats: DatasetStats::from_documents(&documents),
            sources,
            truncated,
            written: documents.len(),
            output_file: config.output.clone(),
        })
    }
}

/// Keep only the first `max_docs` documents; returns how many were dropped
pub fn truncate_documents(documents: &mut Vec<Document>, max_docs: Option<usize>) -> usize {
    match max_docs {
        Some(max) if max > 0 && documents.len() > max => {
            let dropped = documents.len() - max;
            documents.truncate(max);
            dropped
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawRow;

    const BODY: &str = "The quick brown fox jumps over the lazy dog while reporters watch. \
                        Officials confirmed the event on Tuesday and promised a full report soon.";

    fn table(rows: &[(&str, &str)]) -> RawTable {
        let headers = vec!["title".to_string(), "text".to_string(), "date".to_string()];
        RawTable {
            rows: rows
                .iter()
                .map(|(title, text)| {
                    RawRow::from_pairs([("title", *title), ("text", *text), ("date", "2017")])
                })
                .collect(),
            headers,
        }
    }

    fn run_table(t: &RawTable, min_length: usize) -> (Vec<Document>, SourceResult) {
        let mut result = SourceResult::new(Label::Fake, "Fake.csv".into());
        let docs = Pipeline::process_table(t, Label::Fake, min_length, &mut result);
        (docs, result)
    }

    #[test]
    fn test_short_title_dropped() {
        let long_text = "x".repeat(200);
        let (docs, result) = run_table(&table(&[("Short", &long_text)]), 100);
        assert!(docs.is_empty());
        assert_eq!(result.skipped_short, 1);
    }

    #[test]
    fn test_short_rows_never_count_as_duplicates() {
        let long_text = "y".repeat(200);
        let (docs, result) = run_table(&table(&[("Short", &long_text), ("Short", &long_text)]), 100);
        assert!(docs.is_empty());
        assert_eq!(result.skipped_short, 2);
        assert_eq!(result.skipped_duplicate, 0);
    }

    #[test]
    fn test_short_text_dropped() {
        let (docs, result) = run_table(&table(&[("A perfectly fine title", "too short")]), 100);
        assert!(docs.is_empty());
        assert_eq!(result.skipped_short, 1);
    }

    #[test]
    fn test_min_length_is_configurable() {
        let (docs, _) = run_table(&table(&[("A perfectly fine title", "short body")]), 5);
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_duplicate_in_same_table_dropped() {
        let (docs, result) = run_table(
            &table(&[
                ("First headline here", BODY),
                ("First headline here", BODY),
                ("Second headline here", BODY),
            ]),
            100,
        );
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].title, "First headline here");
        assert_eq!(docs[1].title, "Second headline here");
        assert_eq!(result.skipped_duplicate, 1);
        assert_eq!(result.kept, 2);
        assert_eq!(result.rows_read, 3);
    }

    #[test]
    fn test_duplicate_detected_after_cleaning() {
        let noisy = "  First   headline\nhere!!! ## ";
        let (docs, result) = run_table(
            &table(&[("First headline here!!!", BODY), (noisy, BODY)]),
            100,
        );
        assert_eq!(docs.len(), 1);
        assert_eq!(result.skipped_duplicate, 1);
    }

    #[test]
    fn test_document_fields() {
        let (docs, _) = run_table(&table(&[("Headline with a link https://x.co/y", BODY)]), 100);
        let doc = &docs[0];
        assert_eq!(doc.title, "Headline with a link");
        assert_eq!(doc.doc_id, compute_doc_id(&doc.title, &doc.text));
        assert_eq!(doc.label, Label::Fake);
        assert_eq!(doc.date, "2017");
        assert_eq!(doc.url, "");
        assert_eq!(doc.source, "kaggle");
    }

    #[test]
    fn test_truncate_documents() {
        let (mut docs, _) = run_table(
            &table(&[
                ("Headline number one", BODY),
                ("Headline number two", BODY),
                ("Headline number three", BODY),
            ]),
            100,
        );
        assert_eq!(truncate_documents(&mut docs, None), 0);
        assert_eq!(truncate_documents(&mut docs, Some(5)), 0);
        assert_eq!(truncate_documents(&mut docs, Some(2)), 1);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].title, "Headline number two");
    }
}
