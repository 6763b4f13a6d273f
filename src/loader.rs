use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::{PrepError, Result};
use crate::types::RawRow;

/// A fully materialized CSV file
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// column names, from the header row
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read an entire comma-separated file into memory.
///
/// Records shorter than the header are padded with empty cells. A record with
/// more fields than the header, or invalid UTF-8, fails the whole file so
/// callers never see a partial table.
pub fn load_csv(path: &Path) -> Result<RawTable> {
    let file = File::open(path)?;
    load_csv_from_reader(file)
}

pub fn load_csv_from_reader<R: std::io::Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(PrepError::ExtraFields {
                line: record.position().map_or(0, |p| p.line()),
                found: record.len(),
                expected: headers.len(),
            });
        }
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), record.get(i).unwrap_or_default().to_string()))
            .collect();
        rows.push(RawRow::new(cells));
    }

    debug!("loaded {} rows with {} columns", rows.len(), headers.len());
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_rows_in_order() {
        let data = "title,text,date\nFirst,Body one,2017\n\"Second, quoted\",\"Body\ntwo\",2018\n";
        let table = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["title", "text", "date"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("title"), Some("First"));
        assert_eq!(table.rows[1].get("title"), Some("Second, quoted"));
        assert_eq!(table.rows[1].get("text"), Some("Body\ntwo"));
    }

    #[test]
    fn test_empty_cells_are_empty_strings() {
        let data = "title,text\n,Body\n";
        let table = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.rows[0].get("title"), Some(""));
    }

    #[test]
    fn test_extra_field_fails_whole_file() {
        let data = "title,text\nok,row\nbad,row,extra\n";
        let err = load_csv_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PrepError::ExtraFields { line: 3, found: 3, expected: 2 }
        ));
    }

    #[test]
    fn test_short_record_is_padded() {
        let data = "title,text,subject,date\nFirst,Body one,news,2017\nSecond,Body two,news\n";
        let table = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].get("subject"), Some("news"));
        assert_eq!(table.rows[1].get("date"), Some(""));
        assert_eq!(table.rows[1].value_at(3), "");
    }

    #[test]
    fn test_header_only_file() {
        let table = load_csv_from_reader("title,text\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, crate::error::PrepError::Io(_)));
    }
}
