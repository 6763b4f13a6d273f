//! Heuristic mapping of arbitrary source columns onto the canonical fields.

use crate::types::RawRow;

/// Canonical field a source column can feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Title,
    Text,
    Url,
    Date,
}

/// Classify a column name; rules are checked in order and the first hit wins
pub fn classify_column(name: &str) -> Option<TargetField> {
    let lower = name.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has(&["title"]) {
        Some(TargetField::Title)
    } else if has(&["text", "content", "article"]) {
        Some(TargetField::Text)
    } else if has(&["url", "link"]) {
        Some(TargetField::Url)
    } else if has(&["date", "time"]) {
        Some(TargetField::Date)
    } else {
        None
    }
}

/// Column positions feeding each canonical field.
///
/// When several columns classify to the same field the last one in header
/// order is kept.
// TODO: allow an explicit column per field from config so datasets with two
// text-like columns (e.g. "text" and "article_summary") pick deterministically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: Option<usize>,
    pub text: Option<usize>,
    pub url: Option<usize>,
    pub date: Option<usize>,
}

impl ColumnMap {
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = ColumnMap::default();
        for (idx, name) in headers.into_iter().enumerate() {
            match classify_column(name) {
                Some(TargetField::Title) => map.title = Some(idx),
                Some(TargetField::Text) => map.text = Some(idx),
                Some(TargetField::Url) => map.url = Some(idx),
                Some(TargetField::Date) => map.date = Some(idx),
                None => {}
            }
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.url.is_none() && self.date.is_none()
    }

    /// Extract the raw (uncleaned) canonical fields from one row
    pub fn apply(&self, row: &RawRow) -> MappedFields {
        let pick = |idx: Option<usize>| idx.map(|i| row.value_at(i).to_string()).unwrap_or_default();
        MappedFields {
            title: pick(self.title),
            text: pick(self.text),
            url: pick(self.url),
            date: pick(self.date),
        }
    }
}

/// Canonical fields as found in the source, before cleaning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedFields {
    pub title: String,
    pub text: String,
    pub url: String,
    pub date: String,
}
