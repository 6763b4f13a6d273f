use md5::{Digest, Md5};
use std::collections::HashSet;

use crate::constants::DOC_ID_HEX_LEN;

fn md5_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Full hex digest over `title + text`, used only as the per-file dedupe key
pub fn compute_content_hash(title: &str, text: &str) -> String {
    let mut s = String::with_capacity(title.len() + text.len());
    s.push_str(title);
    s.push_str(text);
    md5_hex(s.as_bytes())
}

/// Stable external identifier: first 16 hex chars of the digest over `title|text`
pub fn compute_doc_id(title: &str, text: &str) -> String {
    let mut s = String::with_capacity(title.len() + text.len() + 1);
    s.push_str(title);
    s.push('|');
    s.push_str(text);
    let mut digest = md5_hex(s.as_bytes());
    digest.truncate(DOC_ID_HEX_LEN);
    digest
}

/// Content hashes seen while processing one input file.
///
/// A fresh set is created per file, so duplicates across files pass through.
#[derive(Debug, Default)]
pub struct DedupSet {
    seen: HashSet<String>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair and returns true if it had not been seen before
    pub fn insert(&mut self, title: &str, text: &str) -> bool {
        self.seen.insert(compute_content_hash(title, text))
    }

    #[cfg(test)]
    fn contains(&self, title: &str, text: &str) -> bool {
        self.seen.contains(&compute_content_hash(title, text))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.seen.len()
    }
}
