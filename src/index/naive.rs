//! Linear-scan reference index
//!
//! Keeps the raw text and scans it on every query. Used for files the
//! strategy deems too large for a suffix tree, and as the oracle the suffix
//! tree is checked against.

use memchr::memmem;

/// Index that answers queries by scanning the text
#[derive(Debug, Clone)]
pub struct NaiveIndex {
    text: String,
}

impl NaiveIndex {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Find every character offset where `query` starts, overlapping
    /// occurrences included, sorted ascending
    pub fn find_offsets(&self, query: &str) -> Vec<usize> {
        find_char_offsets(&self.text, query)
    }
}

/// Scan `haystack` for every (possibly overlapping) occurrence of `needle`
/// and return the character offsets of their starts
pub fn find_char_offsets(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    let bytes = haystack.as_bytes();
    let finder = memmem::Finder::new(needle.as_bytes());

    let mut offsets = Vec::new();
    // Byte/char cursor used to translate hits without rescanning from 0
    let mut counted_bytes = 0;
    let mut counted_chars = 0;
    let mut from = 0;

    while let Some(hit) = finder.find(&bytes[from..]) {
        let byte_pos = from + hit;
        // A UTF-8 needle can only match at a char boundary, so the slice
        // below never splits a character
        counted_chars += haystack[counted_bytes..byte_pos].chars().count();
        counted_bytes = byte_pos;
        offsets.push(counted_chars);
        from = byte_pos + 1;
    }

    offsets
}
