use serde::{Deserialize, Serialize};
use std::fmt;

/// Character offset into a file's text
pub type CharOffset = usize;

/// One occurrence of a query: the file it was found in and where it starts
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryMatch {
    /// Path of the file relative to the indexed root, `/`-separated
    pub path: String,
    /// Character offset of the first matched character
    pub offset: CharOffset,
}

impl QueryMatch {
    pub fn new(path: impl Into<String>, offset: CharOffset) -> Self {
        Self {
            path: path.into(),
            offset,
        }
    }
}

impl fmt::Display for QueryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.offset)
    }
}

/// Which engine backs an indexed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    SuffixTree,
    Naive,
    /// Excluded by policy; queries never match
    NotIndexed,
}

impl IndexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::SuffixTree => "suffix tree",
            IndexKind::Naive => "naive",
            IndexKind::NotIndexed => "not indexed",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
