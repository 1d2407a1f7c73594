//! Suffix tree indexing module
//!
//! This module provides exact, case-sensitive substring search over a single
//! file's text in O(m + k) time for a query of length m with k matches.
//!
//! ## Architecture
//!
//! - `types`: Node arena, symbols and the built [`SuffixTree`]
//! - `builder`: Online (Ukkonen) construction, linear in the text length
//! - `query`: Offset lookup by walking edge labels from the root
//!
//! ## Text model
//!
//! The text is stored as one symbol per `char`, followed by a terminator that
//! lies outside the Unicode range. Offsets reported by queries are therefore
//! character offsets, not byte offsets.

pub mod builder;
mod query;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use types::{NodeId, SuffixTree, Symbol, TERMINATOR};
