//! Exact substring lookup on a built suffix tree
//!
//! A query walks down from the root matching edge labels. The subtree under
//! the point where the query runs out holds exactly one leaf per occurrence,
//! so lookup costs O(m) plus the number of matches.

use super::types::*;

impl SuffixTree {
    /// Find every character offset where `query` occurs in the text.
    ///
    /// Offsets are returned sorted ascending. An empty query has no matches.
    pub fn find_offsets(&self, query: &str) -> Vec<usize> {
        match self.locate(query) {
            Some(node) => {
                let mut offsets = self.suffixes_under(node);
                offsets.sort_unstable();
                offsets
            }
            None => Vec::new(),
        }
    }

    /// Number of occurrences of `query`
    pub fn count(&self, query: &str) -> usize {
        self.locate(query)
            .map(|node| self.leaves_under(node))
            .unwrap_or(0)
    }

    /// Whether `query` occurs at least once
    pub fn contains(&self, query: &str) -> bool {
        self.locate(query).is_some()
    }

    /// Find the highest node whose subtree holds all suffixes prefixed by
    /// `query`
    fn locate(&self, query: &str) -> Option<NodeId> {
        let query: Vec<Symbol> = query.chars().map(symbol).collect();
        if query.is_empty() {
            return None;
        }

        let mut node = NodeId::ROOT;
        let mut i = 0;
        while i < query.len() {
            // A leaf has no outgoing edges, so an unconsumed query ends here
            let child = *self.node(node).children.get(&query[i])?;
            let label = self.edge_label(child);
            let rest = &query[i..];

            // The edge covers the rest of the query: it must be a prefix of
            // the label
            if label.len() >= rest.len() {
                return label.starts_with(rest).then_some(child);
            }

            if !rest.starts_with(label) {
                return None;
            }
            i += label.len();
            node = child;
        }

        // The query ended exactly on a node boundary
        Some(node)
    }

    /// Suffix numbers of every leaf under `node` (unsorted)
    fn suffixes_under(&self, node: NodeId) -> Vec<usize> {
        let mut suffixes = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let n = self.node(id);
            if n.is_leaf() {
                suffixes.push(n.suffix);
            } else {
                stack.extend(n.children.values().copied());
            }
        }
        suffixes
    }

    fn leaves_under(&self, node: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let n = self.node(id);
            if n.is_leaf() {
                count += 1;
            } else {
                stack.extend(n.children.values().copied());
            }
        }
        count
    }
}
