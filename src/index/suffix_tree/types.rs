//! Types for suffix tree indexing
//!
//! Nodes live in a single arena owned by the tree and refer to each other by
//! [`NodeId`]. Child edges are the only ownership relation; suffix links are
//! plain ids pointing sideways across the tree.

use rustc_hash::FxHashMap;

/// One character of indexed text, widened so the terminator can sit outside
/// the Unicode scalar range
pub type Symbol = u32;

/// Terminator appended after the last real character.
///
/// `char::MAX` is `0x10FFFF`, so no input character and no query character
/// can ever equal this value.
pub const TERMINATOR: Symbol = 0x11_0000;

/// End marker for leaf edges: a leaf's label always runs to the current end
/// of the text
pub const LEAF_END: usize = usize::MAX;

/// Convert a character to its symbol
#[inline]
pub fn symbol(c: char) -> Symbol {
    c as Symbol
}

/// Handle of a node in the tree's arena.
///
/// Wide enough to address every node a tree over `usize` characters can
/// have (at most `2n + 2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root is always the first node allocated
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex of the tree together with the label of its incoming edge
#[derive(Debug, Clone)]
pub struct Node {
    /// Start of the incoming edge label in the text (inclusive)
    pub start: usize,
    /// End of the incoming edge label (exclusive); [`LEAF_END`] for leaves
    pub end: usize,
    /// Starting offset of the suffix this node was created for. Only
    /// meaningful for leaves.
    pub suffix: usize,
    /// Suffix link; `None` means root
    pub suffix_link: Option<NodeId>,
    /// Children keyed by the first symbol of their edge label
    pub children: FxHashMap<Symbol, NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self::new(0, 0, 0)
    }

    pub(crate) fn leaf(start: usize, suffix: usize) -> Self {
        Self::new(start, LEAF_END, suffix)
    }

    pub(crate) fn internal(start: usize, end: usize, suffix: usize) -> Self {
        Self::new(start, end, suffix)
    }

    fn new(start: usize, end: usize, suffix: usize) -> Self {
        Self {
            start,
            end,
            suffix,
            suffix_link: None,
            children: FxHashMap::default(),
        }
    }

    /// Length of the incoming edge label given the current text length
    #[inline]
    pub fn edge_length(&self, text_len: usize) -> usize {
        self.end.min(text_len) - self.start
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A fully constructed suffix tree over one file's text.
///
/// Built with [`SuffixTree::new`] or [`SuffixTreeBuilder`](super::SuffixTreeBuilder);
/// immutable once built.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Text symbols including the trailing [`TERMINATOR`]
    pub(crate) text: Vec<Symbol>,
    /// Node arena; index 0 is the root
    pub(crate) nodes: Vec<Node>,
}

impl SuffixTree {
    /// Number of characters of real input (the terminator is not counted)
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves; always `len() + 1` for a constructed tree
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().skip(1).filter(|n| n.is_leaf()).count()
    }

    /// Suffix numbers of every leaf, sorted ascending
    pub fn suffix_numbers(&self) -> Vec<usize> {
        let mut suffixes: Vec<usize> = self
            .nodes
            .iter()
            .skip(1)
            .filter(|n| n.is_leaf())
            .map(|n| n.suffix)
            .collect();
        suffixes.sort_unstable();
        suffixes
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Label of the edge leading into `id`
    #[inline]
    pub(crate) fn edge_label(&self, id: NodeId) -> &[Symbol] {
        let node = self.node(id);
        &self.text[node.start..node.end.min(self.text.len())]
    }
}
