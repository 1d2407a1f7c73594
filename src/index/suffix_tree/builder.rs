//! Online suffix tree construction (Ukkonen)
//!
//! Characters are added one at a time. Each added character starts a phase
//! that makes the pending suffixes explicit, resuming from the active point
//! left behind by the previous phase. Leaf edges are open-ended, so extending
//! every existing leaf by the new character costs nothing.
//!
//! After the last real character a [`TERMINATOR`] is pushed, which turns
//! every remaining implicit suffix into an explicit leaf.

use super::types::*;
use tracing::trace;

/// Outcome of one extension within a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    /// A new leaf hangs directly off an existing node
    NewLeaf,
    /// An edge was split by a new internal node carrying the new leaf
    Split,
    /// The suffix is already implicit in the tree; the phase ends
    AlreadyPresent,
}

/// Construction cursor: the position in the tree where the next extension
/// happens
#[derive(Debug, Clone, Copy)]
struct ActivePoint {
    node: NodeId,
    /// Text position of the leading symbol of the active edge
    edge: usize,
    /// How far along the active edge the point sits
    length: usize,
}

/// Incremental builder for a [`SuffixTree`]
///
/// The tree can only be queried once [`build`](Self::build) has appended the
/// terminator.
pub struct SuffixTreeBuilder {
    text: Vec<Symbol>,
    nodes: Vec<Node>,
    /// Suffixes added to the text but not yet explicit in the tree
    remaining: usize,
    active: ActivePoint,
    /// Node created or visited earlier in this phase that still awaits its
    /// suffix link
    pending_link: Option<NodeId>,
}

impl SuffixTreeBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a builder sized for `chars` characters of input
    pub fn with_capacity(chars: usize) -> Self {
        let mut nodes = Vec::with_capacity(2 * chars + 2);
        nodes.push(Node::root());
        Self {
            text: Vec::with_capacity(chars + 1),
            nodes,
            remaining: 0,
            active: ActivePoint {
                node: NodeId::ROOT,
                edge: 0,
                length: 0,
            },
            pending_link: None,
        }
    }

    /// Add every character of `text`
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c);
        }
    }

    /// Add one character
    pub fn push(&mut self, c: char) {
        self.extend(symbol(c));
    }

    /// Number of characters added so far
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append the terminator and return the finished tree
    pub fn build(mut self) -> SuffixTree {
        self.extend(TERMINATOR);
        debug_assert_eq!(self.remaining, 0);

        trace!(
            chars = self.text.len() - 1,
            nodes = self.nodes.len(),
            "suffix tree built"
        );

        SuffixTree {
            text: self.text,
            nodes: self.nodes,
        }
    }

    /// Run one phase for the symbol `c`
    fn extend(&mut self, c: Symbol) {
        self.text.push(c);
        self.remaining += 1;
        // Suffix links only ever join nodes touched within the same phase
        self.pending_link = None;

        while self.remaining > 0 {
            if self.add_suffix(c) == Extension::AlreadyPresent {
                break;
            }
            self.remaining -= 1;

            if self.active.node == NodeId::ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = self.text.len() - self.remaining;
            } else {
                self.active.node = self
                    .node(self.active.node)
                    .suffix_link
                    .unwrap_or(NodeId::ROOT);
            }
        }
    }

    /// Make the next pending suffix explicit, or discover that it already is
    fn add_suffix(&mut self, c: Symbol) -> Extension {
        loop {
            if self.active.length == 0 {
                self.active.edge = self.text.len() - 1;
            }

            let lead = self.text[self.active.edge];
            let Some(next) = self.node(self.active.node).children.get(&lead).copied() else {
                let leaf = self.new_leaf();
                self.node_mut(self.active.node).children.insert(lead, leaf);
                self.link_pending(self.active.node);
                return Extension::NewLeaf;
            };

            // Walk down until the active point is canonical
            let edge_length = self.node(next).edge_length(self.text.len());
            if self.active.length >= edge_length {
                self.active.edge += edge_length;
                self.active.length -= edge_length;
                self.active.node = next;
                continue;
            }

            let next_start = self.node(next).start;
            if self.text[next_start + self.active.length] == c {
                self.active.length += 1;
                self.link_pending(self.active.node);
                return Extension::AlreadyPresent;
            }

            let split_at = next_start + self.active.length;
            let split = self.alloc(Node::internal(
                next_start,
                split_at,
                self.text.len() - self.remaining,
            ));
            self.node_mut(self.active.node).children.insert(lead, split);

            let leaf = self.new_leaf();
            self.node_mut(split).children.insert(c, leaf);

            self.node_mut(next).start = split_at;
            let moved_lead = self.text[split_at];
            self.node_mut(split).children.insert(moved_lead, next);

            self.link_pending(split);
            return Extension::Split;
        }
    }

    /// Point the pending node's suffix link at `node` and make `node` pending
    fn link_pending(&mut self, node: NodeId) {
        if let Some(pending) = self.pending_link {
            if pending != NodeId::ROOT {
                self.node_mut(pending).suffix_link = Some(node);
            }
        }
        self.pending_link = Some(node);
    }

    fn new_leaf(&mut self) -> NodeId {
        let start = self.text.len() - 1;
        let suffix = self.text.len() - self.remaining;
        self.alloc(Node::leaf(start, suffix))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

impl Default for SuffixTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTree {
    /// Build the suffix tree of `text` using Ukkonen's construction
    pub fn new(text: &str) -> Self {
        let mut builder = SuffixTreeBuilder::with_capacity(text.len());
        builder.push_str(text);
        builder.build()
    }
}
