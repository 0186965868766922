//! Prefix tree over qualified hyperparameter names.
//!
//! Every node stands for one name prefix, so every node is also a *group*:
//! the hyperparameters whose names start with that prefix. The greedy oracle
//! samples one group per step and mutates only its members.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]; all traversals
//! use an explicit stack, so deep name hierarchies cannot overflow the call
//! stack.
//!
//! ```
//! use greedy_tuner::Hyperparameter;
//! use greedy_tuner::trie::Trie;
//!
//! let hps = [
//!     Hyperparameter::int("model/units", 8, 64),
//!     Hyperparameter::boolean("model/dropout"),
//!     Hyperparameter::float("optimizer/lr", 1e-4, 1e-1),
//! ];
//! let mut trie = Trie::new();
//! for hp in &hps {
//!     trie.insert(hp).unwrap();
//! }
//!
//! assert_eq!(trie.num_leaves(Trie::ROOT), 3);
//! assert_eq!(trie.nodes().len(), 6);
//! ```

use std::collections::BTreeMap;

use crate::error::Result;
use crate::hyperparameter::{Hyperparameter, validate_name};

/// Index of a node inside a [`Trie`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct TrieNode<'a> {
    // Ordered so traversal order, and with it seeded sampling, is reproducible.
    children: BTreeMap<&'a str, NodeId>,
    num_leaves: usize,
    hyperparameter: Option<&'a Hyperparameter>,
}

/// Arena-backed prefix tree borrowing the hyperparameters it indexes.
#[derive(Debug)]
pub struct Trie<'a> {
    nodes: Vec<TrieNode<'a>>,
}

impl<'a> Trie<'a> {
    /// The root node, covering the whole space.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a trie holding only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Builds a trie from every hyperparameter yielded by `hps`.
    ///
    /// # Errors
    ///
    /// Returns the first [`insert`](Self::insert) error.
    pub fn build(hps: impl IntoIterator<Item = &'a Hyperparameter>) -> Result<Self> {
        let mut trie = Self::new();
        for hp in hps {
            trie.insert(hp)?;
        }
        Ok(trie)
    }

    /// Inserts `hp` under its qualified name.
    ///
    /// The first insertion of a name adds one leaf to every node on its path,
    /// root included. Inserting the same name again only replaces the held
    /// hyperparameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](crate::Error::InvalidName) for an empty
    /// name or one with an empty segment; the trie is left unchanged.
    pub fn insert(&mut self, hp: &'a Hyperparameter) -> Result<()> {
        validate_name(hp.name())?;

        let mut current = Self::ROOT;
        let mut path = vec![current];
        for segment in hp.segments() {
            current = match self.nodes[current.0].children.get(segment) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0].children.insert(segment, child);
                    child
                }
            };
            path.push(current);
        }

        let terminal = &mut self.nodes[current.0];
        let new_name = terminal.hyperparameter.is_none();
        terminal.hyperparameter = Some(hp);
        if new_name {
            for id in path {
                self.nodes[id.0].num_leaves += 1;
            }
        }
        Ok(())
    }

    /// Returns every node id, root first, in depth-first pre-order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.values().rev());
        }
        out
    }

    /// Returns the number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns the number of distinct names at or below `node`.
    #[must_use]
    pub fn num_leaves(&self, node: NodeId) -> usize {
        self.nodes[node.0].num_leaves
    }

    /// Returns the hyperparameter held by `node`, if a name ends there.
    #[must_use]
    pub fn hyperparameter(&self, node: NodeId) -> Option<&'a Hyperparameter> {
        self.nodes[node.0].hyperparameter
    }

    /// Returns the child of `node` reached through `segment`.
    #[must_use]
    pub fn child(&self, node: NodeId, segment: &str) -> Option<NodeId> {
        self.nodes[node.0].children.get(segment).copied()
    }

    /// Returns the group of hyperparameters at or below `node`.
    ///
    /// Every node holding a hyperparameter contributes it, including one
    /// whose name is a strict prefix of another name (`a` next to `a/b`), so
    /// the result always has [`num_leaves`](Self::num_leaves) entries.
    #[must_use]
    pub fn leaves_under(&self, node: NodeId) -> Vec<&'a Hyperparameter> {
        let mut out = Vec::with_capacity(self.num_leaves(node));
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let n = &self.nodes[id.0];
            out.extend(n.hyperparameter);
            stack.extend(n.children.values().rev());
        }
        out
    }
}

impl Default for Trie<'_> {
    fn default() -> Self {
        Self::new()
    }
}
