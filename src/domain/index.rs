//! Ordered course index: an unbalanced binary search tree keyed by course identifier.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::{instrument, trace};

use crate::domain::CourseRecord;

/// Outcome of [`CourseIndex::insert`].
///
/// Duplicates are not errors: the existing record stays untouched and the new
/// one is dropped. Callers that do not care may ignore the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Tree node in the arena.
#[derive(Debug)]
struct CourseNode {
    record: CourseRecord,
    /// Subtree with strictly smaller identifiers
    left: Option<Index>,
    /// Subtree with strictly greater identifiers
    right: Option<Index>,
}

impl CourseNode {
    fn new(record: CourseRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}

/// Arena-based binary search tree of course records.
///
/// Nodes are never removed, so every arena index stays valid for the lifetime
/// of the tree. There is no balancing: sorted insertion degrades the tree into
/// a list with depth equal to its length.
#[derive(Debug)]
pub struct CourseIndex {
    /// Arena storage for all tree nodes
    arena: Arena<CourseNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for CourseIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseIndex {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a record, keeping the first record seen for each identifier.
    ///
    /// Walks down from the root: left on smaller identifiers, right on greater.
    /// An equal identifier ends the walk without touching the tree.
    #[instrument(level = "trace", skip(self, record), fields(identifier = record.identifier()))]
    pub fn insert(&mut self, record: CourseRecord) -> InsertOutcome {
        let mut current = self.root;
        let mut attach: Option<(Index, Side)> = None;

        while let Some(idx) = current {
            let Some(node) = self.arena.get(idx) else {
                break;
            };
            match record.identifier().cmp(node.record.identifier()) {
                Ordering::Equal => {
                    trace!("duplicate identifier, keeping existing record");
                    return InsertOutcome::Duplicate;
                }
                Ordering::Less => {
                    attach = Some((idx, Side::Left));
                    current = node.left;
                }
                Ordering::Greater => {
                    attach = Some((idx, Side::Right));
                    current = node.right;
                }
            }
        }

        let node_idx = self.arena.insert(CourseNode::new(record));
        match attach {
            None => self.root = Some(node_idx),
            Some((parent_idx, side)) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    match side {
                        Side::Left => parent.left = Some(node_idx),
                        Side::Right => parent.right = Some(node_idx),
                    }
                }
            }
        }
        InsertOutcome::Inserted
    }

    /// Find the record stored under `identifier`.
    ///
    /// The identifier is compared verbatim; `None` means not found.
    #[instrument(level = "trace", skip(self))]
    pub fn lookup(&self, identifier: &str) -> Option<&CourseRecord> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            match identifier.cmp(node.record.identifier()) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Records in ascending identifier order.
    ///
    /// Lazy and restartable: every call starts a fresh traversal of the
    /// current tree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Number of nodes on the longest root-to-leaf path, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                max_depth = max_depth.max(depth);
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Render the node shape, children labelled `L:` and `R:`.
    pub fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(index: &CourseIndex, node_idx: Index, label: String) -> Tree<String> {
            let mut tree = Tree::new(label);
            if let Some(node) = index.arena.get(node_idx) {
                if let Some(left) = node.left {
                    tree.push(build_tree(index, left, index.label("L", left)));
                }
                if let Some(right) = node.right {
                    tree.push(build_tree(index, right, index.label("R", right)));
                }
            }
            tree
        }

        match self.root {
            Some(root_idx) => build_tree(self, root_idx, self.label("", root_idx)),
            None => Tree::new("Empty index".to_string()),
        }
    }

    fn label(&self, side: &str, idx: Index) -> String {
        let identifier = self
            .arena
            .get(idx)
            .map(|n| n.record.identifier())
            .unwrap_or("?");
        if side.is_empty() {
            identifier.to_string()
        } else {
            format!("{}: {}", side, identifier)
        }
    }
}

impl Extend<CourseRecord> for CourseIndex {
    fn extend<I: IntoIterator<Item = CourseRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<CourseRecord> for CourseIndex {
    fn from_iter<I: IntoIterator<Item = CourseRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a CourseIndex {
    type Item = &'a CourseRecord;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order iterator over a [`CourseIndex`].
///
/// Keeps the pending left spine on an explicit stack, so degenerate trees do
/// not recurse.
pub struct InOrder<'a> {
    index: &'a CourseIndex,
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    fn new(index: &'a CourseIndex) -> Self {
        let mut iter = Self {
            index,
            stack: Vec::new(),
            remaining: index.len(),
        };
        iter.push_left_spine(index.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        let index = self.index;
        while let Some(idx) = current {
            self.stack.push(idx);
            current = index.arena.get(idx).and_then(|node| node.left);
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a CourseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let idx = self.stack.pop()?;
        let node = index.arena.get(idx)?;
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl FusedIterator for InOrder<'_> {}
