//! Parity-routed AVL tree
//!
//! Odd keys are placed by ordinary BST comparison.
//! Even keys are pushed into a node's right subtree whenever one exists and
//! only fall back to comparison when it does not.
//! Every insertion rebalances the descent path with LL/LR/RR/RL rotations.
//!
//! Even keys do not obey BST order, so there is deliberately no `contains`;
//! read the tree through [`BalancedTree::root`] or the traversals.

mod node;
mod rebalance;
mod traversal;

pub use node::{Node, NodeSummary};
pub use rebalance::RotationCase;
pub use traversal::{LevelOrder, PostOrder};

use std::cmp::Ordering;

use node::Link;
use tracing::trace;

/// Result of a single [`BalancedTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new node was created.
    Inserted,
    /// The key met an equal key during comparison; the tree is unchanged.
    Duplicate,
}

/// Where an insertion goes next from a given node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Left,
    Right,
    /// Even key sent right without comparing.
    ForcedRight,
    Equal,
}

impl Route {
    fn choose(node: &Node, key: i64) -> Self {
        if is_even(key) && node.right.is_some() {
            return Route::ForcedRight;
        }
        match key.cmp(&node.key) {
            Ordering::Less => Route::Left,
            Ordering::Greater => Route::Right,
            Ordering::Equal => Route::Equal,
        }
    }
}

#[inline]
fn is_even(key: i64) -> bool {
    key % 2 == 0
}

/// AVL tree with parity-dependent placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancedTree {
    root: Link,
    len: usize,
}

impl BalancedTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `key`, rebalancing on the way back up.
    pub fn insert(&mut self, key: i64) -> Insertion {
        let mut outcome = Insertion::Duplicate;
        self.root = Some(insert_at(self.root.take(), key, &mut outcome));
        if outcome == Insertion::Inserted {
            self.len += 1;
        }
        outcome
    }

    /// Top of the tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> usize {
        node::height_of(&self.root)
    }

    /// Keys in post-order. Each call starts a fresh traversal.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self.root())
    }

    /// Nodes grouped by depth, top level first.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root())
    }
}

/// Insert into an owned subtree and return its (possibly new) root.
fn insert_at(link: Link, key: i64, outcome: &mut Insertion) -> Box<Node> {
    let Some(mut node) = link else {
        *outcome = Insertion::Inserted;
        return Box::new(Node::leaf(key));
    };

    let route = Route::choose(&node, key);
    trace!(key, at = node.key, ?route, "descending");
    match route {
        Route::Left => node.left = Some(insert_at(node.left.take(), key, outcome)),
        Route::Right | Route::ForcedRight => {
            node.right = Some(insert_at(node.right.take(), key, outcome))
        }
        Route::Equal => {}
    }

    node.update_height();
    rebalance::rebalance(node)
}

impl Extend<i64> for BalancedTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i64> for BalancedTree {
    fn from_iter<I: IntoIterator<Item = i64>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
