//! Tree node storage and read-only view
//!
//! A node owns its children outright (`Option<Box<Node>>`).
//! Height is cached: leaf = 1, absent child = 0.
//! Consumers only ever see `&Node`, so every accessor here is read-only.

use std::fmt;

/// Owned link to a child subtree.
pub(crate) type Link = Option<Box<Node>>;

/// One key in a [`BalancedTree`](super::BalancedTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: i64,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) height: usize,
}

impl Node {
    /// Fresh leaf holding `key`.
    pub(crate) fn leaf(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Stored key.
    #[inline]
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Cached height of the subtree rooted here.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Left child, if any.
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right child, if any.
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// True when both children are absent.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Balance factor: `height(left) - height(right)`.
    pub fn balance(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }

    /// Snapshot of the values printers care about.
    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            key: self.key,
            height: self.height,
            balance: self.balance(),
        }
    }

    /// Recompute the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }
}

/// Height of an optional subtree (0 when absent).
#[inline]
pub(crate) fn height_of(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of an optional subtree (0 when absent).
#[inline]
pub(crate) fn balance_of(link: &Link) -> isize {
    link.as_ref().map_or(0, |node| node.balance())
}

/// Key, height and balance of a single node, detached from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeSummary {
    /// Stored key.
    pub key: i64,
    /// Subtree height.
    pub height: usize,
    /// Balance factor.
    pub balance: isize,
}

impl fmt::Display for NodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[h={},bf={}]", self.key, self.height, self.balance)
    }
}
