//! AVL rotations
//!
//! Rotations take ownership of the subtree root and hand back the new one,
//! so no parent link is ever aliased. Heights are fixed child-first: the
//! demoted node before the promoted node.

use std::fmt;

use tracing::debug;

use super::node::{balance_of, Node};

/// Which of the four classic imbalance shapes a node is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationCase {
    /// Left-heavy, left child not right-heavy: single right rotation.
    LeftLeft,
    /// Left-heavy, left child right-heavy: left then right rotation.
    LeftRight,
    /// Right-heavy, right child not left-heavy: single left rotation.
    RightRight,
    /// Right-heavy, right child left-heavy: right then left rotation.
    RightLeft,
}

impl RotationCase {
    /// Classify `node`, or `None` when it is within balance.
    pub fn classify(node: &Node) -> Option<Self> {
        let balance = node.balance();
        if balance > 1 {
            if balance_of(&node.left) < 0 {
                Some(Self::LeftRight)
            } else {
                Some(Self::LeftLeft)
            }
        } else if balance < -1 {
            if balance_of(&node.right) > 0 {
                Some(Self::RightLeft)
            } else {
                Some(Self::RightRight)
            }
        } else {
            None
        }
    }
}

impl fmt::Display for RotationCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::LeftLeft => "LL",
            Self::LeftRight => "LR",
            Self::RightRight => "RR",
            Self::RightLeft => "RL",
        };
        f.write_str(tag)
    }
}

/// Restore balance at `node` after one of its subtrees grew.
///
/// `node.height` must already be current.
pub(crate) fn rebalance(mut node: Box<Node>) -> Box<Node> {
    let Some(case) = RotationCase::classify(&node) else {
        return node;
    };
    debug!(key = node.key, balance = node.balance(), %case, "rotating");

    match case {
        RotationCase::LeftLeft => rotate_right(node),
        RotationCase::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        RotationCase::RightRight => rotate_left(node),
        RotationCase::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

/// Promote the left child of `y`.
///
/// ```text
///        y            x
///       / \          / \
///      x   C  ->    A   y
///     / \              / \
///    A   B            B   C
/// ```
pub(crate) fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Promote the right child of `x`. Mirror of [`rotate_right`].
pub(crate) fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}
