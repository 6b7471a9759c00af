//! Lazy traversals
//!
//! Both iterators borrow the tree and keep an explicit work list, so a
//! traversal never recurses and can be restarted by asking the tree for a
//! new one.

use std::collections::VecDeque;

use super::Node;

/// Post-order (left, right, self) iterator over keys.
#[derive(Debug, Clone)]
pub struct PostOrder<'a> {
    /// Pending nodes; `true` once the node's children have been queued.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl Iterator for PostOrder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            // Left pushed last so it is drained first.
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }
}

/// Breadth-first iterator yielding one level (left to right) per step.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a> {
    frontier: VecDeque<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            frontier: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = Vec<&'a Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }
        let level: Vec<&'a Node> = self.frontier.drain(..).collect();
        for node in &level {
            self.frontier.extend(node.left());
            self.frontier.extend(node.right());
        }
        Some(level)
    }
}
