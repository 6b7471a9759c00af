use std::fmt;

use super::Render;
use crate::tree::{BalancedTree, Node};

/// Sideways drawing: right subtree above, left subtree below.
///
/// ```text
/// │   ┌── 5
/// └── 3
///     └── 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sideways {
    annotate: bool,
}

impl Sideways {
    /// Keys followed by `(h=.., bf=..)`.
    pub fn annotated() -> Self {
        Self { annotate: true }
    }

    /// Keys only, as used by the step-by-step trace.
    pub fn plain() -> Self {
        Self { annotate: false }
    }

    fn draw<W: fmt::Write>(&self, node: &Node, prefix: &str, tail: bool, out: &mut W) -> fmt::Result {
        if let Some(right) = node.right() {
            let child_prefix = format!("{prefix}{}", if tail { "│   " } else { "    " });
            self.draw(right, &child_prefix, false, out)?;
        }

        write!(out, "{prefix}{}{}", if tail { "└── " } else { "┌── " }, node.key())?;
        if self.annotate {
            write!(out, " (h={}, bf={})", node.height(), node.balance())?;
        }
        writeln!(out)?;

        if let Some(left) = node.left() {
            let child_prefix = format!("{prefix}{}", if tail { "    " } else { "│   " });
            self.draw(left, &child_prefix, true, out)?;
        }
        Ok(())
    }
}

impl Render for Sideways {
    fn render<W: fmt::Write>(&self, tree: &BalancedTree, out: &mut W) -> fmt::Result {
        match tree.root() {
            Some(root) => self.draw(root, "", true, out),
            None => Ok(()),
        }
    }
}
