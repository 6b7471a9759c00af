use std::fmt;

use super::Render;
use crate::tree::BalancedTree;

/// One line per depth: `key[h=..,bf=..]` entries separated by spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levels;

impl Render for Levels {
    fn render<W: fmt::Write>(&self, tree: &BalancedTree, out: &mut W) -> fmt::Result {
        for level in tree.level_order() {
            let line = level
                .iter()
                .map(|node| node.summary().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
