use std::fmt;

use super::Render;
use crate::tree::{BalancedTree, Node};

/// Top-down drawing on a character canvas.
///
/// Columns follow the structural in-order position of each node, so the
/// drawing never overlaps even where even keys break sort order. Node rows
/// alternate with connector rows.
///
/// ```text
///   3
///  / \
/// 1   5
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertical;

#[derive(Debug)]
struct Cell {
    depth: usize,
    slot: usize,
    label: String,
    has_left: bool,
    has_right: bool,
}

fn place(node: &Node, depth: usize, next_slot: &mut usize, cells: &mut Vec<Cell>) {
    if let Some(left) = node.left() {
        place(left, depth + 1, next_slot, cells);
    }
    let slot = *next_slot;
    *next_slot += 1;
    cells.push(Cell {
        depth,
        slot,
        label: node.key().to_string(),
        has_left: node.left().is_some(),
        has_right: node.right().is_some(),
    });
    if let Some(right) = node.right() {
        place(right, depth + 1, next_slot, cells);
    }
}

impl Render for Vertical {
    fn render<W: fmt::Write>(&self, tree: &BalancedTree, out: &mut W) -> fmt::Result {
        let Some(root) = tree.root() else {
            return Ok(());
        };

        let mut cells = Vec::with_capacity(tree.len());
        let mut slots = 0;
        place(root, 0, &mut slots, &mut cells);

        let cell_width = cells.iter().map(|c| c.label.len()).max().unwrap_or(0) + 1;
        let rows = 2 * root.height() - 1;
        let mut canvas = vec![vec![' '; slots * cell_width]; rows];

        for cell in &cells {
            let row = 2 * cell.depth;
            let column = cell.slot * cell_width;
            for (offset, ch) in cell.label.chars().enumerate() {
                canvas[row][column + offset] = ch;
            }
            // A left child sits in an earlier slot, so column >= cell_width here.
            if cell.has_left {
                canvas[row + 1][column - 1] = '/';
            }
            if cell.has_right {
                canvas[row + 1][column + cell.label.len()] = '\\';
            }
        }

        for line in canvas {
            let line: String = line.into_iter().collect();
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
