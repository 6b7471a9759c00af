//! Read-only tree printers
//!
//! Every printer walks `&Node` only and never touches the tree's
//! internals. [`RenderStyle`] picks one by name for the CLI and reports.

mod levels;
mod sideways;
mod vertical;

pub use levels::Levels;
pub use sideways::Sideways;
pub use vertical::Vertical;

use std::fmt;

use crate::tree::BalancedTree;

/// A way of drawing a tree as text.
pub trait Render {
    /// Append the drawing of `tree` to `out`, one `\n`-terminated line at a time.
    ///
    /// An empty tree draws nothing.
    fn render<W: fmt::Write>(&self, tree: &BalancedTree, out: &mut W) -> fmt::Result;

    /// Drawing of `tree` as an owned string.
    fn render_to_string(&self, tree: &BalancedTree) -> String {
        let mut buffer = String::new();
        // fmt::Write for String is infallible.
        let _ = self.render(tree, &mut buffer);
        buffer
    }
}

/// Named rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum RenderStyle {
    /// Rotated 90°, root at the left, annotated with height and balance.
    Sideways,
    /// Rotated 90°, keys only.
    Plain,
    /// One line per depth with height and balance.
    Levels,
    /// Top-down drawing with `/` and `\` connectors.
    Vertical,
}

impl RenderStyle {
    /// Section title used in reports.
    pub fn title(&self) -> &'static str {
        match self {
            RenderStyle::Sideways => "Pretty (sideways)",
            RenderStyle::Plain => "Pretty (plain)",
            RenderStyle::Levels => "Levels",
            RenderStyle::Vertical => "Vertical",
        }
    }
}

impl Render for RenderStyle {
    fn render<W: fmt::Write>(&self, tree: &BalancedTree, out: &mut W) -> fmt::Result {
        match self {
            RenderStyle::Sideways => Sideways::annotated().render(tree, out),
            RenderStyle::Plain => Sideways::plain().render(tree, out),
            RenderStyle::Levels => Levels.render(tree, out),
            RenderStyle::Vertical => Vertical.render(tree, out),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
