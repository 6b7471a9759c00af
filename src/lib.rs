//! # Parity-routed AVL tree
//!
//! An AVL tree whose insertion path depends on the parity of the key:
//!
//! 1. **Odd keys**: ordinary BST placement; an equal key is a no-op.
//! 2. **Even keys**: descend into the right subtree whenever one exists,
//!    otherwise fall back to comparison.
//! 3. **Rebalancing**: after each insertion the descent path is repaired
//!    with LL / LR / RR / RL rotations, so `|balance| <= 1` everywhere.
//!
//! Even keys therefore carry no ordering guarantee; the tree is read through
//! its traversals and the read-only [`Node`] view.
//!
//! ## Usage Example
//!
//! ```
//! use parity_avl::BalancedTree;
//!
//! let tree: BalancedTree = [9, 6, 2, 1, 4].into_iter().collect();
//! let keys: Vec<i64> = tree.post_order().collect();
//! assert_eq!(keys, vec![1, 2, 4, 9, 6]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core
pub mod tree;     // Parity-routed AVL tree

// Collaborators built on the read-only node view
pub mod config;   // Report configuration
pub mod input;    // Comma-separated key parsing
pub mod render;   // Sideways, level and vertical printers
pub mod report;   // Whole-run driver

// Re-exports for convenience
pub use config::ReportConfig;
pub use input::{parse_keys, InputError};
pub use render::{Render, RenderStyle};
pub use report::{render_report, write_report};
pub use tree::{BalancedTree, Insertion, Node, NodeSummary};

/// Errors surfaced by the report layer.
///
/// The tree itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Key list could not be parsed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
