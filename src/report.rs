//! End-to-end run: build the tree from a key list and print what the
//! [`ReportConfig`] asks for.
//!
//! Layout:
//! 1. step trace (optional): a separator line and the plain drawing of the
//!    tree *before* each insertion;
//! 2. post-order keys, one per line (optional);
//! 3. each requested drawing under a `=== title ===` header, sections
//!    separated by a blank line.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::render::{Render, RenderStyle};
use crate::tree::{BalancedTree, Insertion};
use crate::Error;

const STEP_SEPARATOR: &str = "==================================";

/// Insert `keys` in order and write the report to `writer`.
///
/// Returns the finished tree so callers can inspect it further.
pub fn write_report<W: Write>(
    writer: &mut W,
    keys: &[i64],
    config: &ReportConfig,
) -> Result<BalancedTree, Error> {
    let mut tree = BalancedTree::new();
    let mut duplicates = 0usize;

    for &key in keys {
        if config.step_by_step {
            writeln!(writer, "{STEP_SEPARATOR}")?;
            writer.write_all(RenderStyle::Plain.render_to_string(&tree).as_bytes())?;
        }
        let outcome = tree.insert(key);
        debug!(key, ?outcome, height = tree.height(), "inserted");
        if outcome == Insertion::Duplicate {
            duplicates += 1;
        }
    }

    if config.post_order {
        for key in tree.post_order() {
            writeln!(writer, "{key}")?;
        }
    }

    for (idx, style) in config.styles.iter().enumerate() {
        if idx > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "=== {} ===", style.title())?;
        writer.write_all(style.render_to_string(&tree).as_bytes())?;
    }

    writer.flush()?;
    info!(
        keys = keys.len(),
        nodes = tree.len(),
        duplicates,
        height = tree.height(),
        "report complete"
    );
    Ok(tree)
}

/// Render the report into a string (useful for tests and snapshots).
pub fn render_report(keys: &[i64], config: &ReportConfig) -> Result<String, Error> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, keys, config)?;
    String::from_utf8(buffer)
        .map_err(|err| Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
