//! Report configuration

use crate::render::RenderStyle;

/// What a report run prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Drawings emitted after the post-order dump, in order.
    pub styles: Vec<RenderStyle>,

    /// Print the tree (plain sideways) before every insertion.
    pub step_by_step: bool,

    /// Print keys in post-order, one per line.
    pub post_order: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            styles: vec![RenderStyle::Sideways, RenderStyle::Levels],
            step_by_step: false,
            post_order: true,
        }
    }
}

impl ReportConfig {
    /// Post-order dump only, no drawings.
    pub fn post_order_only() -> Self {
        Self {
            styles: Vec::new(),
            ..Self::default()
        }
    }

    /// Replace the list of drawings. Repeated styles are kept once.
    pub fn with_styles<I>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = RenderStyle>,
    {
        self.styles.clear();
        for style in styles {
            if !self.styles.contains(&style) {
                self.styles.push(style);
            }
        }
        self
    }

    /// Enable the per-insertion trace.
    pub fn with_step_by_step(mut self, enabled: bool) -> Self {
        self.step_by_step = enabled;
        self
    }

    /// Enable the post-order dump.
    pub fn with_post_order(mut self, enabled: bool) -> Self {
        self.post_order = enabled;
        self
    }
}
