//! Renderer state and options.

use super::passes::{EMPTY_PLACEHOLDER, PASSES};
use super::{RenderResult, RenderWarning};

/// Options for LaTeX to HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Wrap the final fragment in the fixed page-like container the
    /// Preview Host measures for PDF pagination.
    /// Default: true
    pub wrap_output: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { wrap_output: true }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options for hosts that supply their own page container
    pub fn fragment() -> Self {
        Self { wrap_output: false }
    }
}

/// LaTeX to HTML renderer.
///
/// Holds no mutable state between calls; a single renderer may serve
/// concurrent invocations (two preview tabs) without coordination.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render LaTeX source to an HTML fragment, discarding diagnostics.
    pub fn render(&self, input: &str) -> String {
        self.render_with_diagnostics(input).html
    }

    /// Render LaTeX source to an HTML fragment with full diagnostics.
    ///
    /// Never fails: unrecognized input degrades to a best-effort fragment
    /// and blank input yields a fixed placeholder.
    pub fn render_with_diagnostics(&self, input: &str) -> RenderResult {
        let mut warnings = Vec::new();
        if input.trim().is_empty() {
            warnings.push(RenderWarning::empty_input());
            return RenderResult::with_warnings(EMPTY_PLACEHOLDER.to_string(), warnings);
        }
        let mut html = input.to_string();
        for (name, pass) in PASSES {
            if *name == "wrap-container" && !self.options.wrap_output {
                continue;
            }
            html = pass(&html, &mut warnings);
        }
        RenderResult::with_warnings(html, warnings)
    }
}
