//! LaTeX resume to HTML converter
//!
//! This module implements the pass-pipeline renderer behind the live
//! preview. Source text flows through twenty ordered rewrite passes that
//! strip the preamble, expand the resume macro set into HTML fragments,
//! convert inline formatting and links, and normalize the result into one
//! styled container.

pub mod braces;
pub mod context;
pub mod passes;

pub use context::{HtmlRenderer, RenderOptions};

// =============================================================================
// Warning System
// =============================================================================

/// Kind of warning generated during rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Input was empty or blank; the placeholder fragment was served
    EmptyInput,
    /// No `\begin{document}...\end{document}` wrapper; whole input used
    MissingDocumentBody,
    /// A command with no handler was deleted by the residual strip
    UnknownCommand,
    /// Stray braces survived group cleanup and were deleted
    UnbalancedBraces,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::EmptyInput => write!(f, "empty input"),
            WarningKind::MissingDocumentBody => write!(f, "missing document body"),
            WarningKind::UnknownCommand => write!(f, "unknown command"),
            WarningKind::UnbalancedBraces => write!(f, "unbalanced braces"),
        }
    }
}

/// A warning generated while rendering LaTeX to HTML.
///
/// Warnings never affect the returned HTML; they exist so hosts can surface
/// why a preview looks degraded.
#[derive(Debug, Clone)]
pub struct RenderWarning {
    /// The kind of warning
    pub kind: WarningKind,
    /// Human-readable message
    pub message: String,
    /// Location context (e.g., "\\foo")
    pub location: Option<String>,
}

impl RenderWarning {
    /// Create a new warning
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        RenderWarning {
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Add location context to the warning
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Create an empty-input warning
    pub fn empty_input() -> Self {
        RenderWarning::new(WarningKind::EmptyInput, "Input is empty; placeholder served")
    }

    /// Create a missing-document-body warning
    pub fn missing_document_body() -> Self {
        RenderWarning::new(
            WarningKind::MissingDocumentBody,
            "No document environment found; rendering the whole input",
        )
    }

    /// Create an unknown-command warning
    pub fn unknown_command(name: &str) -> Self {
        RenderWarning::new(
            WarningKind::UnknownCommand,
            format!("Unknown command '\\{}' was deleted", name),
        )
        .with_location(format!("\\{}", name))
    }

    /// Create an unbalanced-braces warning
    pub fn unbalanced_braces(count: usize) -> Self {
        RenderWarning::new(
            WarningKind::UnbalancedBraces,
            format!("{} stray brace(s) deleted", count),
        )
    }
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref loc) = self.location {
            write!(f, "[{}] {}: {}", self.kind, loc, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

/// Result of rendering with diagnostics
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered HTML fragment
    pub html: String,
    /// Warnings generated during rendering
    pub warnings: Vec<RenderWarning>,
}

impl RenderResult {
    /// Create a new result with no warnings
    pub fn ok(html: String) -> Self {
        RenderResult {
            html,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings
    pub fn with_warnings(html: String, warnings: Vec<RenderWarning>) -> Self {
        RenderResult { html, warnings }
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get warnings as formatted strings
    pub fn format_warnings(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

/// Convert LaTeX resume source to an HTML preview fragment.
///
/// Total over arbitrary input: hand-edited, partially valid, or empty
/// source all produce a usable fragment rather than an error.
///
/// # Example
///
/// ```
/// use cvtex::latex_to_html;
///
/// let html = latex_to_html("\\section{Skills}\n\\small{Go, Rust, C++}");
/// assert!(html.contains(">Skills</h2>"));
/// assert!(html.contains("Go, Rust, C++"));
/// ```
pub fn latex_to_html(input: &str) -> String {
    HtmlRenderer::new().render(input)
}

/// Convert LaTeX resume source to HTML with full diagnostics.
///
/// Returns both the rendered fragment and any warnings generated along the
/// way. This is the recommended function for hosts that want to report why
/// a preview looks degraded.
///
/// # Example
///
/// ```
/// use cvtex::latex_to_html_with_diagnostics;
///
/// let result = latex_to_html_with_diagnostics("\\unknownmacro{x}");
/// assert!(!result.html.is_empty());
/// for warning in &result.warnings {
///     eprintln!("Warning: {}", warning);
/// }
/// ```
pub fn latex_to_html_with_diagnostics(input: &str) -> RenderResult {
    HtmlRenderer::new().render_with_diagnostics(input)
}
