//! Cvtex - deterministic LaTeX resume to HTML preview renderer
//!
//! Cvtex powers a live resume preview: it generates a fixed-template LaTeX
//! document from a structured resume record, and renders that dialect (or a
//! hand-edited variant of it) into styled HTML for on-screen display and
//! PDF export.
//!
//! The renderer is a cascade of ordered text-rewrite passes and is total:
//! any input string produces a usable fragment, degraded where the input is
//! not valid LaTeX, which is what a preview running on every keystroke
//! needs.
//!
//! # Example
//!
//! ```
//! use cvtex::{generate_latex_resume, latex_to_html, ResumeRecord};
//!
//! let record = ResumeRecord {
//!     summary: "Systems engineer with a soft spot for parsers.".into(),
//!     ..Default::default()
//! };
//! let source = generate_latex_resume(&record);
//! let html = latex_to_html(&source);
//! assert!(html.contains("<h1 "));
//! assert!(html.contains("Professional Summary"));
//! ```

pub mod core;
pub mod template_adapters;
pub mod utils;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::latex2html::{
    latex_to_html, latex_to_html_with_diagnostics, HtmlRenderer, RenderOptions, RenderResult,
    RenderWarning, WarningKind,
};
pub use crate::template_adapters::{
    default_latex_template, escape_latex, generate_latex_resume, generate_latex_resume_from_json,
    ContactInfo, EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord,
};
pub use crate::utils::error::TemplateError;
