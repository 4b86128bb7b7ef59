//! Fixed-template LaTeX emission
//!
//! The form layer hands over a structured resume record; these modules turn
//! it into a complete LaTeX document using the fixed macro set the renderer
//! understands.

pub mod common;
pub mod resume;

pub use common::escape_latex;
pub use resume::{
    default_latex_template, generate_latex_resume, generate_latex_resume_from_json, ContactInfo,
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord,
};
