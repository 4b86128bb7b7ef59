//! Error handling for template generation
//!
//! The renderer itself is total and has no error type; only the structured
//! boundary that turns resume records into LaTeX can be handed malformed
//! input, and that failure is typed here.

use std::fmt;

/// Template generation error type
#[derive(Debug, Clone)]
pub enum TemplateError {
    /// Invalid input - the record was malformed (wrong field types,
    /// unparseable JSON)
    InvalidInput { message: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::InvalidInput {
            message: err.to_string(),
        }
    }
}

// Convenience constructors
impl TemplateError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TemplateError::InvalidInput {
            message: message.into(),
        }
    }
}
