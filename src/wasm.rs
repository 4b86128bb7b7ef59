//! WASM bindings for cvtex
//!
//! This module exposes the renderer and the template generator to the
//! browser host that drives the live preview.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render LaTeX resume source to the styled preview HTML.
///
/// # Arguments
/// * `input` - LaTeX source (generated or hand-edited)
///
/// # Returns
/// HTML fragment wrapped in the preview container
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderLatex")]
pub fn render_latex_wasm(input: &str) -> String {
    crate::latex_to_html(input)
}

/// Render LaTeX resume source to a bare HTML fragment (no page container).
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderLatexFragment")]
pub fn render_latex_fragment_wasm(input: &str) -> String {
    use crate::{HtmlRenderer, RenderOptions};
    HtmlRenderer::with_options(RenderOptions::fragment()).render(input)
}

/// Render LaTeX resume source and report warnings alongside the HTML.
///
/// # Returns
/// `{ html: string, warnings: string[] }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderLatexWithDiagnostics")]
pub fn render_latex_with_diagnostics_wasm(input: &str) -> JsValue {
    #[derive(serde::Serialize)]
    struct JsRenderResult {
        html: String,
        warnings: Vec<String>,
    }

    let result = crate::latex_to_html_with_diagnostics(input);
    let out = JsRenderResult {
        warnings: result.format_warnings(),
        html: result.html,
    };
    serde_wasm_bindgen::to_value(&out).unwrap_or(JsValue::NULL)
}

/// Generate a LaTeX document from a structured resume record.
///
/// # Arguments
/// * `record` - resume record object (same shape the form layer persists)
///
/// # Returns
/// Complete LaTeX source, or a JS error when the record is malformed
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "generateResume")]
pub fn generate_resume_wasm(record: JsValue) -> Result<String, JsValue> {
    let record: crate::ResumeRecord = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Invalid resume record: {}", e)))?;
    Ok(crate::generate_latex_resume(&record))
}

/// Starter LaTeX document for new resumes.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "starterTemplate")]
pub fn starter_template_wasm() -> String {
    crate::default_latex_template().to_string()
}

/// Get version of the library
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
