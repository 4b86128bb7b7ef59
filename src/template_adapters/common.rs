//! Shared helpers for template emission.

/// Escape special LaTeX characters in free text.
///
/// Single pass over the input, so the braces introduced by the backslash
/// expansion are never re-escaped by the brace rule. Newlines flatten to
/// spaces because the template macros take single-paragraph arguments.
/// Deliberately not idempotent: escaping an already-escaped string escapes
/// the markers again.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\n' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}
