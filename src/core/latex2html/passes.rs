//! The rewrite passes.
//!
//! Rendering is a fold over [`PASSES`]: twenty total `&str -> String`
//! transforms applied in a fixed order. The order is load-bearing. Sections
//! must convert before `\small` blocks so headings do not swallow the body
//! text that follows them, inline formatting must convert before links so
//! the link pass can recognize underline-wrapped labels, and the residual
//! command strip and brace cleanup run last to mop up whatever the earlier
//! passes declined to match.
//!
//! Every pass is idempotent on text it does not match and assumes nothing
//! about well-formedness: an argument that fails to bind is left in place
//! and degrades through the cleanup passes instead of erroring.

use lazy_static::lazy_static;
use phf::phf_set;
use regex::{Captures, Regex};

use super::braces::{brace_group, bracket_group, expand_macro, strip_command_with_groups};
use super::RenderWarning;

/// A single rewrite pass. The warning sink is shared across the pipeline.
pub type Pass = fn(&str, &mut Vec<RenderWarning>) -> String;

/// The pipeline, in required order.
pub const PASSES: &[(&str, Pass)] = &[
    ("strip-preamble", strip_preamble),
    ("extract-body", extract_body),
    ("center-env", convert_center),
    ("name-heading", convert_name_heading),
    ("sections", convert_sections),
    ("small-blocks", convert_small_blocks),
    ("list-macros", convert_list_macros),
    ("project-heading", convert_project_heading),
    ("subheading", convert_subheading),
    ("tabular-fallback", convert_tabular),
    ("inline-emphasis", convert_inline_emphasis),
    ("size-noops", strip_size_noops),
    ("links", convert_links),
    ("line-breaks", convert_line_breaks),
    ("special-chars", convert_special_chars),
    ("residual-commands", strip_residual_commands),
    ("brace-cleanup", cleanup_braces),
    ("whitespace", normalize_whitespace),
    ("structural-tidy", tidy_structure),
    ("wrap-container", wrap_container),
];

/// Served for empty or blank input instead of running the pipeline.
pub const EMPTY_PLACEHOLDER: &str = "<div class='flex items-center justify-center h-full text-gray-400'><p>Start filling the form to see your resume...</p></div>";

const LINK_CLASS: &str = "text-blue-600 hover:underline";

// ── Pass 1: preamble strip ──────────────────────────────────────────────────

fn strip_preamble(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    // Commands with brace-balanced bodies (`\newcommand`, `\titleformat`)
    // must go through the group scanner; their bodies nest braces that a
    // non-greedy regex would truncate.
    let mut s = strip_command_with_groups(input, "documentclass", 1);
    s = strip_command_with_groups(&s, "usepackage", 1);
    s = strip_command_with_groups(&s, "pagestyle", 1);
    s = strip_command_with_groups(&s, "fancyhf", 1);
    s = strip_command_with_groups(&s, "fancyfoot", 1);
    s = strip_command_with_groups(&s, "renewcommand", 2);
    s = strip_command_with_groups(&s, "addtolength", 2);
    s = strip_command_with_groups(&s, "urlstyle", 1);
    s = strip_command_with_groups(&s, "raggedbottom", 0);
    s = strip_command_with_groups(&s, "raggedright", 0);
    s = strip_command_with_groups(&s, "setlength", 2);
    s = strip_command_with_groups(&s, "titleformat", 2);
    strip_command_with_groups(&s, "newcommand", 2)
}

// ── Pass 2: body extraction ─────────────────────────────────────────────────

lazy_static! {
    static ref RE_DOCUMENT_BODY: Regex =
        Regex::new(r"(?s)\\begin\{document\}(.*?)\\end\{document\}").unwrap();
}

fn extract_body(input: &str, warnings: &mut Vec<RenderWarning>) -> String {
    match RE_DOCUMENT_BODY.captures(input) {
        Some(caps) => caps[1].to_string(),
        None => {
            // Hand-edited fragments routinely lack the wrapper; keep going.
            warnings.push(RenderWarning::missing_document_body());
            input.to_string()
        }
    }
}

// ── Pass 3: header block ────────────────────────────────────────────────────

lazy_static! {
    static ref RE_CENTER: Regex =
        Regex::new(r"(?s)\\begin\{center\}(.*?)\\end\{center\}").unwrap();
}

fn convert_center(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    RE_CENTER
        .replace_all(
            input,
            "<div class='text-center mb-4 pb-3 border-b-2 border-gray-200'>$1</div>",
        )
        .to_string()
}

// ── Pass 4: name heading ────────────────────────────────────────────────────

lazy_static! {
    static ref RE_NAME_BOLD: Regex =
        Regex::new(r"\\textbf\{\\Huge\s+\\scshape\s+([^}]+)\}").unwrap();
    static ref RE_NAME_BARE: Regex = Regex::new(r"\\Huge\s+\\scshape\s+([^\\\n]+)").unwrap();
}

fn convert_name_heading(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let h1 = "<h1 class='text-3xl font-bold mb-2 text-gray-900'>$1</h1>";
    let s = RE_NAME_BOLD.replace_all(input, h1);
    RE_NAME_BARE.replace_all(&s, h1).to_string()
}

// ── Pass 5: sections ────────────────────────────────────────────────────────

lazy_static! {
    static ref RE_SECTION: Regex = Regex::new(r"\\section\{([^}]+)\}").unwrap();
    static ref RE_SUBSECTION: Regex = Regex::new(r"\\subsection\{([^}]+)\}").unwrap();
}

fn convert_sections(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = RE_SECTION.replace_all(
        input,
        "<h2 class='text-lg font-bold mt-4 mb-2 pb-1 border-b-2 border-gray-300 uppercase text-gray-900'>$1</h2>",
    );
    RE_SUBSECTION
        .replace_all(
            &s,
            "<h3 class='text-base font-semibold mt-3 mb-1 text-gray-800'>$1</h3>",
        )
        .to_string()
}

// ── Pass 6: small-text blocks ───────────────────────────────────────────────

lazy_static! {
    static ref RE_SMALL_BARE: Regex = Regex::new(r"\\small\s+([^\n\\]+)").unwrap();
}

fn convert_small_blocks(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = expand_macro(input, "small", 1, false, |args| {
        format!(
            "<div class='text-sm text-gray-700 leading-relaxed mb-3'>{}</div>",
            args[0]
        )
    });
    RE_SMALL_BARE
        .replace_all(&s, "<div class='text-sm text-gray-600 mt-1'>$1</div>")
        .to_string()
}

// ── Pass 7: list macros ─────────────────────────────────────────────────────

lazy_static! {
    static ref RE_ITEMIZE_BEGIN: Regex = Regex::new(r"\\begin\{itemize\}(\[[^\]]*\])?").unwrap();
    static ref RE_ITEM: Regex = Regex::new(r"\\item\s+").unwrap();
}

fn convert_list_macros(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let li = |args: &[String]| format!("<li class='text-sm text-gray-700'>{}</li>", args[0]);
    let s = input.replace("\\resumeSubHeadingListStart", "<div class='space-y-3 mt-2'>");
    let s = s.replace("\\resumeSubHeadingListEnd", "</div>");
    let s = s.replace(
        "\\resumeItemListStart",
        "<ul class='list-disc list-inside mt-1 space-y-1 ml-4'>",
    );
    let s = s.replace("\\resumeItemListEnd", "</ul>");
    let s = expand_macro(&s, "resumeItem", 1, false, li);
    let s = expand_macro(&s, "resumeSubItem", 1, false, li);
    let s = RE_ITEMIZE_BEGIN.replace_all(&s, "<ul class='list-disc list-inside mt-2 space-y-1 ml-4'>");
    let s = s.replace("\\end{itemize}", "</ul>");
    // `\item` from raw itemize blocks opens a list item that nothing closes;
    // the original macro set never balanced these and downstream styling
    // tolerates it.
    RE_ITEM.replace_all(&s, "<li class='text-sm'>").to_string()
}

// ── Pass 8: two-argument project heading ────────────────────────────────────

fn convert_project_heading(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    expand_macro(input, "resumeProjectHeading", 2, true, |args| {
        format!(
            r#"<div class='mb-3'>
      <div class='flex justify-between items-baseline flex-wrap'>
        <h3 class='text-base font-semibold'>{}</h3>
        <span class='text-sm text-gray-600'>{}</span>
      </div>
    </div>"#,
            args[0], args[1]
        )
    })
}

// ── Pass 9: four-argument subheading ────────────────────────────────────────

fn convert_subheading(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    expand_macro(input, "resumeSubheading", 4, true, |args| {
        format!(
            r#"<div class='mb-3'>
      <div class='flex justify-between items-baseline flex-wrap'>
        <h3 class='text-base font-semibold'>{}</h3>
        <span class='text-sm text-gray-600'>{}</span>
      </div>
      <div class='flex justify-between items-baseline flex-wrap'>
        <p class='text-sm italic text-gray-700'>{}</p>
        <span class='text-sm text-gray-600'>{}</span>
      </div>
    </div>"#,
            args[0], args[1], args[2], args[3]
        )
    })
}

// ── Pass 10: tabular fallback ───────────────────────────────────────────────

fn convert_tabular(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let mut s = input.to_string();
    let mut search = 0;
    while let Some(rel) = s[search..].find("\\begin{tabular") {
        let start = search + rel;
        let mut pos = start + "\\begin{tabular".len();
        if s[pos..].starts_with("*}") {
            pos += 2;
        } else if s[pos..].starts_with('}') {
            pos += 1;
        } else {
            search = pos;
            continue;
        }
        // Column-spec arguments: `{width}[pos]{colspec}` for tabular*,
        // `[pos]{colspec}` for tabular. Consume the adjacent group run.
        loop {
            let group = match s.as_bytes().get(pos) {
                Some(b'{') => brace_group(&s, pos),
                Some(b'[') => bracket_group(&s, pos),
                _ => None,
            };
            match group {
                Some(group) => pos = group.end,
                None => break,
            }
        }
        let end_star = s[pos..].find("\\end{tabular*}").map(|i| (i, "\\end{tabular*}".len()));
        let end_plain = s[pos..].find("\\end{tabular}").map(|i| (i, "\\end{tabular}".len()));
        let closest = match (end_star, end_plain) {
            (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
            (a, b) => a.or(b),
        };
        let Some((interior_len, marker_len)) = closest else {
            // Unterminated environment; leave it for the cleanup passes.
            search = pos;
            continue;
        };
        let body = s[pos..pos + interior_len]
            .replace('&', " ")
            .replace("\\\\", "<br/>");
        s.replace_range(start..pos + interior_len + marker_len, &body);
        search = start;
    }
    s
}

// ── Pass 11: inline emphasis ────────────────────────────────────────────────

lazy_static! {
    static ref RE_SCSHAPE_BARE: Regex = Regex::new(r"\\scshape\s+([^\\\n]+)").unwrap();
}

fn convert_inline_emphasis(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = expand_macro(input, "emph", 1, false, |args| {
        format!("<em class='text-gray-600'>{}</em>", args[0])
    });
    let s = expand_macro(&s, "textbf", 1, false, |args| {
        format!("<strong class='font-semibold'>{}</strong>", args[0])
    });
    let s = expand_macro(&s, "textit", 1, false, |args| {
        format!("<em class='italic'>{}</em>", args[0])
    });
    let s = expand_macro(&s, "underline", 1, false, |args| format!("<u>{}</u>", args[0]));
    RE_SCSHAPE_BARE
        .replace_all(&s, "<span class='uppercase tracking-wide text-sm'>$1</span>")
        .to_string()
}

// ── Pass 12: size no-ops ────────────────────────────────────────────────────

lazy_static! {
    static ref RE_LARGE: Regex = Regex::new(r"\\large\s*").unwrap();
    static ref RE_FOOTNOTESIZE: Regex = Regex::new(r"\\footnotesize\s*").unwrap();
}

fn strip_size_noops(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = RE_LARGE.replace_all(input, "");
    RE_FOOTNOTESIZE.replace_all(&s, "").to_string()
}

// ── Pass 13: links ──────────────────────────────────────────────────────────

/// Unwraps a label the inline-emphasis pass already converted from
/// `\underline{...}` to `<u>...</u>`.
fn underline_label(label: &str) -> Option<&str> {
    let trimmed = label.trim();
    trimmed
        .strip_prefix("<u>")
        .and_then(|rest| rest.strip_suffix("</u>"))
}

fn convert_links(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    // Most specific first: mailto with underline wrapper, url with underline
    // wrapper, then the bare form. Pass 11 has already rewritten the
    // `\underline{...}` wrapper into `<u>...</u>`, which is what gets
    // recognized and unwrapped here.
    expand_macro(input, "href", 2, false, |args| {
        let url = &args[0];
        let label = &args[1];
        match underline_label(label) {
            Some(inner) if url.starts_with("mailto:") => {
                format!("<a href='{url}' class='{LINK_CLASS}'>{inner}</a>")
            }
            Some(inner) => {
                format!("<a href='{url}' class='{LINK_CLASS}' target='_blank'>{inner}</a>")
            }
            None => format!("<a href='{url}' class='{LINK_CLASS}' target='_blank'>{label}</a>"),
        }
    })
}

// ── Pass 14: line breaks and spacing ────────────────────────────────────────

lazy_static! {
    static ref RE_BREAK_VSPACE: Regex = Regex::new(r"\\\\\s*\\vspace\{[^}]+\}").unwrap();
    static ref RE_VSPACE: Regex = Regex::new(r"\\vspace\{[^}]+\}").unwrap();
}

fn convert_line_breaks(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    // `\\ \vspace{...}` collapses to a single break, never two.
    let s = RE_BREAK_VSPACE.replace_all(input, "<br/>");
    let s = s.replace("\\\\", "<br/>");
    let s = RE_VSPACE.replace_all(&s, "");
    s.replace("\\hfill", "")
}

// ── Pass 15: special characters ─────────────────────────────────────────────

lazy_static! {
    // One scan for both pipe forms so the literal `|` produced for the
    // math-mode idiom is not itself rewritten into a bullet.
    static ref RE_PIPES: Regex = Regex::new(r"\$\|?\$|\|").unwrap();
}

fn convert_special_chars(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = input
        .replace("\\$", "$")
        .replace("\\&", "&")
        .replace("\\%", "%")
        .replace("\\_", "_")
        .replace("\\#", "#");
    RE_PIPES
        .replace_all(&s, |caps: &Captures<'_>| {
            if caps[0].starts_with('$') {
                " | "
            } else {
                " \u{2022} "
            }
        })
        .to_string()
}

// ── Pass 16: residual command strip ─────────────────────────────────────────

/// Commands the pipeline has a handler for. Anything else that survives to
/// this pass was authored by hand and is reported before being deleted.
static KNOWN_COMMANDS: phf::Set<&'static str> = phf_set! {
    "documentclass", "usepackage", "pagestyle", "fancyhf", "fancyfoot",
    "renewcommand", "newcommand", "addtolength", "setlength", "urlstyle",
    "raggedbottom", "raggedright", "titleformat", "begin", "end",
    "textbf", "textit", "emph", "underline", "scshape", "Huge", "small",
    "large", "footnotesize", "section", "subsection", "item", "href",
    "vspace", "hfill", "labelitemii", "circ", "extracolsep", "fill",
    "textwidth", "resumeItem", "resumeSubItem", "resumeSubheading",
    "resumeProjectHeading", "resumeSubHeadingListStart",
    "resumeSubHeadingListEnd", "resumeItemListStart", "resumeItemListEnd",
    "textbackslash", "textasciitilde", "textasciicircum",
};

lazy_static! {
    static ref RE_RESIDUAL: Regex = Regex::new(r"\\([a-zA-Z]+)\*?\s*").unwrap();
}

fn strip_residual_commands(input: &str, warnings: &mut Vec<RenderWarning>) -> String {
    RE_RESIDUAL
        .replace_all(input, |caps: &Captures<'_>| {
            let name = &caps[1];
            if !KNOWN_COMMANDS.contains(name) {
                warnings.push(RenderWarning::unknown_command(name));
            }
            ""
        })
        .to_string()
}

// ── Pass 17: brace cleanup ──────────────────────────────────────────────────

lazy_static! {
    static ref RE_INNERMOST_GROUP: Regex = Regex::new(r"\{([^{}]*)\}").unwrap();
}

fn cleanup_braces(input: &str, warnings: &mut Vec<RenderWarning>) -> String {
    let mut s = input.to_string();
    loop {
        let next = RE_INNERMOST_GROUP.replace_all(&s, "$1").to_string();
        if next == s {
            break;
        }
        s = next;
    }
    let stray = s.bytes().filter(|b| *b == b'{' || *b == b'}').count();
    if stray > 0 {
        warnings.push(RenderWarning::unbalanced_braces(stray));
        s.retain(|c| c != '{' && c != '}');
    }
    s
}

// ── Pass 18: whitespace normalization ───────────────────────────────────────

lazy_static! {
    static ref RE_TRIPLE_BLANK: Regex = Regex::new(r"\n\s*\n\s*\n").unwrap();
    static ref RE_WS_RUN: Regex = Regex::new(r"\s+").unwrap();
}

fn normalize_whitespace(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = RE_TRIPLE_BLANK.replace_all(input, "\n\n");
    let s = s.replace('\n', " ");
    RE_WS_RUN.replace_all(&s, " ").to_string()
}

// ── Pass 19: structural tidy ────────────────────────────────────────────────

lazy_static! {
    static ref RE_HEADING_JUNCTION: Regex = Regex::new(r"</h([123])>\s*<h").unwrap();
    static ref RE_DIV_HEADING_JUNCTION: Regex = Regex::new(r"</div>\s*<h").unwrap();
}

fn tidy_structure(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    let s = RE_HEADING_JUNCTION.replace_all(input, "</h$1> <h");
    RE_DIV_HEADING_JUNCTION.replace_all(&s, "</div> <h").to_string()
}

// ── Pass 20: container wrap ─────────────────────────────────────────────────

fn wrap_container(input: &str, _warnings: &mut Vec<RenderWarning>) -> String {
    // The Preview Host measures this container for PDF pagination; the
    // width, centering and page padding are part of the output contract.
    format!(
        "<div class=\"max-w-4xl mx-auto bg-white min-h-full\" style=\"padding: 0.5in;\">\n    {input}\n  </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pass: Pass, input: &str) -> String {
        let mut warnings = Vec::new();
        pass(input, &mut warnings)
    }

    #[test]
    fn test_strip_preamble_whole_header() {
        let input = "\\documentclass[letterpaper,11pt]{article}\n\\usepackage{titlesec}\n\\usepackage[hidelinks]{hyperref}\n\\raggedright\nbody";
        let out = run(strip_preamble, input);
        assert!(!out.contains("documentclass"));
        assert!(!out.contains("usepackage"));
        assert!(!out.contains("raggedright"));
        assert!(out.contains("body"));
    }

    #[test]
    fn test_strip_preamble_newcommand_nested_body() {
        let input = "\\newcommand{\\resumeItem}[1]{\n  \\item\\small{\n    {#1 \\vspace{-2pt}}\n  }\n}\nkeep";
        let out = run(strip_preamble, input);
        assert_eq!(out.trim(), "keep");
    }

    #[test]
    fn test_extract_body_keeps_interior_only() {
        let out = run(extract_body, "pre\\begin{document}inside\\end{document}post");
        assert_eq!(out, "inside");
    }

    #[test]
    fn test_extract_body_without_wrapper_warns() {
        let mut warnings = Vec::new();
        let out = extract_body("no wrapper here", &mut warnings);
        assert_eq!(out, "no wrapper here");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_center_becomes_bordered_div() {
        let out = run(convert_center, "\\begin{center}X\\end{center}");
        assert_eq!(
            out,
            "<div class='text-center mb-4 pb-3 border-b-2 border-gray-200'>X</div>"
        );
    }

    #[test]
    fn test_name_heading_bold_form() {
        let out = run(convert_name_heading, "\\textbf{\\Huge \\scshape Ada Lovelace}");
        assert_eq!(
            out,
            "<h1 class='text-3xl font-bold mb-2 text-gray-900'>Ada Lovelace</h1>"
        );
    }

    #[test]
    fn test_name_heading_bare_form() {
        let out = run(convert_name_heading, "\\Huge \\scshape Ada Lovelace\n");
        assert!(out.starts_with("<h1 "));
        assert!(out.contains("Ada Lovelace"));
    }

    #[test]
    fn test_sections_run_before_small() {
        let out = run(convert_sections, "\\section{Skills}");
        assert!(out.contains("<h2 "));
        assert!(out.contains(">Skills</h2>"));
        let out = run(convert_sections, "\\subsection{Detail}");
        assert!(out.contains("<h3 "));
    }

    #[test]
    fn test_small_braced_and_bare() {
        let out = run(convert_small_blocks, "\\small{Go, Rust}");
        assert_eq!(
            out,
            "<div class='text-sm text-gray-700 leading-relaxed mb-3'>Go, Rust</div>"
        );
        let out = run(convert_small_blocks, "\\small free text\n");
        assert!(out.contains("<div class='text-sm text-gray-600 mt-1'>free text</div>"));
    }

    #[test]
    fn test_small_nested_braces() {
        let out = run(convert_small_blocks, "\\small{uses \\{braces\\} inside}");
        assert!(out.contains("uses \\{braces\\} inside"));
    }

    #[test]
    fn test_list_macros() {
        let input = "\\resumeSubHeadingListStart\\resumeItemListStart\\resumeItem{Built things}\\resumeItemListEnd\\resumeSubHeadingListEnd";
        let out = run(convert_list_macros, input);
        assert_eq!(
            out,
            "<div class='space-y-3 mt-2'><ul class='list-disc list-inside mt-1 space-y-1 ml-4'><li class='text-sm text-gray-700'>Built things</li></ul></div>"
        );
    }

    #[test]
    fn test_raw_itemize_items_stay_unbalanced() {
        let out = run(convert_list_macros, "\\begin{itemize}[leftmargin=*]\n\\item one\n\\end{itemize}");
        assert!(out.contains("<ul class='list-disc list-inside mt-2 space-y-1 ml-4'>"));
        assert!(out.contains("<li class='text-sm'>one"));
        assert!(!out.contains("</li>"));
        assert!(out.contains("</ul>"));
    }

    #[test]
    fn test_project_heading_two_rows() {
        let out = run(
            convert_project_heading,
            "\\resumeProjectHeading\n      {Tool $|$ \\emph{Rust}}{2024}",
        );
        assert!(out.contains("<h3 class='text-base font-semibold'>Tool $|$ \\emph{Rust}</h3>"));
        assert!(out.contains("<span class='text-sm text-gray-600'>2024</span>"));
    }

    #[test]
    fn test_subheading_four_args() {
        let out = run(
            convert_subheading,
            "\\resumeSubheading\n  {Engineer}{2020 - Present}\n  {Initech}{Remote}",
        );
        assert!(out.contains(">Engineer</h3>"));
        assert!(out.contains(">2020 - Present</span>"));
        assert!(out.contains("<p class='text-sm italic text-gray-700'>Initech</p>"));
        assert!(out.contains(">Remote</span>"));
    }

    #[test]
    fn test_tabular_collapses_to_text() {
        let input = "\\begin{tabular*}{0.97\\textwidth}[t]{l@{\\extracolsep{\\fill}}r}\nA & B \\\\\n\\end{tabular*}";
        let out = run(convert_tabular, input);
        assert!(!out.contains("tabular"));
        assert!(out.contains("A   B <br/>"));
    }

    #[test]
    fn test_inline_emphasis_nesting() {
        let out = run(convert_inline_emphasis, "\\textbf{bold \\textit{both}}");
        assert_eq!(
            out,
            "<strong class='font-semibold'>bold <em class='italic'>both</em></strong>"
        );
    }

    #[test]
    fn test_underline_then_scshape() {
        let out = run(convert_inline_emphasis, "\\underline{u} \\scshape caps\n");
        assert!(out.contains("<u>u</u>"));
        assert!(out.contains("<span class='uppercase tracking-wide text-sm'>caps</span>"));
    }

    #[test]
    fn test_links_after_emphasis() {
        let s = run(convert_inline_emphasis, "\\href{https://x.com}{\\underline{Site}}");
        let out = run(convert_links, &s);
        assert_eq!(
            out,
            "<a href='https://x.com' class='text-blue-600 hover:underline' target='_blank'>Site</a>"
        );
    }

    #[test]
    fn test_mailto_link_no_new_tab() {
        let s = run(convert_inline_emphasis, "\\href{mailto:a@b.c}{\\underline{a@b.c}}");
        let out = run(convert_links, &s);
        assert_eq!(
            out,
            "<a href='mailto:a@b.c' class='text-blue-600 hover:underline'>a@b.c</a>"
        );
    }

    #[test]
    fn test_plain_link_keeps_label() {
        let out = run(convert_links, "\\href{https://x.com}{x dot com}");
        assert_eq!(
            out,
            "<a href='https://x.com' class='text-blue-600 hover:underline' target='_blank'>x dot com</a>"
        );
    }

    #[test]
    fn test_break_vspace_collapses_once() {
        let out = run(convert_line_breaks, "a \\\\ \\vspace{2pt} b \\\\ c \\vspace{1pt} \\hfill d");
        assert_eq!(out, "a <br/> b <br/> c   d");
    }

    #[test]
    fn test_escaped_specials_unescape() {
        let out = run(convert_special_chars, "\\$5 \\& 10\\% \\_x \\#1");
        assert_eq!(out, "$5 & 10% _x #1");
    }

    #[test]
    fn test_math_pipe_survives_bullet_rewrite() {
        let out = run(convert_special_chars, "A $|$ B");
        assert_eq!(out, "A  |  B");
    }

    #[test]
    fn test_stray_pipe_becomes_bullet() {
        let out = run(convert_special_chars, "a | b");
        assert_eq!(out, "a  \u{2022}  b");
    }

    #[test]
    fn test_residual_strip_warns_on_unknown() {
        let mut warnings = Vec::new();
        let out = strip_residual_commands("x \\mystery{arg} \\vspace y", &mut warnings);
        assert_eq!(out, "x {arg} y");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("mystery"));
    }

    #[test]
    fn test_brace_cleanup_unwraps_then_deletes() {
        let mut warnings = Vec::new();
        let out = cleanup_braces("{a {b} c} dangling }", &mut warnings);
        assert_eq!(out, "a b c dangling ");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_whitespace_flattens_to_single_spaces() {
        let out = run(normalize_whitespace, "a\n\n\n\nb\n c   d");
        assert_eq!(out, "a b c d");
    }

    #[test]
    fn test_tidy_separates_adjacent_headings() {
        let out = run(tidy_structure, "</h2><h3 class='x'>t</h3></div><h2");
        assert!(out.contains("</h2> <h3"));
        assert!(out.contains("</div> <h2"));
    }

    #[test]
    fn test_tidy_is_idempotent() {
        let once = run(tidy_structure, "</h2><h3");
        let twice = run(tidy_structure, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_wrap_container_fixed_frame() {
        let out = run(wrap_container, "X");
        assert!(out.starts_with("<div class=\"max-w-4xl mx-auto bg-white min-h-full\" style=\"padding: 0.5in;\">"));
        assert!(out.ends_with("</div>"));
    }
}
