//! Brace-aware scanning for macro arguments.
//!
//! The resume dialect nests braces one level deep inside macro arguments
//! (`\textbf{\Huge \scshape Name}`, `\newcommand` bodies with `\vspace{...}`
//! inside), which a `[^{}]*` regex truncates at the first closing brace.
//! These helpers scan byte-wise, balance nested groups, and treat `\{`,
//! `\}` and `\\` escape pairs as literal text.
//!
//! All functions are total: on malformed input (unmatched braces, missing
//! arguments) they decline to match and the caller leaves the occurrence
//! untouched for the later cleanup passes.

/// A brace-delimited argument group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Content between the delimiters, exclusive.
    pub content: String,
    /// Byte offset one past the closing delimiter.
    pub end: usize,
}

/// Scans the `{...}` group whose opening brace sits at byte offset `at`.
///
/// Returns `None` when `at` does not point at `{` or the group is never
/// closed. Nested groups are balanced; `\X` pairs are skipped so escaped
/// braces do not count as delimiters.
pub fn brace_group(input: &str, at: usize) -> Option<Group> {
    let bytes = input.as_bytes();
    if bytes.get(at) != Some(&b'{') {
        return None;
    }
    let mut depth = 1usize;
    let mut i = at + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(Group {
                        content: input[at + 1..i].to_string(),
                        end: i + 1,
                    });
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Scans the `[...]` group whose opening bracket sits at byte offset `at`.
///
/// Bracketed optional arguments do not nest in this dialect; the group ends
/// at the first unescaped `]`.
pub fn bracket_group(input: &str, at: usize) -> Option<Group> {
    let bytes = input.as_bytes();
    if bytes.get(at) != Some(&b'[') {
        return None;
    }
    let mut i = at + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b']' => {
                return Some(Group {
                    content: input[at + 1..i].to_string(),
                    end: i + 1,
                });
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Finds the next `\name` occurrence at or after `from`.
///
/// The character following the name must not extend it (`\small` must not
/// match inside `\smallskip`). The backslash itself is not checked for a
/// preceding escape: `\\section{X}` reads as a line break followed by a
/// `\section` command, matching how the preview has always treated it.
pub fn find_command(input: &str, name: &str, from: usize) -> Option<usize> {
    let needle = format!("\\{name}");
    let mut search = from;
    while let Some(rel) = input.get(search..)?.find(&needle) {
        let start = search + rel;
        let after = start + needle.len();
        match input.as_bytes().get(after) {
            Some(b) if b.is_ascii_alphabetic() => search = start + 1,
            _ => return Some(start),
        }
    }
    None
}

/// Reads `arity` consecutive `{...}` groups starting at `pos`.
///
/// With `skip_ws` set, ASCII whitespace is allowed before each group (the
/// block macros spread their arguments over several lines). Returns the
/// argument contents and the offset one past the final group, or `None` if
/// any group fails to bind.
pub fn read_args(input: &str, pos: usize, arity: usize, skip_ws: bool) -> Option<(Vec<String>, usize)> {
    let bytes = input.as_bytes();
    let mut args = Vec::with_capacity(arity);
    let mut cursor = pos;
    for _ in 0..arity {
        if skip_ws {
            while bytes.get(cursor).is_some_and(|b| b.is_ascii_whitespace()) {
                cursor += 1;
            }
        }
        let group = brace_group(input, cursor)?;
        cursor = group.end;
        args.push(group.content);
    }
    Some((args, cursor))
}

/// Rewrites every `\name{a1}...{aN}` occurrence via `render`.
///
/// Occurrences whose arguments cannot be bound are left untouched for the
/// residual-command and brace-cleanup passes. After a replacement, scanning
/// resumes at the start of the inserted text so same-name macros nested in
/// arguments are expanded on the following iterations; each replacement
/// consumes exactly one occurrence, so the loop terminates.
pub fn expand_macro<F>(input: &str, name: &str, arity: usize, skip_ws: bool, render: F) -> String
where
    F: Fn(&[String]) -> String,
{
    let mut s = input.to_string();
    let mut search = 0;
    while let Some(start) = find_command(&s, name, search) {
        let after_name = start + 1 + name.len();
        match read_args(&s, after_name, arity, skip_ws) {
            Some((args, end)) => {
                let replacement = render(&args);
                s.replace_range(start..end, &replacement);
                search = start;
            }
            None => search = after_name,
        }
    }
    s
}

/// Deletes every `\name` occurrence together with the run of `{...}` / `[...]`
/// argument groups immediately following it.
///
/// Used by the preamble strip, where argument counts vary (`\titleformat`
/// takes five brace groups plus a bracket, `\usepackage` takes an optional
/// bracket plus one brace group). Occurrences followed by fewer than
/// `min_groups` groups are left untouched.
pub fn strip_command_with_groups(input: &str, name: &str, min_groups: usize) -> String {
    let mut s = input.to_string();
    let mut search = 0;
    while let Some(start) = find_command(&s, name, search) {
        let mut cursor = start + 1 + name.len();
        let mut groups = 0usize;
        loop {
            let group = match s.as_bytes().get(cursor) {
                Some(b'{') => brace_group(&s, cursor),
                Some(b'[') => bracket_group(&s, cursor),
                _ => None,
            };
            match group {
                Some(group) => {
                    cursor = group.end;
                    groups += 1;
                }
                None => break,
            }
        }
        if groups >= min_groups {
            s.replace_range(start..cursor, "");
            search = start;
        } else {
            search = cursor;
        }
    }
    s
}
