//! Locating a JSON object inside a free-form model reply.
//!
//! Models frequently wrap the requested object in prose or markdown fences.
//! The scan below starts at the first `{` and counts brace depth, skipping
//! over string literals (and escapes inside them) so that braces in values
//! such as `"use {caution}"` do not end the object early.

/// Return the first balanced top-level `{...}` slice in `text`.
///
/// Only the object starting at the first `{` is considered. If that object is
/// never closed the result is `None`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
