// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `None` for empty strings, so blank markup reads as "not present".
pub fn non_blank(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Last non-empty `/` segment of a path or href, ignoring `?query` and `#fragment`.
/// "/ravintolat/ravintola-a/" → "ravintola-a"
pub fn last_segment(path: &str) -> Option<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').rev().find(|seg| !seg.is_empty())
}
