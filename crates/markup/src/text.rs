//! String helpers shared by renderers.

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// True if `s` is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trims surrounding whitespace and newlines, then normalizes inner line endings.
pub fn clean_content(s: &str, trim: bool) -> String {
    let normalized = normalize_line_endings(s);
    if trim {
        normalized.trim().to_string()
    } else {
        normalized
    }
}

pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
