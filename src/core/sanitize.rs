// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// File-name-safe version of a URL fragment: ASCII alphanumerics, `-` and `.` are
/// kept; any run of other characters (`_` included) becomes a single `_`. Leading and
/// trailing `_`/`.` are trimmed; an empty result gives `fallback`.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames() {
        assert_eq!(sanitize_filename("232-farba-greenblack", "x"), "232-farba-greenblack");
        assert_eq!(sanitize_filename("a b%20c", "x"), "a_b_20c");
        assert_eq!(sanitize_filename("a__b _c", "x"), "a_b_c");
        assert_eq!(sanitize_filename("..", "image"), "image");
        assert_eq!(sanitize_filename("", "image"), "image");
    }

    #[test]
    fn entities() {
        assert_eq!(normalize_entities("a&amp;b&nbsp;c"), "a&b c");
    }
}
