// src/core/html.rs
//! Tolerant tag scanning. No DOM; just enough to pull attributes out of openers.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Every `<tag …>` opener in `doc` (text between `<` and `>`, trimmed),
/// matched case-insensitively on the tag name. Closers and other tags are skipped.
pub fn tag_openers<'a>(doc: &'a str, tag: &str) -> Vec<&'a str> {
    let bytes = doc.as_bytes();
    let n = bytes.len();
    let mut out = Vec::new();
    let mut i = 0usize;

    let next_char_pos = |from: usize, ch: u8| -> Option<usize> {
        bytes.get(from..)?.iter().position(|&c| c == ch).map(|off| from + off)
    };

    while i < n {
        let lt = match next_char_pos(i, b'<') { Some(p) => p, None => break };
        let gt = match next_char_pos(lt + 1, b'>') { Some(p) => p, None => break };

        let tag_text = doc[(lt + 1)..gt].trim();

        // tag name: letters/digits only, so "/a" and "!--" never match
        let name_end = tag_text
            .bytes()
            .position(|c| !c.is_ascii_alphanumeric())
            .unwrap_or(tag_text.len());
        let name = &tag_text[..name_end];

        if name.eq_ignore_ascii_case(tag) {
            out.push(tag_text);
        }
        i = gt + 1;
    }
    out
}

/// Value of `attr=` inside a tag opener. Handles `"…"`, `'…'` and bare values.
pub fn attr_value<'a>(opener: &'a str, attr: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let pat = join!(to_lower(attr), "=");

    // require a boundary so "data-href=" doesn't answer for "href="
    let mut from = 0usize;
    let hp = loop {
        let rel = lc.get(from..)?.find(&pat)?;
        let at = from + rel;
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        if boundary { break at; }
        from = at + pat.len();
    };

    let val = opener[hp + pat.len()..].trim_start();
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
    }
    .unwrap_or(val.len());

    Some(&val[start_off..end])
}

/// All `<a href="…">` values in document order, entities normalized.
pub fn anchor_hrefs(doc: &str) -> Vec<String> {
    tag_openers(doc, "a")
        .into_iter()
        .filter_map(|o| attr_value(o, "href"))
        .map(|h| super::sanitize::normalize_entities(h.trim()))
        .filter(|h| !h.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_only_anchor_openers() {
        let doc = r#"<div><A class="x" HREF="/a.html">A</A><abbr title="t">x</abbr><a>bare</a></div>"#;
        let openers = tag_openers(doc, "a");
        assert_eq!(openers, vec![r#"A class="x" HREF="/a.html""#, "a"]);
    }

    #[test]
    fn attribute_quoting_styles() {
        assert_eq!(attr_value(r#"a href="/x y""#, "href"), Some("/x y"));
        assert_eq!(attr_value("a href='/q'", "href"), Some("/q"));
        assert_eq!(attr_value("a href=/bare class=z", "href"), Some("/bare"));
        assert_eq!(attr_value(r#"a data-href="/no""#, "href"), None);
        assert_eq!(attr_value("a class=z", "href"), None);
    }

    #[test]
    fn hrefs_in_order_with_entities() {
        let doc = r#"<a href="/p.html?a=1&amp;b=2">1</a> <a name="x">n</a> <a href='/p.html/2'>2</a>"#;
        assert_eq!(anchor_hrefs(doc), vec![s!("/p.html?a=1&b=2"), s!("/p.html/2")]);
    }
}
