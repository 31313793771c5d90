// src/variants/images.rs
//
// Image list cells: "a.jpg;b.jpg", "a.jpg | b.jpg", "a.jpg, b.jpg" all mean the same list.

use std::collections::HashSet;

use crate::config::consts::{IMAGE_JOIN, IMAGE_SEPARATORS};

/// Trimmed, non-empty entries of one image cell.
pub fn split_images(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(IMAGE_SEPARATORS)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Union of every cell's entries, first-seen order, joined with ';'.
pub fn merge_unique<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut out: Vec<&'a str> = Vec::new();
    for v in values {
        for p in split_images(v) {
            if seen.insert(p) {
                out.push(p);
            }
        }
    }
    out.join(IMAGE_JOIN)
}

/// First entry of one cell, or "".
pub fn first(value: &str) -> String {
    split_images(value).next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_first_seen_order() {
        assert_eq!(merge_unique(["a;b", "b;c"]), "a;b;c");
        assert_eq!(
            merge_unique(["img1.jpg;img2.jpg", "img2.jpg", "img3.jpg"]),
            "img1.jpg;img2.jpg;img3.jpg"
        );
    }

    #[test]
    fn merge_accepts_mixed_separators_and_blanks() {
        assert_eq!(merge_unique(["c | a", "", " b, c ;a", ";;"]), "c;a;b");
        assert_eq!(merge_unique(Vec::<&str>::new()), "");
    }

    #[test]
    fn first_entry() {
        assert_eq!(first("x,y,z"), "x");
        assert_eq!(first(""), "");
        assert_eq!(first("  ; |b.png"), "b.png");
        assert_eq!(first(" a.webp "), "a.webp");
    }
}
