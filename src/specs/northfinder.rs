// src/specs/northfinder.rs
//! Scraping *spec* for Northfinder product pages.
//!
//! Purpose:
//! - Tell a direct image URL from a product page URL.
//! - Derive the product "core" name (`…/8434-bu-5273sp-…-phil.html` → `bu-5273sp-…-phil`),
//!   which is also part of every product image file name and doubles as the default filter.
//! - Pull image URLs out of the raw page (regex over the whole document: images hide in
//!   `srcset`, inline JSON and `data-*` attributes, not just `<img src>`).
//! - Find links to the same product's colour variants (`…phil.html/232-farba-greenblack`).
//!
//! Everything here is pure string/URL work; fetching and saving live in `scrape::images`.

use std::{error::Error, sync::LazyLock};

use regex::Regex;
use reqwest::Url;

use crate::config::consts::{IMAGE_EXTS, ORIGINAL_MARKER, SUPPLIER_HOST};
use crate::core::{html, sanitize::sanitize_filename};

static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https://(?:b2b\.)?northfinder\.com/[^\s"']+?\.(?:webp|jpg|jpeg|png)(?:\?[^\s"']*)?"#)
        .expect("valid image URL pattern")
});

/// A link straight to a supplier image (`northfinder.com` or `b2b.northfinder.com`).
pub fn is_direct_image_url(url: &str) -> bool {
    let Ok(u) = Url::parse(url) else { return false };
    let host_ok = u.host_str().is_some_and(|h| h.contains(SUPPLIER_HOST));
    let path = u.path().to_lowercase();
    host_ok && IMAGE_EXTS.iter().any(|ext| path.ends_with(ext))
}

/// Product core name from the first `.html` path segment, numeric id prefix dropped.
pub fn derive_filter(url: &str) -> Option<String> {
    let u = Url::parse(url).ok()?;
    let seg = u.path().split('/').filter(|s| !s.is_empty()).find(|s| s.contains(".html"))?;
    let base = seg.split(".html").next().unwrap_or(seg);

    let base = match base.split_once('-') {
        Some((id, rest)) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => base,
    };
    Some(base.to_lowercase())
}

/// Colour/variant segment right after `.html/`, if the URL has one.
pub fn derive_variant_tag(url: &str) -> Option<String> {
    let u = Url::parse(url).ok()?;
    let (_, after) = u.path().split_once(".html/")?;
    let tag = after.split('/').next().unwrap_or("");
    if tag.is_empty() { None } else { Some(s!(tag)) }
}

/// Every supplier image URL in the document, first occurrence order, no duplicates.
pub fn extract_image_urls(doc: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for m in IMAGE_URL_RE.find_iter(doc) {
        let u = m.as_str();
        if !out.iter().any(|seen| seen == u) {
            out.push(s!(u));
        }
    }
    out
}

/// Keep URLs containing `needle` (case-insensitive). No needle keeps everything.
pub fn filter_by_substring(urls: Vec<String>, needle: Option<&str>) -> Vec<String> {
    let Some(n) = needle.filter(|n| !n.is_empty()) else { return urls };
    let n = n.to_lowercase();
    urls.into_iter().filter(|u| u.to_lowercase().contains(&n)).collect()
}

/// Full-size renditions only, when the page has any.
pub fn prefer_original_default(urls: Vec<String>) -> Vec<String> {
    if urls.iter().any(|u| u.contains(ORIGINAL_MARKER)) {
        urls.into_iter().filter(|u| u.contains(ORIGINAL_MARKER)).collect()
    } else {
        urls
    }
}

/// Same-product pages linked from `doc`: same host and port, path containing the
/// base `….html` path. The base URL comes first; fragments are dropped.
pub fn find_variant_urls(doc: &str, base_url: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut base = Url::parse(base_url)?;
    base.set_fragment(None);

    let base_path = base.path();
    let html_path = match base_path.split_once(".html") {
        Some((head, _)) => join!(head, ".html"),
        None => s!(base_path),
    };

    let mut out = vec![s!(base.as_str())];
    for href in html::anchor_hrefs(doc) {
        let Ok(mut full) = base.join(&href) else { continue };
        full.set_fragment(None);
        if full.host_str() != base.host_str() || full.port_or_known_default() != base.port_or_known_default() {
            continue;
        }
        if !full.path().contains(&html_path) {
            continue;
        }
        let s = s!(full.as_str());
        if !out.contains(&s) {
            out.push(s);
        }
    }
    Ok(out)
}

/// `[<tag>_]<NN>_<basename>.png` for the `index`-th (1-based) image of a page.
pub fn png_file_name(url: &str, index: usize, tag: Option<&str>) -> String {
    let no_query = url.split('?').next().unwrap_or(url);
    let file = Url::parse(no_query)
        .ok()
        .and_then(|u| u.path_segments().and_then(|mut s| s.next_back().map(String::from)))
        .unwrap_or_default();
    let stem = match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file.as_str(),
    };

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(t) = tag {
        parts.push(sanitize_filename(t, "variant"));
    }
    parts.push(format!("{:02}", index));
    parts.push(sanitize_filename(stem, "image"));
    join!(parts.join("_"), ".png")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHIL: &str = "https://www.northfinder.com/sk/8434-bu-5273sp-panska-komfortna-urban-bunda-premium-outershell-2l-phil.html";
    const TAYLER: &str = "https://www.northfinder.com/sk/7001-tayler.html/232-farba-greenblack";

    #[test]
    fn direct_image_detection() {
        assert!(is_direct_image_url("https://b2b.northfinder.com/img/p/1/2/12-original_default.JPG"));
        assert!(is_direct_image_url("https://northfinder.com/x/y.webp?v=3"));
        assert!(!is_direct_image_url(PHIL));
        assert!(!is_direct_image_url("https://example.com/a.png"));
        assert!(!is_direct_image_url("not a url"));
    }

    #[test]
    fn filter_from_product_url() {
        assert_eq!(
            derive_filter(PHIL).as_deref(),
            Some("bu-5273sp-panska-komfortna-urban-bunda-premium-outershell-2l-phil")
        );
        assert_eq!(derive_filter(TAYLER).as_deref(), Some("tayler"));
        assert_eq!(derive_filter("https://www.northfinder.com/sk/Jacket-X.html").as_deref(), Some("jacket-x"));
        assert_eq!(derive_filter("https://www.northfinder.com/sk/kategoria/"), None);
    }

    #[test]
    fn variant_tag_only_after_html_slash() {
        assert_eq!(derive_variant_tag(TAYLER).as_deref(), Some("232-farba-greenblack"));
        assert_eq!(derive_variant_tag(PHIL), None);
        assert_eq!(derive_variant_tag("https://northfinder.com/a.html/"), None);
    }

    #[test]
    fn image_urls_deduped_filtered_and_originals_preferred() {
        let doc = r#"
            <img src="https://northfinder.com/1-home_default/tayler.jpg">
            <a href='https://b2b.northfinder.com/2-original_default/tayler.webp?x=1'>z</a>
            "https://northfinder.com/1-home_default/tayler.jpg"
            <img src="https://www.northfinder.com/8-skipped/www-host.jpg">
            <img src="https://northfinder.com/9-original_default/other.PNG">
            <img src="https://cdn.example.com/3.jpg">
        "#;
        let all = extract_image_urls(doc);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], "https://northfinder.com/1-home_default/tayler.jpg");
        assert_eq!(all[1], "https://b2b.northfinder.com/2-original_default/tayler.webp?x=1");

        let filtered = filter_by_substring(all.clone(), Some("TAYLER"));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_by_substring(all.clone(), None).len(), 3);

        let best = prefer_original_default(filtered);
        assert_eq!(best, vec![s!("https://b2b.northfinder.com/2-original_default/tayler.webp?x=1")]);

        let none = vec![s!("https://northfinder.com/a.jpg")];
        assert_eq!(prefer_original_default(none.clone()), none);
    }

    #[test]
    fn variant_links_same_host_same_product() {
        let base = "https://www.northfinder.com/sk/7001-tayler.html#top";
        let doc = r#"
            <a href="/sk/7001-tayler.html/232-farba-greenblack">g</a>
            <a href="7001-tayler.html/233-farba-red#gallery">r</a>
            <a href="https://www.northfinder.com/sk/7001-tayler.html/232-farba-greenblack">dup</a>
            <a href="https://shop.other.com/sk/7001-tayler.html/1">other host</a>
            <a href="/sk/8000-phil.html">other product</a>
        "#;
        let urls = find_variant_urls(doc, base).unwrap();
        assert_eq!(urls, vec![
            s!("https://www.northfinder.com/sk/7001-tayler.html"),
            s!("https://www.northfinder.com/sk/7001-tayler.html/232-farba-greenblack"),
            s!("https://www.northfinder.com/sk/7001-tayler.html/233-farba-red"),
        ]);
    }

    #[test]
    fn png_names() {
        let u = "https://b2b.northfinder.com/img/12-original_default/tayler.webp?v=2";
        assert_eq!(png_file_name(u, 1, None), "01_tayler.png");
        assert_eq!(png_file_name(u, 12, Some("232-farba-greenblack")), "232-farba-greenblack_12_tayler.png");
    }
}
