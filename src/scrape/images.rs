// src/scrape/images.rs
//
// Download supplier product images and store them as PNG.
//
//   direct image URL → <out or images_direct>/01_<name>.png
//   product page     → <out or images_<filter> or images>/[<tag>_]NN_<name>.png
//   --all-variants   → the same for every colour variant linked from the page

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use image::ImageFormat;

use crate::{
    config::options::ImageOptions,
    core::net::Fetcher,
    file::ensure_directory,
    progress::{NullProgress, Progress},
    specs::northfinder,
};

/// What a download run produced.
#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub out_dir: PathBuf,
    pub pages: usize,
    pub saved: Vec<PathBuf>,
    /// (image URL, error) for every skipped image.
    pub failed: Vec<(String, String)>,
}

pub fn run(
    opts: &ImageOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<DownloadSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let url = opts.url.trim();
    if url.is_empty() {
        return Err("No URL given".into());
    }

    let fetcher = Fetcher::new(opts.try_secure_first)?;
    let mut summary = DownloadSummary::default();

    if northfinder::is_direct_image_url(url) {
        let out_dir = opts.direct_out_dir();
        ensure_directory(&out_dir)?;
        p.begin(1);
        p.log(&format!("Direct image URL, saving one PNG into '{}'", out_dir.display()));

        let saved = save_png(&fetcher, url, &out_dir, 1, None)?;
        p.item_done(&saved.display().to_string());
        logf!("Images: saved {}", saved.display());

        summary.saved.push(saved);
        summary.out_dir = out_dir;
        p.finish();
        return Ok(summary);
    }

    let filter = match opts.filter.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => Some(s!(f)),
        None => {
            let derived = northfinder::derive_filter(url);
            match &derived {
                Some(f) => p.log(&format!("Filter derived from URL: '{}'", f)),
                None => p.log("Could not derive a filter from the URL; keeping every image"),
            }
            derived
        }
    };

    let out_dir = opts.page_out_dir(filter.as_deref());
    ensure_directory(&out_dir)?;

    // (page URL, body if already fetched)
    let pages: Vec<(String, Option<String>)> = if opts.all_variants {
        p.log(&format!("Loading page to look for variants: {}", url));
        let doc = fetcher.get_text(url)?;
        let urls = northfinder::find_variant_urls(&doc, url)?;
        p.log(&format!("Found {} variant page(s), including this one", urls.len()));

        let mut first = Some(doc);
        urls.into_iter()
            .enumerate()
            .map(|(i, u)| (u, if i == 0 { first.take() } else { None }))
            .collect()
    } else {
        vec![(s!(url), None)]
    };

    logf!(
        "Images: url={} filter={:?} out={} pages={} secure_first={}",
        url, filter, out_dir.display(), pages.len(), opts.try_secure_first
    );

    p.begin(pages.len());
    for (page, body) in pages {
        process_page(&fetcher, &page, body, filter.as_deref(), &out_dir, &mut summary, p)?;
        summary.pages += 1;
    }

    logf!("Images: saved={} failed={}", summary.saved.len(), summary.failed.len());
    summary.out_dir = out_dir;
    p.finish();
    Ok(summary)
}

/// Images of one product page. Only the page fetch itself can fail the run.
fn process_page(
    fetcher: &Fetcher,
    page_url: &str,
    body: Option<String>,
    filter: Option<&str>,
    out_dir: &Path,
    summary: &mut DownloadSummary,
    p: &mut dyn Progress,
) -> Result<(), Box<dyn Error>> {
    p.log(&format!("Loading product: {}", page_url));
    let doc = match body {
        Some(b) => b,
        None => fetcher.get_text(page_url)?,
    };

    let all = northfinder::extract_image_urls(&doc);
    if all.is_empty() {
        p.log("  no northfinder.com images in the page");
        return Ok(());
    }

    let filtered = northfinder::filter_by_substring(all, filter);
    if filtered.is_empty() {
        p.log(&format!("  no images match filter '{}'", filter.unwrap_or("")));
        return Ok(());
    }
    let urls = northfinder::prefer_original_default(filtered);

    let tag = northfinder::derive_variant_tag(page_url);
    p.log(&format!("  variant: {}, images: {}", tag.as_deref().unwrap_or("(no tag)"), urls.len()));

    for (i, img_url) in urls.iter().enumerate() {
        match save_png(fetcher, img_url, out_dir, i + 1, tag.as_deref()) {
            Ok(path) => {
                p.item_done(&path.display().to_string());
                summary.saved.push(path);
            }
            Err(e) => {
                loge!("Images: {} failed: {}", img_url, e);
                p.item_failed(img_url, &e.to_string());
                summary.failed.push((img_url.clone(), e.to_string()));
            }
        }
    }
    Ok(())
}

/// Fetch, decode (webp/jpeg/png), and save as RGBA PNG.
fn save_png(
    fetcher: &Fetcher,
    url: &str,
    out_dir: &Path,
    index: usize,
    tag: Option<&str>,
) -> Result<PathBuf, Box<dyn Error>> {
    let bytes = fetcher.get_bytes(url)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();

    let path = out_dir.join(northfinder::png_file_name(url, index, tag));
    rgba.save_with_format(&path, ImageFormat::Png)?;
    Ok(path)
}
