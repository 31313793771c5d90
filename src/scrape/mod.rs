// src/scrape/mod.rs
mod images;

pub use images::{run as download_images, DownloadSummary};
