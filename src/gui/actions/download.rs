// src/gui/actions/download.rs
//
// Runs on the UI thread; the window is unresponsive until the download ends.

use crate::{gui::{app::App, progress::GuiProgress}, scrape};

pub fn download(app: &mut App) {
    app.state.sync_image_fields();
    if app.state.options.images.url.trim().is_empty() {
        app.status("Enter a product or image URL");
        return;
    }

    let mut progress = GuiProgress::new(app.status.clone());
    let result = scrape::download_images(&app.state.options.images, Some(&mut progress));
    app.image_log = progress.lines;

    if let Err(e) = result {
        loge!("Images: Error: {}", e);
        app.image_log.push(format!("Error: {e}"));
        app.status(format!("Download error: {e}"));
    }
}
