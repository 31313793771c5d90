// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(build) = &app.build else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let sep = app.export_delim();
    let txt = csv::to_export_string(&build.dataset, sep);
    logf!("Copy: rows={}, headers={}", build.dataset.row_count(), build.dataset.header_count());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
