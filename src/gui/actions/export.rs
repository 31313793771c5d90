// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.state.gui.out_path_dirty {
        let text = app.state.gui.out_path_text.trim();
        app.state.options.export.out_path = if text.is_empty() { None } else { Some(PathBuf::from(text)) };
        logf!("Export: Out path set → {:?}", app.state.options.export.out_path);
        app.state.gui.out_path_dirty = false;
        app.refresh_out_path();
    }

    let Some(build) = &app.build else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export (build first)");
        return;
    };
    let Some((_, src)) = &app.input else {
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    let sep = app.export_delim();
    let path = export.out_path_for(&src.path, src.is_spreadsheet());

    logf!("Export: Begin rows={} sep={:?} path={}", build.dataset.row_count(), sep, path.display());

    let msg = match file::write_table(&build.dataset, &path, sep, &export.encoding) {
        Ok(p) => {
            logf!("Export: OK {}", p.display());
            format!("Exported {} rows to {}", build.dataset.row_count(), p.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
