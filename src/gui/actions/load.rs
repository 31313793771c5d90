// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{file, gui::app::App};

pub fn load(app: &mut App) {
    let text = app.state.gui.input_path_text.trim().to_string();
    if text.is_empty() {
        app.status("Choose an input file first");
        return;
    }

    let path = PathBuf::from(text);
    match file::read_table(&path) {
        Ok((ds, src)) => {
            let msg = format!(
                "Loaded {} rows, {} columns ({})",
                ds.row_count(),
                ds.header_count(),
                src.describe()
            );
            app.set_input(ds, src);
            logf!("Load: {}", msg);
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Load error: {e}"));
        }
    }
}
