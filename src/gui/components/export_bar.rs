// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::{ExportFormat, OutputEncoding},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            for f in ExportFormat::ALL {
                ui.selectable_value(&mut export.format, f, f.label());
            }
        });
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }

        // --- Encoding ---
        let prev_enc = export.encoding.clone();
        let cp1250 = OutputEncoding::Label(s!("windows-1250"));
        ui.horizontal(|ui| {
            ui.label("Encoding:");
            ui.selectable_value(&mut export.encoding, OutputEncoding::Utf8, "UTF-8");
            ui.selectable_value(&mut export.encoding, OutputEncoding::Utf8Bom, "UTF-8 (Excel BOM)");
            ui.selectable_value(&mut export.encoding, cp1250, "windows-1250");
        });
        if export.encoding != prev_enc {
            logf!("UI: Export encoding → {}", export.encoding.name());
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        let ready = app.build.is_some();
        if ui.add_enabled(ready, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(ready, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
