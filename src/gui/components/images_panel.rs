// src/gui/components/images_panel.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let g = &mut app.state.gui;
    let opts = &mut app.state.options.images;

    egui::Grid::new("images_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label("URL:");
        ui.add(
            egui::TextEdit::singleline(&mut opts.url)
                .hint_text("https://www.northfinder.com/sk/1234-product.html")
                .desired_width(520.0),
        );
        ui.end_row();

        ui.label("Filter:");
        ui.add(
            egui::TextEdit::singleline(&mut g.image_filter_text)
                .hint_text("derived from the URL")
                .desired_width(260.0),
        );
        ui.end_row();

        ui.label("Output dir:");
        ui.add(
            egui::TextEdit::singleline(&mut g.image_out_dir_text)
                .hint_text("images_<filter>")
                .desired_width(260.0),
        );
        ui.end_row();
    });

    ui.checkbox(&mut opts.all_variants, "All colour variants");
    ui.checkbox(&mut opts.try_secure_first, "Try verified TLS first");

    if ui.button("Download").clicked() {
        logf!("UI: Download {}", app.state.options.images.url);
        actions::download(app);
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("image_log")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &app.image_log {
                ui.monospace(line);
            }
        });
}
