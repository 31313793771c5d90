// src/gui/components/data_table.rs
//
// Draws the preview table: the built output (MAIN highlighted) or, before a
// build, the loaded input. Purely a view.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const MAIN_COLOR: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = app.shown() else {
        ui.label("No data loaded.");
        return;
    };
    let highlight_main = app.build.is_some();
    let cols = ds.header_count();
    if cols == 0 {
        ui.label("Input has no columns.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("preview", cols, highlight_main));
            for ci in 0..cols {
                let w = if ci == 0 { 140.0 } else { 110.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in &ds.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, ds.row_count(), |mut row| {
                        let row_idx = row.index();
                        let is_main = highlight_main && row_idx == 0;
                        let Some(data) = ds.rows.get(row_idx) else { return };
                        for cell in data {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if is_main {
                                    rt = rt.color(MAIN_COLOR).strong();
                                }
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                            });
                        }
                    });
                });
        });
}
