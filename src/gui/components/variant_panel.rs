// src/gui/components/variant_panel.rs
//
// Input file + variant options form. Widgets edit `GuiState` text; Build maps it
// onto `VariantOptions`.

use eframe::egui;
use crate::gui::{actions, app::App};

const NO_PARAM: &str = "(none)";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Input:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_path_text)
                .hint_text("export.csv / export.xlsx")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            actions::load(app);
        }
        if let Some((_, src)) = &app.input {
            ui.label(src.describe());
        }
    });

    let g = &mut app.state.gui;

    ui.horizontal(|ui| {
        ui.label("Parameter:");
        let shown = if g.param_text.is_empty() { NO_PARAM } else { g.param_text.as_str() };
        egui::ComboBox::from_id_salt("param_pick")
            .selected_text(s!(shown))
            .width(260.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut g.param_text, s!(), NO_PARAM);
                for h in &app.param_choices {
                    ui.selectable_value(&mut g.param_text, h.clone(), h.as_str());
                }
            });

        ui.label("Template row:");
        ui.add(egui::TextEdit::singleline(&mut g.template_index_text).desired_width(40.0));
    });

    ui.horizontal(|ui| {
        ui.label("Parent code:");
        ui.add(
            egui::TextEdit::singleline(&mut g.parent_code_text)
                .hint_text("template row's code")
                .desired_width(140.0),
        );
        ui.label("MAIN title:");
        ui.add(
            egui::TextEdit::singleline(&mut g.title_text)
                .hint_text("template row's title")
                .desired_width(280.0),
        );
        ui.label("Language:");
        ui.add(
            egui::TextEdit::singleline(&mut g.language_text)
                .hint_text("unchanged")
                .desired_width(50.0),
        );
    });

    let ready = app.input.is_some();
    if ui.add_enabled(ready, egui::Button::new("Build variants")).clicked() {
        actions::build(app);
    }
}
