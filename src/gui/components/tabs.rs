// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use crate::{config::state::Tab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.tab;
        for tab in Tab::ALL {
            let selected = tab == cur;
            if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, tab);
                app.state.gui.tab = tab;
            }
        }
    });
}
