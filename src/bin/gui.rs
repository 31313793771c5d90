// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use catalog_tools::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Catalog Tools")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
