// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod images_panel;
pub mod tabs;
pub mod variant_panel;
