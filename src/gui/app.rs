// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, Tab},
    data::DataSet,
    file::TableSource,
    variants::{ColumnRoles, VariantBuild},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Catalog Tools",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for widgets + options (UI thread only)
    pub state: AppState,

    // loaded input table and how it was read
    pub input: Option<(DataSet, TableSource)>,
    // headers of PARAMETER columns in the loaded input
    pub param_choices: Vec<String>,

    // last successful build (row 0 = MAIN)
    pub build: Option<VariantBuild>,

    // lines from the last image download
    pub image_log: Vec<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: tab={:?}", state.gui.tab);
        Self {
            state,
            input: None,
            param_choices: Vec::new(),
            build: None,
            image_log: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Table shown in the preview: the build if there is one, else the raw input.
    pub fn shown(&self) -> Option<&DataSet> {
        self.build
            .as_ref()
            .map(|b| &b.dataset)
            .or_else(|| self.input.as_ref().map(|(ds, _)| ds))
    }

    /// Separator for Export/Copy given the chosen format and the detected input delimiter.
    pub fn export_delim(&self) -> char {
        let detected = match &self.input {
            Some((_, src)) => src.delimiter,
            None => None,
        };
        self.state.options.export.format.delim(detected)
    }

    /// Recompute the output path field unless the user typed one.
    pub fn refresh_out_path(&mut self) {
        if self.state.gui.out_path_dirty {
            return;
        }
        self.state.gui.out_path_text = match &self.input {
            Some((_, src)) => self
                .state
                .options
                .export
                .out_path_for(&src.path, src.is_spreadsheet())
                .to_string_lossy()
                .into_owned(),
            None => s!(),
        };
    }

    /// Called after a new input is loaded.
    pub fn set_input(&mut self, ds: DataSet, src: TableSource) {
        let roles = ColumnRoles::resolve(&ds.headers);
        self.param_choices = roles.params.iter().map(|&ix| ds.headers[ix].clone()).collect();

        // keep the pick if the new file has the same column
        if !self.param_choices.contains(&self.state.gui.param_text) {
            self.state.gui.param_text = match self.param_choices.as_slice() {
                [only] => only.clone(),
                _ => s!(),
            };
        }

        self.build = None;
        self.input = Some((ds, src));
        self.refresh_out_path();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.tab {
                Tab::Variants => {
                    components::variant_panel::draw(ui, self);
                    ui.separator();
                    components::export_bar::draw(ui, self);
                    ui.separator();
                    components::data_table::draw(ui, self);
                }
                Tab::Images => components::images_panel::draw(ui, self),
            }
        });
    }
}
