// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Variants,
    Images,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Variants, Tab::Images];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Variants => "Variants",
            Tab::Images => "Images",
        }
    }
}

/// Raw widget text. Mapped onto `AppOptions` when an action runs.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub tab: Tab,

    pub input_path_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    /// Header of the chosen PARAMETER column; "" = none.
    pub param_text: String,
    pub parent_code_text: String,
    pub title_text: String,
    pub template_index_text: String,
    pub language_text: String,

    pub image_filter_text: String,
    pub image_out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            input_path_text: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            param_text: s!(),
            parent_code_text: s!(),
            title_text: s!(),
            template_index_text: s!("0"),
            language_text: s!(),
            image_filter_text: s!(),
            image_out_dir_text: s!(),
        }
    }
}

/// "" → None, otherwise the trimmed text.
pub fn opt_text(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Copy the variant form fields into `options.variants`.
    pub fn sync_variant_fields(&mut self) -> Result<(), String> {
        let g = &self.gui;
        let v = &mut self.options.variants;

        v.template_index = match g.template_index_text.trim() {
            "" => 0,
            t => t.parse().map_err(|_| format!("Invalid template row: {}", t))?,
        };
        v.param = opt_text(&g.param_text);
        v.parent_code = opt_text(&g.parent_code_text);
        v.title = opt_text(&g.title_text);
        v.language = opt_text(&g.language_text);
        Ok(())
    }

    /// Copy the image form fields into `options.images`.
    pub fn sync_image_fields(&mut self) {
        let g = &self.gui;
        let i = &mut self.options.images;
        i.filter = opt_text(&g.image_filter_text);
        i.out_dir = opt_text(&g.image_out_dir_text).map(Into::into);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn variant_fields_map_onto_options() {
        let mut st = AppState::default();
        st.gui.template_index_text = s!(" 2 ");
        st.gui.param_text = s!("[PARAMETER „Farba“]");
        st.gui.title_text = s!("   ");
        st.gui.language_text = s!("sk");
        st.sync_variant_fields().unwrap();

        let v = &st.options.variants;
        assert_eq!(v.template_index, 2);
        assert_eq!(v.param.as_deref(), Some("[PARAMETER „Farba“]"));
        assert_eq!(v.title, None);
        assert_eq!(v.parent_code, None);
        assert_eq!(v.language.as_deref(), Some("sk"));
    }

    #[test]
    fn bad_template_index_is_reported() {
        let mut st = AppState::default();
        st.gui.template_index_text = s!("first");
        assert!(st.sync_variant_fields().is_err());
    }

    #[test]
    fn image_fields_map_onto_options() {
        let mut st = AppState::default();
        st.gui.image_filter_text = s!("phil");
        st.gui.image_out_dir_text = s!("out/pics");
        st.sync_image_fields();
        assert_eq!(st.options.images.filter.as_deref(), Some("phil"));
        assert_eq!(st.options.images.out_dir, Some(PathBuf::from("out/pics")));
    }
}
