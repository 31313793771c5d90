// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub variants: VariantOptions,
    pub export: ExportOptions,
    pub images: ImageOptions,
}

/// Caller-chosen knobs for one variant build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantOptions {
    /// Header (or fragment of one) of the distinguishing PARAMETER column.
    pub param: Option<String>,
    /// Shared parent code. Default: the template row's own code.
    pub parent_code: Option<String>,
    /// MAIN title. Default: the template row's title, untouched.
    pub title: Option<String>,
    /// Row that seeds MAIN.
    pub template_index: usize,
    /// Stamped into LANGUAGE on MAIN when set.
    pub language: Option<String>,
}

impl VariantOptions {
    /// Trimmed, non-empty view of an optional text knob.
    pub fn text(v: &Option<String>) -> Option<&str> {
        v.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Reuse the delimiter detected on input (',' for spreadsheets).
    #[default]
    SameAsInput,
    Csv,
    Tsv,
    Semicolon,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::SameAsInput,
        ExportFormat::Csv,
        ExportFormat::Tsv,
        ExportFormat::Semicolon,
    ];

    pub fn delim(&self, detected: Option<char>) -> char {
        match self {
            ExportFormat::SameAsInput => detected.unwrap_or(','),
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
            ExportFormat::Semicolon => ';',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::SameAsInput => "Same as input",
            ExportFormat::Csv => "CSV (,)",
            ExportFormat::Tsv => "TSV (tab)",
            ExportFormat::Semicolon => "CSV (;)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "same" | "input" => Some(ExportFormat::SameAsInput),
            "csv" | "comma" => Some(ExportFormat::Csv),
            "tsv" | "tab" => Some(ExportFormat::Tsv),
            "semicolon" | "ssv" => Some(ExportFormat::Semicolon),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    #[default]
    Utf8,
    /// UTF-8 with BOM, so Excel opens it on double-click.
    Utf8Bom,
    /// Any WHATWG encoding label, e.g. "windows-1250".
    Label(String),
}

impl OutputEncoding {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => OutputEncoding::Utf8,
            "utf-8-sig" | "utf8-bom" | "utf-8-bom" => OutputEncoding::Utf8Bom,
            other => OutputEncoding::Label(s!(other)),
        }
    }

    pub fn name(&self) -> String {
        match self {
            OutputEncoding::Utf8 => s!("utf-8"),
            OutputEncoding::Utf8Bom => s!("utf-8-sig"),
            OutputEncoding::Label(l) => l.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub encoding: OutputEncoding,
    /// Explicit target. None → "<input stem>_variants.<ext>" next to the input.
    pub out_path: Option<PathBuf>,
}

impl ExportOptions {
    /// Final output path for a given input file.
    /// Spreadsheet input is always written out as CSV.
    pub fn out_path_for(&self, input: &Path, spreadsheet: bool) -> PathBuf {
        if let Some(p) = &self.out_path {
            return p.clone();
        }
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("output"));
        let ext = match input.extension() {
            Some(e) if !spreadsheet => e.to_string_lossy().into_owned(),
            _ => s!("csv"),
        };
        input.with_file_name(join!(&stem, DEFAULT_OUT_SUFFIX, ".", &ext))
    }
}

/// Image downloader run settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub url: String,
    /// Keep only image URLs containing this (case-insensitive).
    pub filter: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub all_variants: bool,
    /// Try a certificate-verified connection before falling back to an unverified one.
    pub try_secure_first: bool,
}

impl ImageOptions {
    /// Directory for product-page downloads, given the effective filter.
    pub fn page_out_dir(&self, filter: Option<&str>) -> PathBuf {
        if let Some(d) = &self.out_dir {
            return d.clone();
        }
        match filter {
            Some(f) if !f.is_empty() => PathBuf::from(join!(DEFAULT_IMAGES_DIR, "_", f)),
            _ => PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }

    pub fn direct_out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_keeps_csv_extension() {
        let ex = ExportOptions::default();
        let p = ex.out_path_for(Path::new("data/export.csv"), false);
        assert_eq!(p, PathBuf::from("data/export_variants.csv"));
    }

    #[test]
    fn spreadsheet_input_writes_csv() {
        let ex = ExportOptions::default();
        let p = ex.out_path_for(Path::new("export.xlsx"), true);
        assert_eq!(p, PathBuf::from("export_variants.csv"));
    }

    #[test]
    fn explicit_out_path_wins() {
        let ex = ExportOptions { out_path: Some(PathBuf::from("x/y.csv")), ..Default::default() };
        assert_eq!(ex.out_path_for(Path::new("a.csv"), false), PathBuf::from("x/y.csv"));
    }

    #[test]
    fn encoding_aliases() {
        assert_eq!(OutputEncoding::parse("UTF-8"), OutputEncoding::Utf8);
        assert_eq!(OutputEncoding::parse("utf-8-sig"), OutputEncoding::Utf8Bom);
        assert_eq!(OutputEncoding::parse("cp1250"), OutputEncoding::Label(s!("cp1250")));
    }

    #[test]
    fn image_dirs_follow_filter() {
        let io = ImageOptions::default();
        assert_eq!(io.page_out_dir(Some("tayler")), PathBuf::from("images_tayler"));
        assert_eq!(io.page_out_dir(None), PathBuf::from("images"));
        assert_eq!(io.direct_out_dir(), PathBuf::from("images_direct"));
    }

    #[test]
    fn format_delims() {
        assert_eq!(ExportFormat::SameAsInput.delim(Some(';')), ';');
        assert_eq!(ExportFormat::SameAsInput.delim(None), ',');
        assert_eq!(ExportFormat::Tsv.delim(Some(';')), '\t');
        assert_eq!(ExportFormat::parse("semicolon"), Some(ExportFormat::Semicolon));
    }
}
