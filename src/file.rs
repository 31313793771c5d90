// src/file.rs
//
// Table files in and out. Readers hand back a `DataSet` with every cell as a
// string (missing cells already ""), plus how the file was read so the
// writer can mirror it.

use std::{
    borrow::Cow,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use calamine::{open_workbook_auto, Data, Reader};
use encoding_rs::{Encoding, ISO_8859_2, UTF_8, WINDOWS_1250, WINDOWS_1252};

use crate::config::consts::SPREADSHEET_EXTS;
use crate::config::options::OutputEncoding;
use crate::csv;
use crate::data::DataSet;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Candidate input encodings, in priority order. First strict decode wins.
fn input_encodings() -> [(&'static Encoding, &'static str); 4] {
    [
        (UTF_8, "utf-8"),
        (WINDOWS_1250, "cp1250"),
        (ISO_8859_2, "iso-8859-2"),
        (WINDOWS_1252, "latin1"),
    ]
}

/// How an input table was read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSource {
    pub path: PathBuf,
    /// "utf-8-sig", "utf-8", "cp1250", … or "excel".
    pub encoding: String,
    /// None for spreadsheets.
    pub delimiter: Option<char>,
}

impl TableSource {
    #[inline]
    pub fn is_spreadsheet(&self) -> bool { self.delimiter.is_none() }

    pub fn describe(&self) -> String {
        match self.delimiter {
            Some(d) => format!("encoding: {}; delimiter: {}", self.encoding, csv::delim_name(d)),
            None => s!("encoding: excel; delimiter: excel"),
        }
    }
}

pub fn is_spreadsheet_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTS.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

/// Read a CSV/TSV (encoding + delimiter detected) or the first sheet of a workbook.
pub fn read_table(path: &Path) -> Result<(DataSet, TableSource), Box<dyn Error>> {
    if !path.is_file() {
        return Err(format!("Input file not found: {}", path.display()).into());
    }

    if is_spreadsheet_path(path) {
        let ds = read_spreadsheet(path)?;
        logf!("Read: {} (excel) rows={} cols={}", path.display(), ds.row_count(), ds.header_count());
        let src = TableSource { path: path.to_path_buf(), encoding: s!("excel"), delimiter: None };
        return Ok((ds, src));
    }

    let raw = fs::read(path)?;
    let (text, encoding) = decode_text(&raw);
    let sep = csv::sniff_delimiter(&text);
    let ds = csv::parse_table(&text, sep);

    logf!(
        "Read: {} encoding={} delimiter={:?} rows={} cols={}",
        path.display(), encoding, sep, ds.row_count(), ds.header_count()
    );

    let src = TableSource { path: path.to_path_buf(), encoding: s!(encoding), delimiter: Some(sep) };
    Ok((ds, src))
}

/// Decode raw bytes, trying UTF-8 (with or without BOM), cp1250, ISO-8859-2, latin1.
/// Falls back to lossy UTF-8 so a read never fails on encoding alone.
pub fn decode_text(raw: &[u8]) -> (String, &'static str) {
    if let Some(rest) = raw.strip_prefix(UTF8_BOM) {
        if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(rest) {
            return (text.into_owned(), "utf-8-sig");
        }
    }
    for (enc, name) in input_encodings() {
        if let Some(text) = enc.decode_without_bom_handling_and_without_replacement(raw) {
            return (text.into_owned(), name);
        }
    }
    logw!("Read: no candidate encoding decoded cleanly, using lossy utf-8");
    (String::from_utf8_lossy(raw).into_owned(), "utf-8")
}

fn read_spreadsheet(path: &Path) -> Result<DataSet, Box<dyn Error>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or("Workbook has no sheets")?;
    let range = workbook.worksheet_range(&sheet)?;

    let records: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(cell_text).collect::<Vec<String>>())
        .filter(|r| r.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(DataSet::from_records(records))
}

/// Spreadsheet cell → text. Whole floats lose the ".0" (codes, EANs).
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => s!(if *b { "True" } else { "False" }),
        other => other.to_string(),
    }
}

/* ---------------- Writing ---------------- */

/// Text → bytes in the requested output encoding.
pub fn encode_text(text: &str, encoding: &OutputEncoding) -> Result<Vec<u8>, Box<dyn Error>> {
    match encoding {
        OutputEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        OutputEncoding::Utf8Bom => {
            let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
            out.extend_from_slice(UTF8_BOM);
            out.extend_from_slice(text.as_bytes());
            Ok(out)
        }
        OutputEncoding::Label(label) => {
            let enc = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| format!("Unknown output encoding: {label}"))?;
            let (bytes, used, had_errors): (Cow<[u8]>, &Encoding, bool) = enc.encode(text);
            if had_errors {
                logw!("Write: some characters are not representable in {}", used.name());
            }
            Ok(bytes.into_owned())
        }
    }
}

/// Write a table with a header row. Creates parent dirs. Returns the path written.
pub fn write_table(
    ds: &DataSet,
    path: &Path,
    sep: char,
    encoding: &OutputEncoding,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let text = csv::to_export_string(ds, sep);
    let bytes = encode_text(&text, encoding)?;
    fs::write(path, bytes)?;

    logf!(
        "Write: {} rows={} delimiter={:?} encoding={}",
        path.display(), ds.row_count(), sep, encoding.name()
    );
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
