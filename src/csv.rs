// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::{SNIFF_CANDIDATES, SNIFF_SAMPLE_CHARS};
use crate::data::DataSet;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Empty lines are skipped.
///
/// A `"` opens a quoted section only at the start of a field; anywhere else it is
/// literal text (`Monitor 27" IPS`).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    // true once anything (text or a quote) has been read for the current field
    let mut started = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if !started => {
                in_quotes = true;
                started = true;
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
                started = false;
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_row(&mut rows, &mut row);
                started = false;
            }
            _ => {
                field.push(ch);
                started = true;
            }
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    push_row(&mut rows, &mut row);

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    // a truly empty line parses as one empty field
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/// Parse a whole delimited text into a header + rows table.
pub fn parse_table(text: &str, sep: char) -> DataSet {
    DataSet::from_records(parse_rows(text, sep))
}

/* ---------------- Delimiter sniffing ---------------- */

/// Guess the field separator from the head of a file.
///
/// A candidate is *consistent* when it shows up the same, non-zero number of
/// times (outside quotes) on every complete line of the sample. The consistent
/// candidate with the most hits per line wins; with none, `;` beats `,` on raw counts.
pub fn sniff_delimiter(text: &str) -> char {
    let sample: String = text.chars().take(SNIFF_SAMPLE_CHARS).collect();
    let truncated = text.chars().nth(SNIFF_SAMPLE_CHARS).is_some();

    let mut lines: Vec<&str> = sample.lines().filter(|l| !l.trim().is_empty()).collect();
    if truncated && lines.len() > 1 {
        lines.pop(); // last line may be cut mid-record
    }

    let mut best: Option<(char, usize)> = None;
    for &cand in SNIFF_CANDIDATES.iter() {
        let mut per_line = lines.iter().map(|l| count_unquoted(l, cand));
        let Some(first) = per_line.next() else { break };
        if first == 0 || !per_line.all(|n| n == first) {
            continue;
        }
        if best.is_none_or(|(_, n)| first > n) {
            best = Some((cand, first));
        }
    }

    match best {
        Some((c, _)) => c,
        None => {
            if sample.matches(';').count() >= sample.matches(',').count() { ';' } else { ',' }
        }
    }
}

/// Separators outside quoted sections; quotes open only at field start, as in `parse_rows`.
fn count_unquoted(line: &str, sep: char) -> usize {
    let mut in_quotes = false;
    let mut started = false;
    let mut n = 0;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if !started => {
                in_quotes = true;
                started = true;
            }
            c if c == sep && !in_quotes => {
                n += 1;
                started = false;
            }
            _ => started = true,
        }
    }
    n
}

/// Printable name for status lines ("\t" → "TAB").
pub fn delim_name(sep: char) -> String {
    match sep {
        '\t' => s!("TAB"),
        c => c.to_string(),
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line + every row, as one string (export and clipboard share this).
pub fn to_export_string(ds: &DataSet, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, &ds.headers, sep);
    for r in &ds.rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
