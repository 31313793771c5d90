// src/data.rs
//
// In-memory table shared by readers, the variant builder, writers and the GUI.
// Rows are positional: cell i belongs to headers[i]. Every row is kept at
// exactly headers.len() cells, so lookups never go out of bounds.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Build from parsed cells. Short rows are padded with "", long rows truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                if r.len() != width {
                    r.resize(width, s!());
                }
                r
            })
            .collect();
        Self { headers, rows }
    }

    /// First parsed row becomes the header.
    pub fn from_records(mut records: Vec<Vec<String>>) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let headers = records.remove(0);
        Self::new(headers, records)
    }

    #[inline] pub fn row_count(&self) -> usize { self.rows.len() }
    #[inline] pub fn header_count(&self) -> usize { self.headers.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// All cells of one column, in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |r| r.get(col).map(String::as_str).unwrap_or(""))
    }
}
