use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of an uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the common DataFrame dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Empty field or one of the recognised NA markers.
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` for statistics and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Numeric columns may contain numbers and missing values only.
    fn fits_numeric_column(&self) -> bool {
        matches!(
            self,
            CellValue::Integer(_) | CellValue::Float(_) | CellValue::Null
        )
    }
}

/// One row of a [`ParsedTable`]; same length as the column list.
pub type Row = Vec<CellValue>;

/// Number of rows shown by the data preview unless configured otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// ParsedTable – the complete uploaded table
// ---------------------------------------------------------------------------

/// In-memory table parsed from an upload.
///
/// Column names are unique and every row has exactly one cell per column.
/// Rows keep the order in which they appeared in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ParsedTable {
    /// Assemble a table. Callers guarantee unique column names and one
    /// cell per column in every row.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        ParsedTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The first `limit` rows in file order.
    pub fn preview(&self, limit: usize) -> &[Row] {
        &self.rows[..self.rows.len().min(limit)]
    }

    /// Names of the columns whose every cell is a number or missing.
    ///
    /// A table without rows has no numeric columns: there is nothing to
    /// infer a type from.
    pub fn numeric_columns(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.rows.iter().all(|r| r[*idx].fits_numeric_column()))
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Non-missing numeric values of a column, in row order.
    pub fn numeric_values(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r[idx].as_f64()).collect()
    }
}
