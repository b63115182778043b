use std::collections::HashSet;
use std::path::Path;

use super::error::ParseError;
use super::model::{CellValue, ParsedTable, Row};

/// Tokens read as missing values, matching the usual DataFrame defaults.
const NA_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a CSV file from disk and parse it.
pub fn load_file(path: &Path) -> Result<ParsedTable, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&bytes)
}

/// Parse comma-separated bytes into a [`ParsedTable`].
///
/// The first record is the header. Every record must have as many fields
/// as the header and all content must be valid UTF-8; otherwise nothing is
/// returned but the error.
pub fn parse(bytes: &[u8]) -> Result<ParsedTable, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let raw_headers = reader.headers()?.clone();
    if raw_headers.is_empty() {
        return Err(ParseError::Empty);
    }
    let columns = unique_headers(raw_headers.iter());

    let mut rows: Vec<Row> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(ParsedTable::new(columns, rows))
}

/// Serialize a table back to comma-separated text.
///
/// Floats keep a fractional part (`1.0`, not `1`) so that parsing the
/// output yields the same cell values.
pub fn to_csv(table: &ParsedTable) -> Result<String, ParseError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(cell_to_field))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Make header names unique: blanks become `Unnamed: {i}`, repeats get a
/// `.1`, `.2`, … suffix.
fn unique_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for (idx, name) in raw.enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

fn guess_cell_type(raw: &str) -> CellValue {
    let s = raw.trim();
    if NA_TOKENS.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        // `str::parse` accepts NaN in any casing; NaN is a missing value.
        if f.is_nan() {
            return CellValue::Null;
        }
        return CellValue::Float(f);
    }
    match s {
        "true" | "True" | "TRUE" => CellValue::Bool(true),
        "false" | "False" | "FALSE" => CellValue::Bool(false),
        _ => CellValue::String(raw.to_string()),
    }
}

fn cell_to_field(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        // Debug formatting always keeps a decimal point or exponent.
        CellValue::Float(v) => format!("{v:?}"),
        other => other.to_string(),
    }
}
