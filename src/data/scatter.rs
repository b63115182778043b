use super::error::SelectionError;
use super::model::ParsedTable;

/// The two columns chosen for the scatter plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: String,
    pub y: String,
}

impl AxisSelection {
    /// Both axes start on the first numeric column, like a pair of freshly
    /// opened pickers.
    pub fn default_for(numeric: &[String]) -> Option<Self> {
        let first = numeric.first()?;
        Some(AxisSelection {
            x: first.clone(),
            y: first.clone(),
        })
    }
}

/// Rendering-independent description of a scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
}

/// Pair each row's `x_col` and `y_col` values as one point, in row order.
///
/// Fails when the table has fewer than two numeric columns, whatever was
/// requested, or when either column is not numeric. Rows missing either
/// value are not drawn.
pub fn scatter(table: &ParsedTable, x_col: &str, y_col: &str) -> Result<PlotSpec, SelectionError> {
    let numeric = table.numeric_columns();
    if numeric.len() < 2 {
        return Err(SelectionError::TooFewNumericColumns {
            found: numeric.len(),
        });
    }

    let x_idx = numeric_index(table, &numeric, x_col)?;
    let y_idx = numeric_index(table, &numeric, y_col)?;

    let points = table
        .rows()
        .iter()
        .filter_map(|row| Some([row[x_idx].as_f64()?, row[y_idx].as_f64()?]))
        .collect();

    Ok(PlotSpec {
        title: format!("{x_col} vs {y_col}"),
        x_label: x_col.to_string(),
        y_label: y_col.to_string(),
        points,
    })
}

fn numeric_index(table: &ParsedTable, numeric: &[String], column: &str) -> Result<usize, SelectionError> {
    let not_numeric = || SelectionError::NotNumeric {
        column: column.to_string(),
    };
    if !numeric.iter().any(|c| c == column) {
        return Err(not_numeric());
    }
    table.column_index(column).ok_or_else(not_numeric)
}
