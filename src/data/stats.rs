use super::model::ParsedTable;

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Summary of one numeric column. Missing cells are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

/// Row labels of the statistics table, in display order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl ColumnSummary {
    /// Summarise a slice of values; statistics that are undefined for the
    /// given count are NaN.
    pub fn from_values(column: &str, values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        let mean = if n == 0 {
            f64::NAN
        } else {
            sorted.iter().sum::<f64>() / n as f64
        };
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        ColumnSummary {
            column: column.to_string(),
            count: n,
            mean,
            std,
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Values in the order of [`STAT_LABELS`].
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Statistics for every numeric column, in column order.
///
/// Text columns are left out; a table without numeric columns gives an
/// empty summary.
pub fn describe(table: &ParsedTable) -> Vec<ColumnSummary> {
    table
        .numeric_columns()
        .iter()
        .filter_map(|name| {
            let idx = table.column_index(name)?;
            Some(ColumnSummary::from_values(name, &table.numeric_values(idx)))
        })
        .collect()
}

/// Quantile of already sorted data, interpolating linearly between the
/// two closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = (n - 1) as f64 * q;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_describe_counts_rows() {
        let table = parse(b"a,b\n1,2\n3,4\n").unwrap();
        let summary = describe(&table);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].column, "a");
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[1].count, 2);
        assert!(approx(summary[0].mean, 2.0));
        assert!(approx(summary[1].max, 4.0));
    }

    #[test]
    fn test_describe_quartiles_and_std() {
        let s = ColumnSummary::from_values("v", &[4.0, 1.0, 3.0, 2.0]);

        assert!(approx(s.min, 1.0));
        assert!(approx(s.q25, 1.75));
        assert!(approx(s.q50, 2.5));
        assert!(approx(s.q75, 3.25));
        assert!(approx(s.max, 4.0));
        assert!(approx(s.std, (5.0f64 / 3.0).sqrt()));
    }

    #[test]
    fn test_describe_single_value_has_nan_std() {
        let s = ColumnSummary::from_values("v", &[7.0]);
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert!(approx(s.q75, 7.0));
    }

    #[test]
    fn test_describe_skips_text_columns() {
        let table = parse(b"name,score\nann,10\nbob,20\ncid,\n").unwrap();
        let summary = describe(&table);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].column, "score");
        assert_eq!(summary[0].count, 2);
        assert!(approx(summary[0].mean, 15.0));
    }

    #[test]
    fn test_describe_empty_without_numeric_columns() {
        let table = parse(b"a,b\nx,y\n").unwrap();
        assert!(describe(&table).is_empty());
    }

    #[test]
    fn test_all_missing_column_summary_is_nan() {
        let table = parse(b"a,b\n,1\n,2\n").unwrap();
        let summary = describe(&table);

        assert_eq!(summary[0].column, "a");
        assert_eq!(summary[0].count, 0);
        assert!(summary[0].mean.is_nan());
        assert!(summary[0].min.is_nan());
    }
}
