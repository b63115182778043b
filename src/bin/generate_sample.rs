use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rusty_dash::data::loader::to_csv;
use rusty_dash::data::model::{CellValue, ParsedTable, Row};
use rusty_dash::data::series::standard_normal;

const ROWS: usize = 200;
const SPECIES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Base (height cm, weight kg) per species.
const BASE: [(f64, f64); 3] = [(22.0, 1.4), (31.0, 2.6), (38.0, 3.9)];

fn sample_row(id: usize, rng: &mut StdRng) -> Row {
    let kind = rng.gen_range(0..SPECIES.len());
    let (height_base, weight_base) = BASE[kind];

    let height = height_base + 3.0 * standard_normal(rng);
    let weight = weight_base + 0.12 * (height - height_base) + 0.3 * standard_normal(rng);
    // Roughly one score in twenty is missing.
    let score = if rng.gen_bool(0.05) {
        CellValue::Null
    } else {
        CellValue::Integer(rng.gen_range(40..=100))
    };

    vec![
        CellValue::Integer(id as i64),
        CellValue::String(SPECIES[kind].to_string()),
        CellValue::Float((height * 100.0).round() / 100.0),
        CellValue::Float((weight * 1000.0).round() / 1000.0),
        score,
        CellValue::Bool(rng.gen_bool(0.5)),
    ]
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let columns = ["id", "species", "height", "weight", "score", "indoor"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows = (1..=ROWS).map(|id| sample_row(id, &mut rng)).collect();
    let table = ParsedTable::new(columns, rows);

    let output_path = "sample_data.csv";
    let text = to_csv(&table).context("serialising sample table")?;
    std::fs::write(output_path, text).with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} rows ({} numeric columns) to {output_path}",
        table.len(),
        table.numeric_columns().len()
    );
    Ok(())
}
