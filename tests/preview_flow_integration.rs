use pretty_assertions::assert_eq;
use rstest::rstest;

use rusty_dash::{
    data::{
        error::SelectionError,
        loader::{parse, to_csv},
        model::{CellValue, DEFAULT_PREVIEW_ROWS},
        scatter::scatter,
        stats::describe,
    },
    state::{UploadPhase, VisualizationState},
};

fn numbered_csv(rows: usize) -> String {
    let mut text = String::from("n,square,label\n");
    for i in 0..rows {
        text.push_str(&format!("{i},{},row{i}\n", i * i));
    }
    text
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(12)]
fn test_preview_length_is_bounded(#[case] rows: usize) {
    let table = parse(numbered_csv(rows).as_bytes()).unwrap();
    let preview = table.preview(DEFAULT_PREVIEW_ROWS);

    assert_eq!(preview.len(), rows.min(5));
    for (i, row) in preview.iter().enumerate() {
        assert_eq!(row[0], CellValue::Integer(i as i64));
    }
}

#[test]
fn test_numeric_scenario() {
    let table = parse(b"a,b\n1,2\n3,4\n").unwrap();

    assert_eq!(table.numeric_columns(), vec!["a".to_string(), "b".to_string()]);
    let summary = describe(&table);
    assert_eq!(summary.iter().map(|s| s.count).collect::<Vec<_>>(), vec![2, 2]);

    let plot = scatter(&table, "a", "b").unwrap();
    assert_eq!(plot.points, vec![[1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn test_text_scenario() {
    let table = parse(b"a,b\nx,y\n").unwrap();

    assert!(table.numeric_columns().is_empty());
    assert!(describe(&table).is_empty());
    assert!(matches!(
        scatter(&table, "a", "b"),
        Err(SelectionError::TooFewNumericColumns { found: 0 })
    ));
}

#[test]
fn test_malformed_scenario() {
    assert!(parse(b"a,b\n1,2,3\n").is_err());
}

#[test]
fn test_describe_never_reports_text_columns() {
    let table = parse(numbered_csv(20).as_bytes()).unwrap();
    let names: Vec<String> = describe(&table).into_iter().map(|s| s.column).collect();

    assert_eq!(names, vec!["n".to_string(), "square".to_string()]);
}

#[test]
fn test_round_trip_preserves_cells() {
    let table = parse(numbered_csv(7).as_bytes()).unwrap();
    let reparsed = parse(to_csv(&table).unwrap().as_bytes()).unwrap();

    assert_eq!(reparsed.columns(), table.columns());
    assert_eq!(reparsed.rows(), table.rows());
}

#[test]
fn test_session_flow() {
    let mut vis = VisualizationState::new(DEFAULT_PREVIEW_ROWS);
    assert_eq!(vis.phase(), UploadPhase::NoFile);

    vis.ingest_bytes("squares.csv", numbered_csv(10).as_bytes());
    assert_eq!(vis.phase(), UploadPhase::AxesChosen);

    vis.set_x_axis("n");
    vis.set_y_axis("square");
    let plot = vis.plot.as_ref().unwrap();
    assert_eq!(plot.title, "n vs square");
    assert_eq!(plot.points.len(), 10);
    assert_eq!(plot.points[3], [3.0, 9.0]);

    // A bad upload resets to "no file" and only shows the error.
    vis.ingest_bytes("broken.csv", b"x\n1,2\n");
    assert!(vis.error.is_some());
    assert_eq!(vis.phase(), UploadPhase::NoFile);
    assert!(vis.table.is_none());
    assert!(vis.plot.is_none());

    vis.ingest_bytes("squares.csv", numbered_csv(3).as_bytes());
    assert!(vis.error.is_none());
    assert_eq!(vis.phase(), UploadPhase::AxesChosen);
}
