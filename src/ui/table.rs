use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, Row};
use crate::data::stats::{ColumnSummary, STAT_LABELS};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Data preview
// ---------------------------------------------------------------------------

/// Grid of the first rows of the uploaded table, with a row-number column.
pub fn preview_table(ui: &mut Ui, columns: &[String], rows: &[Row]) {
    ui.push_id("preview_table", |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto())
                .columns(Column::auto().at_least(60.0).resizable(true), columns.len())
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui: &mut Ui| {
                        ui.label("");
                    });
                    for name in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for (idx, row) in rows.iter().enumerate() {
                        body.row(ROW_HEIGHT, |mut table_row| {
                            table_row.col(|ui: &mut Ui| {
                                ui.weak(idx.to_string());
                            });
                            for cell in row {
                                table_row.col(|ui: &mut Ui| {
                                    ui.label(cell_text(cell));
                                });
                            }
                        });
                    }
                });
        });
    });
}

fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => "None".to_string(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// One row per statistic, one column per numeric column.
pub fn stats_table(ui: &mut Ui, summary: &[ColumnSummary]) {
    ui.push_id("stats_table", |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto())
                .columns(Column::auto().at_least(80.0).resizable(true), summary.len())
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui: &mut Ui| {
                        ui.label("");
                    });
                    for col in summary {
                        header.col(|ui: &mut Ui| {
                            ui.strong(&col.column);
                        });
                    }
                })
                .body(|mut body| {
                    let values: Vec<[f64; 8]> = summary.iter().map(ColumnSummary::values).collect();
                    for (stat, label) in STAT_LABELS.iter().enumerate() {
                        body.row(ROW_HEIGHT, |mut table_row| {
                            table_row.col(|ui: &mut Ui| {
                                ui.strong(*label);
                            });
                            for column in &values {
                                table_row.col(|ui: &mut Ui| {
                                    ui.label(format_stat(column[stat]));
                                });
                            }
                        });
                    }
                });
        });
    });
}

/// Six decimals, `NaN` for undefined statistics.
pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(2.0), "2.000000");
        assert_eq!(format_stat(f64::NAN), "NaN");
    }

    #[test]
    fn test_null_cells_render_as_none() {
        assert_eq!(cell_text(&CellValue::Null), "None");
        assert_eq!(cell_text(&CellValue::Float(1.5)), "1.5");
    }
}
