use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::VisualizationState;
use crate::ui::{plot, table};

const SUCCESS: Color32 = Color32::from_rgb(9, 171, 59);
const INFO: Color32 = Color32::from_rgb(28, 131, 225);
const WARNING: Color32 = Color32::from_rgb(214, 150, 0);

// ---------------------------------------------------------------------------
// Data visualization page
// ---------------------------------------------------------------------------

/// Upload control, preview, statistics and scatter plot.
pub fn visualization_page(ui: &mut Ui, vis: &mut VisualizationState) {
    ui.heading("📊 Data Visualization");
    ui.add_space(8.0);

    upload_control(ui, vis);

    if let Some(err) = &vis.error {
        ui.colored_label(Color32::RED, err);
    }

    let Some(data) = &vis.table else {
        if vis.error.is_none() {
            ui.colored_label(INFO, "👆 Upload a CSV file to get started");
        }
        return;
    };

    if vis.error.is_none() {
        ui.colored_label(SUCCESS, "File uploaded successfully!");
    }

    ui.add_space(8.0);
    ui.heading("Data Preview");
    table::preview_table(ui, data.columns(), data.preview(vis.preview_rows));

    ui.add_space(8.0);
    ui.heading("Data Statistics");
    if vis.summary.is_empty() {
        ui.weak("No numeric columns to summarise.");
    } else {
        table::stats_table(ui, &vis.summary);
    }

    ui.add_space(8.0);
    if let Some(notice) = vis.notice() {
        ui.colored_label(WARNING, notice.to_string());
        return;
    }

    axis_pickers(ui, vis);

    if let Some(spec) = &vis.plot {
        plot::scatter_plot(ui, spec);
    }
}

fn upload_control(ui: &mut Ui, vis: &mut VisualizationState) {
    ui.label("Choose a CSV file");
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .button("Browse files")
            .on_hover_text("Upload a CSV file to visualize the data")
            .clicked()
        {
            open_file_dialog(vis);
        }
        match &vis.file_name {
            Some(name) => ui.label(RichText::new(name).monospace()),
            None => ui.weak("…or drop a .csv file onto the window"),
        };
    });
    ui.add_space(4.0);
}

fn axis_pickers(ui: &mut Ui, vis: &mut VisualizationState) {
    let Some(axes) = vis.axes.clone() else {
        return;
    };
    let columns = vis.numeric_columns.clone();

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].label("Select X-axis column");
        egui::ComboBox::from_id_salt("x_axis")
            .selected_text(&axes.x)
            .show_ui(&mut cols[0], |ui: &mut Ui| {
                for col in &columns {
                    if ui.selectable_label(axes.x == *col, col).clicked() {
                        vis.set_x_axis(col);
                    }
                }
            });

        cols[1].label("Select Y-axis column");
        egui::ComboBox::from_id_salt("y_axis")
            .selected_text(&axes.y)
            .show_ui(&mut cols[1], |ui: &mut Ui| {
                for col in &columns {
                    if ui.selectable_label(axes.y == *col, col).clicked() {
                        vis.set_y_axis(col);
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(vis: &mut VisualizationState) {
    let file = rfd::FileDialog::new()
        .set_title("Choose a CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        vis.ingest_path(&path);
    }
}
