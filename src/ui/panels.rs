use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Page};
use crate::ui::visualization::open_file_dialog;

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();

    ui.label("Choose a page");
    egui::ComboBox::from_id_salt("page_select")
        .selected_text(state.page.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for page in Page::ALL {
                ui.selectable_value(&mut state.page, page, page.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the file menu.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                state.page = Page::Visualization;
                open_file_dialog(&mut state.visualization);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.visualization.table {
            ui.label(format!(
                "{} rows × {} columns loaded",
                table.len(),
                table.columns().len()
            ));
        }
    });

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("🚀 Rusty Dash")
                .size(32.0)
                .color(Color32::from_rgb(31, 119, 180)),
        );
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Built with ❤ using Rust and egui").color(Color32::from_gray(102)));
    });
}
