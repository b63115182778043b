use eframe::egui::{self, Ui};

use crate::state::{DemoState, ADVANCED_OPTIONS, DEMO_OPTIONS};

/// Widget playground: each control echoes its current value.
pub fn demo_page(ui: &mut Ui, demo: &mut DemoState) {
    ui.heading("🎮 Interactive Demo");
    ui.add_space(8.0);

    ui.strong("Slider Demo");
    ui.add(egui::Slider::new(&mut demo.slider, 0..=100).text("Select a value"));
    ui.label(demo.slider_echo());
    ui.separator();

    ui.strong("Selectbox Demo");
    egui::ComboBox::from_label("Choose an option")
        .selected_text(demo.option)
        .show_ui(ui, |ui: &mut Ui| {
            for option in DEMO_OPTIONS {
                ui.selectable_value(&mut demo.option, option, option);
            }
        });
    ui.label(demo.option_echo());
    ui.separator();

    ui.strong("Checkbox Demo");
    ui.checkbox(&mut demo.show_advanced, "Show advanced options");
    if demo.show_advanced {
        ui.label("Advanced options are enabled!");
        ui.label("Select advanced option");
        ui.horizontal(|ui: &mut Ui| {
            for option in ADVANCED_OPTIONS {
                ui.radio_value(&mut demo.advanced_option, option, option);
            }
        });
    }
    if let Some(echo) = demo.advanced_echo() {
        ui.label(echo);
    }
    ui.separator();

    ui.strong("Text Input Demo");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Enter your name");
        ui.text_edit_singleline(&mut demo.name);
    });
    ui.label(demo.greeting());
    ui.separator();

    ui.strong("Number Input Demo");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Enter a number");
        ui.add(egui::DragValue::new(&mut demo.number).range(0..=1000));
    });
    ui.label(demo.number_echo());
}
