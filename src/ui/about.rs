use eframe::egui::{RichText, Ui};

const FEATURES: [&str; 5] = [
    "📊 Interactive dashboard",
    "📈 Data visualization",
    "🎮 Interactive demos",
    "📁 File upload capabilities",
    "🎨 Native UI built with egui",
];

const STACK: [(&str, &str); 5] = [
    ("eframe / egui", "Application framework"),
    ("egui_plot", "Interactive charts"),
    ("csv", "File parsing"),
    ("chrono", "Dates"),
    ("Rust", "Everything else"),
];

const GETTING_STARTED: &str = "\
# Build the application
cargo build --release

# Generate a sample CSV to upload
cargo run --bin generate_sample

# Run the dashboard
RUST_LOG=info cargo run --release";

/// Static description of the application.
pub fn about_page(ui: &mut Ui) {
    ui.heading("ℹ About");
    ui.add_space(8.0);

    ui.label(RichText::new("Rusty Dash").size(22.0).strong());
    ui.label("A sample desktop dashboard for previewing and plotting CSV data.");
    ui.add_space(8.0);

    ui.strong("Features:");
    for feature in FEATURES {
        ui.label(format!("  • {feature}"));
    }
    ui.add_space(8.0);

    ui.strong("Technology Stack:");
    for (name, role) in STACK {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("  •");
            ui.strong(name);
            ui.label(format!(": {role}"));
        });
    }
    ui.add_space(8.0);

    ui.strong("Getting Started:");
    ui.code(GETTING_STARTED);
    ui.add_space(8.0);

    ui.heading("System Information");
    ui.code(system_info());
}

pub fn system_info() -> String {
    format!(
        "Rusty Dash Version: {}\nUI Framework: eframe / egui\nPlotting: egui_plot\nCSV Parser: csv",
        env!("CARGO_PKG_VERSION")
    )
}
