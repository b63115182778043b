use eframe::egui::{self, RichText, Ui};

use crate::color::delta_color;
use crate::state::AppState;
use crate::ui::plot;

/// A headline number with its change since the last period.
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric {
        label: "Total Users",
        value: "1,234",
        delta: "12%",
    },
    Metric {
        label: "Revenue",
        value: "$45,678",
        delta: "8%",
    },
    Metric {
        label: "Active Sessions",
        value: "567",
        delta: "-3%",
    },
    Metric {
        label: "Conversion Rate",
        value: "2.4%",
        delta: "0.5%",
    },
];

/// Metric cards followed by the sample time-series chart.
pub fn dashboard_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📊 Dashboard");
    ui.add_space(8.0);

    ui.columns(METRICS.len(), |cols: &mut [Ui]| {
        for (col, metric) in cols.iter_mut().zip(METRICS.iter()) {
            metric_card(col, metric);
        }
    });

    ui.add_space(12.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("📈 Sample Data Visualization");
        if ui.small_button("Regenerate").clicked() {
            state.regenerate_series();
        }
    });
    plot::time_series_plot(ui, &state.series);
}

fn metric_card(ui: &mut Ui, metric: &Metric) {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(metric.label);
            ui.label(RichText::new(metric.value).size(28.0).strong());
            let arrow = if metric.delta.starts_with('-') { "↓" } else { "↑" };
            ui.label(
                RichText::new(format!("{arrow} {}", metric.delta.trim_start_matches('-')))
                    .color(delta_color(metric.delta)),
            );
        });
}
