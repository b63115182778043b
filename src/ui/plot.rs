use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::chart_color;
use crate::data::scatter::PlotSpec;
use crate::data::series::{offset_date, TimeSeries};

// ---------------------------------------------------------------------------
// Dashboard line chart
// ---------------------------------------------------------------------------

/// Render the sample time series with dates on the x axis.
pub fn time_series_plot(ui: &mut Ui, series: &TimeSeries) {
    ui.strong("Sample Time Series Data");

    let points: PlotPoints = series.points().into_iter().collect();
    let line = Line::new(points)
        .name("Value")
        .color(chart_color(0))
        .width(1.5);

    let start = series.start;

    Plot::new("time_series_plot")
        .height(360.0)
        .x_axis_label("Date")
        .y_axis_label("Value")
        .x_axis_formatter(move |mark, _range| {
            offset_date(start, mark.value)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default()
        })
        .label_formatter(move |_name, point| {
            match offset_date(start, point.x) {
                Some(date) => format!("{}\n{:.2}", date.format("%Y-%m-%d"), point.y),
                None => format!("{:.2}", point.y),
            }
        })
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// Scatter plot (data visualization page)
// ---------------------------------------------------------------------------

/// Render a scatter plot from a [`PlotSpec`].
pub fn scatter_plot(ui: &mut Ui, spec: &PlotSpec) {
    ui.strong(&spec.title);

    let points: PlotPoints = spec.points.iter().copied().collect();
    let markers = Points::new(points)
        .name(&spec.title)
        .color(chart_color(1))
        .radius(3.0);

    Plot::new("scatter_plot")
        .height(400.0)
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(markers);
        });
}
