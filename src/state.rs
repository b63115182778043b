use std::path::Path;

use serde::Deserialize;

use crate::config::AppConfig;
use crate::data::error::{ParseError, SelectionError};
use crate::data::loader;
use crate::data::model::ParsedTable;
use crate::data::scatter::{scatter, AxisSelection, PlotSpec};
use crate::data::series::TimeSeries;
use crate::data::stats::{describe, ColumnSummary};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Page {
    Dashboard,
    Visualization,
    Demo,
    About,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Visualization, Page::Demo, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Visualization => "Data Visualization",
            Page::Demo => "Interactive Demo",
            Page::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Data visualization page
// ---------------------------------------------------------------------------

/// Where the upload flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    NoFile,
    Parsed,
    AxesChosen,
}

/// Upload, preview, statistics and scatter plot state.
pub struct VisualizationState {
    /// Name of the file the current table came from.
    pub file_name: Option<String>,
    pub table: Option<ParsedTable>,
    /// Cached `numeric_columns()` of `table`.
    pub numeric_columns: Vec<String>,
    /// Cached `describe()` of `table`.
    pub summary: Vec<ColumnSummary>,
    pub axes: Option<AxisSelection>,
    pub plot: Option<PlotSpec>,
    /// Last upload failure; cleared by the next successful upload.
    pub error: Option<String>,
    pub preview_rows: usize,
}

impl VisualizationState {
    pub fn new(preview_rows: usize) -> Self {
        Self {
            file_name: None,
            table: None,
            numeric_columns: Vec::new(),
            summary: Vec::new(),
            axes: None,
            plot: None,
            error: None,
            preview_rows,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        match (&self.table, &self.axes) {
            (None, _) => UploadPhase::NoFile,
            (Some(_), None) => UploadPhase::Parsed,
            (Some(_), Some(_)) => UploadPhase::AxesChosen,
        }
    }

    /// Parse an uploaded file's bytes. On failure the error is recorded and
    /// no table is kept.
    pub fn ingest_bytes(&mut self, name: &str, bytes: &[u8]) {
        let result = loader::parse(bytes);
        self.apply(name, result);
    }

    /// Read and parse a file picked from disk.
    pub fn ingest_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let result = loader::load_file(path);
        self.apply(&name, result);
    }

    fn apply(&mut self, name: &str, result: Result<ParsedTable, ParseError>) {
        match result {
            Ok(table) => {
                log::info!(
                    "Loaded {name}: {} rows, columns {:?}",
                    table.len(),
                    table.columns()
                );
                self.set_table(name, table);
            }
            Err(e) => {
                log::error!("Failed to read {name}: {e:#}");
                self.clear_table();
                self.error = Some(format!("Error reading file: {e}"));
            }
        }
    }

    /// Back to "no file": nothing of an earlier upload stays on screen.
    fn clear_table(&mut self) {
        self.file_name = None;
        self.table = None;
        self.numeric_columns.clear();
        self.summary.clear();
        self.axes = None;
        self.plot = None;
    }

    /// Replace the current table and reset the axis pickers.
    pub fn set_table(&mut self, name: &str, table: ParsedTable) {
        self.numeric_columns = table.numeric_columns();
        self.summary = describe(&table);
        self.axes = if self.numeric_columns.len() >= 2 {
            AxisSelection::default_for(&self.numeric_columns)
        } else {
            None
        };
        self.file_name = Some(name.to_string());
        self.table = Some(table);
        self.error = None;
        self.replot();
    }

    pub fn set_x_axis(&mut self, column: &str) {
        if let Some(axes) = &mut self.axes {
            axes.x = column.to_string();
        }
        self.replot();
    }

    pub fn set_y_axis(&mut self, column: &str) {
        if let Some(axes) = &mut self.axes {
            axes.y = column.to_string();
        }
        self.replot();
    }

    /// Rebuild the plot for the current axes.
    fn replot(&mut self) {
        self.plot = match (&self.table, &self.axes) {
            (Some(table), Some(axes)) => match scatter(table, &axes.x, &axes.y) {
                Ok(plot) => Some(plot),
                Err(e) => {
                    log::debug!("No scatter plot: {e}");
                    None
                }
            },
            _ => None,
        };
    }

    /// Informational notice shown instead of the axis pickers.
    pub fn notice(&self) -> Option<SelectionError> {
        self.table.as_ref()?;
        let found = self.numeric_columns.len();
        (found < 2).then_some(SelectionError::TooFewNumericColumns { found })
    }
}

// ---------------------------------------------------------------------------
// Interactive demo page
// ---------------------------------------------------------------------------

pub const DEMO_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];
pub const ADVANCED_OPTIONS: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Widget values of the demo page.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub slider: u32,
    pub option: &'static str,
    pub show_advanced: bool,
    pub advanced_option: &'static str,
    pub name: String,
    pub number: u32,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            slider: 50,
            option: DEMO_OPTIONS[0],
            show_advanced: false,
            advanced_option: ADVANCED_OPTIONS[0],
            name: "Anonymous".to_string(),
            number: 100,
        }
    }
}

impl DemoState {
    pub fn slider_echo(&self) -> String {
        format!("You selected: {}", self.slider)
    }

    pub fn option_echo(&self) -> String {
        format!("You chose: {}", self.option)
    }

    pub fn advanced_echo(&self) -> Option<String> {
        self.show_advanced
            .then(|| format!("Advanced option selected: {}", self.advanced_option))
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    pub fn number_echo(&self) -> String {
        format!("Number entered: {}", self.number)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub page: Page,
    pub series: TimeSeries,
    pub visualization: VisualizationState,
    pub demo: DemoState,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page: config.start_page,
            series: TimeSeries::sample_2024(&mut rand::thread_rng()),
            visualization: VisualizationState::new(config.preview_rows),
            demo: DemoState::default(),
        }
    }

    /// Draw a fresh random walk for the dashboard chart.
    pub fn regenerate_series(&mut self) {
        self.series = TimeSeries::sample_2024(&mut rand::thread_rng());
        log::debug!("Regenerated sample series ({} points)", self.series.values.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upload_flow_reaches_axes_chosen() {
        let mut vis = VisualizationState::new(5);
        assert_eq!(vis.phase(), UploadPhase::NoFile);

        vis.ingest_bytes("data.csv", b"a,b\n1,2\n3,4\n");

        assert_eq!(vis.phase(), UploadPhase::AxesChosen);
        assert_eq!(vis.file_name.as_deref(), Some("data.csv"));
        assert_eq!(vis.summary.len(), 2);
        let plot = vis.plot.as_ref().unwrap();
        assert_eq!(plot.title, "a vs a");

        vis.set_y_axis("b");
        assert_eq!(vis.plot.as_ref().unwrap().points, vec![[1.0, 2.0], [3.0, 4.0]]);
        assert!(vis.notice().is_none());
    }

    #[test]
    fn test_text_only_upload_shows_notice() {
        let mut vis = VisualizationState::new(5);
        vis.ingest_bytes("text.csv", b"a,b\nx,y\n");

        assert_eq!(vis.phase(), UploadPhase::Parsed);
        assert!(vis.plot.is_none());
        assert!(vis.summary.is_empty());
        assert_eq!(
            vis.notice(),
            Some(SelectionError::TooFewNumericColumns { found: 0 })
        );
        assert!(vis.error.is_none());
    }

    #[test]
    fn test_single_numeric_column_notice() {
        let mut vis = VisualizationState::new(5);
        vis.ingest_bytes("one.csv", b"a,b\n1,x\n2,y\n");

        assert_eq!(
            vis.notice(),
            Some(SelectionError::TooFewNumericColumns { found: 1 })
        );
        assert!(vis.axes.is_none());
    }

    #[test]
    fn test_parse_failure_clears_previous_table() {
        let mut vis = VisualizationState::new(5);
        vis.ingest_bytes("good.csv", b"a,b\n1,2\n3,4\n");
        assert_eq!(vis.phase(), UploadPhase::AxesChosen);

        vis.ingest_bytes("bad.csv", b"a,b\n1,2,3\n");

        assert!(vis.error.as_deref().unwrap().starts_with("Error reading file:"));
        assert_eq!(vis.phase(), UploadPhase::NoFile);
        assert_eq!(vis.file_name, None);
        assert!(vis.numeric_columns.is_empty());
        assert!(vis.summary.is_empty());
        assert!(vis.plot.is_none());
        assert!(vis.notice().is_none());

        vis.ingest_bytes("next.csv", b"c,d\n5,6\n");
        assert!(vis.error.is_none());
        assert_eq!(vis.axes.as_ref().unwrap().x, "c");
    }

    #[test]
    fn test_parse_failure_without_prior_table() {
        let mut vis = VisualizationState::new(5);
        vis.ingest_bytes("bad.csv", b"");
        assert_eq!(vis.phase(), UploadPhase::NoFile);
        assert!(vis.error.is_some());
        assert!(vis.notice().is_none());
    }

    #[test]
    fn test_demo_defaults_echo() {
        let mut demo = DemoState::default();
        assert_eq!(demo.slider_echo(), "You selected: 50");
        assert_eq!(demo.option_echo(), "You chose: Option 1");
        assert_eq!(demo.greeting(), "Hello, Anonymous!");
        assert_eq!(demo.number_echo(), "Number entered: 100");
        assert_eq!(demo.advanced_echo(), None);

        demo.show_advanced = true;
        demo.advanced_option = ADVANCED_OPTIONS[2];
        assert_eq!(
            demo.advanced_echo().as_deref(),
            Some("Advanced option selected: Option C")
        );
    }

    #[test]
    fn test_page_labels() {
        let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Data Visualization", "Interactive Demo", "About"]
        );
    }

    #[test]
    fn test_app_state_starts_on_configured_page() {
        let config = AppConfig {
            start_page: Page::About,
            preview_rows: 3,
            ..AppConfig::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.page, Page::About);
        assert_eq!(state.visualization.preview_rows, 3);
        assert_eq!(state.series.values.len(), 366);
    }
}
