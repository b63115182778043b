use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, Page};
use crate::ui::{about, dashboard, demo, panels, visualization};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyDashApp {
    pub state: AppState,
}

impl RustyDashApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Files dropped onto the window count as uploads.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // One upload per interaction: the last dropped file wins.
        let Some(file) = dropped.last() else {
            return;
        };

        self.state.page = Page::Visualization;
        let vis = &mut self.state.visualization;
        if let Some(bytes) = &file.bytes {
            vis.ingest_bytes(&file.name, bytes);
        } else if let Some(path) = &file.path {
            vis.ingest_path(path);
        }
    }
}

impl eframe::App for RustyDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar and title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        let page = self.state.page;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match page {
                    Page::Dashboard => dashboard::dashboard_page(ui, &mut self.state),
                    Page::Visualization => {
                        visualization::visualization_page(ui, &mut self.state.visualization)
                    }
                    Page::Demo => demo::demo_page(ui, &mut self.state.demo),
                    Page::About => about::about_page(ui),
                });
        });
    }
}
