use eframe::egui;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PanganApp {
    pub state: AppState,
    colors: ColorMap,
    /// Region the colour map was built for.
    colors_for: Option<String>,
}

impl PanganApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
            colors: ColorMap::default(),
            colors_for: None,
        }
    }

    fn sync_colors(&mut self) {
        let region = self.state.loaded.as_ref().map(|_| self.state.region.clone());
        if region != self.colors_for {
            self.colors = match &self.state.loaded {
                Some(loaded) => ColorMap::new(&loaded.commodities),
                None => ColorMap::default(),
            };
            self.colors_for = region;
        }
    }
}

impl eframe::App for PanganApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: region and filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        self.sync_colors();

        // ---- Central panel: chart, stats, optional raw table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::illustration(ui, &self.state);
                    if self.state.loaded.is_none() {
                        return;
                    }
                    if self.state.show_table {
                        tables::raw_table(ui, &self.state);
                        ui.separator();
                    }
                    if self.state.selected.is_empty() {
                        ui.label("Select at least one commodity to show the chart.");
                        return;
                    }
                    plot::price_plot(ui, &self.state, &self.colors);
                    ui.separator();
                    tables::stats_table(ui, &self.state);
                });
        });
    }
}
