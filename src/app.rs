use eframe::egui;

use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: DashboardState,
}

impl LaunchDashApp {
    pub fn new(state: DashboardState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() / 2.0 - 40.0).max(120.0);
            plot::pie_chart(ui, self.state.pie(), chart_height);
            ui.separator();
            plot::scatter_chart(ui, self.state.scatter(), self.state.color_map(), chart_height);
        });
    }
}
