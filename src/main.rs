use anyhow::Context;
use eframe::egui;
use launch_dash::app::LaunchDashApp;
use launch_dash::config::DashboardConfig;
use launch_dash::state::DashboardState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };
    let title = config.title.clone();

    // The dataset must be in memory before the first frame; a bad file is fatal.
    let state = DashboardState::load(config)?;

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
