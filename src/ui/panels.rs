use eframe::egui::{self, RichText, Ui};

use crate::config::SliderConfig;
use crate::data::model::SiteSelection;
use crate::state::{ControlEvent, ControlId, DashboardState};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Site selector ----
    ui.strong("Launch Site");
    let current = state.filters().site;
    let mut selected = current;
    egui::ComboBox::from_id_salt(ControlId::SiteDropdown.id())
        .selected_text(selected.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in SiteSelection::options() {
                ui.selectable_value(&mut selected, option, option.label());
            }
        });
    if selected != current {
        state.apply(ControlEvent::Site(selected));
    }

    ui.add_space(8.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let slider = state.config.payload_slider.clone();
    let payload = state.filters().payload;

    let mut low = payload.low;
    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .text("min"),
        )
        .changed();
    if low_changed {
        state.set_payload_low(low);
    }

    let mut high = payload.high;
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .text("max"),
        )
        .changed();
    if high_changed {
        state.set_payload_high(high);
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in &slider.marks {
            ui.label(RichText::new(SliderConfig::mark_label(*mark)).weak().small());
        }
    });

    ui.add_space(8.0);
    if ui.button("Reset filters").clicked() {
        state.reset_filters();
    }

    ui.separator();
    let dataset = state.dataset();
    ui.label(format!(
        "{} of {} launches in ({:.0}, {:.0}) kg",
        state.visible_count(),
        dataset.len(),
        state.filters().payload.low,
        state.filters().payload.high,
    ));
    ui.label(
        RichText::new(format!(
            "Dataset payload span: {:.0} – {:.0} kg",
            dataset.min_payload(),
            dataset.max_payload()
        ))
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar.
pub fn top_bar(ui: &mut Ui, state: &DashboardState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&state.config.title).size(28.0));
    });
}
