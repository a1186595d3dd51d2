use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{CorrelationChartSpec, ProportionChartSpec};
use crate::color::{ColorMap, generate_palette};

const EMPTY_CHART_TEXT: &str = "No launches match the current selection";

/// Arc segments per full turn of the pie.
const PIE_RESOLUTION: f64 = 128.0;

// ---------------------------------------------------------------------------
// Pie chart geometry
// ---------------------------------------------------------------------------

/// Outline of a unit-circle wedge: the centre followed by `segments + 1`
/// points along the arc from `start` through `start + sweep` (radians).
pub fn wedge_points(start: f64, sweep: f64, segments: usize) -> Vec<[f64; 2]> {
    let segments = segments.max(1);
    std::iter::once([0.0, 0.0])
        .chain((0..=segments).map(|i| {
            let angle = start + sweep * i as f64 / segments as f64;
            [angle.cos(), angle.sin()]
        }))
        .collect()
}

// ---------------------------------------------------------------------------
// Proportion chart (pie)
// ---------------------------------------------------------------------------

/// Render the pie chart. Slices run clockwise from twelve o'clock.
pub fn pie_chart(ui: &mut Ui, spec: &ProportionChartSpec, height: f32) {
    ui.strong(spec.title);

    if spec.is_empty() {
        empty_chart(ui, height);
        return;
    }

    let colors = generate_palette(spec.slices.len());

    Plot::new("success_pie_chart")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for (slice, color) in spec.slices.iter().zip(colors) {
                let sweep = -TAU * slice.fraction;
                let segments = (PIE_RESOLUTION * slice.fraction).ceil() as usize;

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge_points(start, sweep, segments)))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(format!("{} ({})", slice.key.label(), slice.count)),
                );

                let mid = start + sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", slice.fraction * 100.0))
                        .color(Color32::WHITE)
                        .strong(),
                ));

                start += sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation chart (scatter)
// ---------------------------------------------------------------------------

/// Render payload vs. outcome, one coloured series per booster category.
pub fn scatter_chart(ui: &mut Ui, spec: &CorrelationChartSpec, color_map: &ColorMap, height: f32) {
    ui.strong(&spec.title);

    if spec.is_empty() {
        empty_chart(ui, height);
        return;
    }

    Plot::new("success_payload_scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\npayload={:.0} kg\nclass={:.0}", value.x, value.y)
            }
        })
        .show(ui, |plot_ui| {
            for (category, points) in spec.series_by_category() {
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(color_map.color_for(category))
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}

fn empty_chart(ui: &mut Ui, height: f32) {
    ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(EMPTY_CHART_TEXT).weak());
        });
    });
}
