use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// First hue of the wheel; blue reads well on both egui themes.
const HUE_OFFSET: f32 = 210.0;

/// `n` distinct colours: evenly spaced hues starting at [`HUE_OFFSET`], with
/// alternating lightness so neighbouring pie wedges stay apart.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let lightness = if i % 2 == 0 { 0.55 } else { 0.42 };
            let hsl = Hsl::new(HUE_OFFSET + step * i as f32, 0.75, lightness);
            let rgb: Srgb = Srgb::from_color(hsl);
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Color32
// ---------------------------------------------------------------------------

/// Maps booster categories to distinct colours. Built once from the full
/// dataset so a category keeps its colour whatever the filters hide.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}
