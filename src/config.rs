use std::path::PathBuf;

use num_format::{Locale, ToFormattedString};

/// Compiled-in dashboard settings.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub title: String,
    /// Dataset read once at startup, relative to the working directory.
    pub dataset_path: PathBuf,
    pub payload_slider: SliderConfig,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

/// Payload range control settings, in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Labelled tick positions.
    pub marks: Vec<f64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            dataset_path: PathBuf::from("spacex_launch_dash.csv"),
            payload_slider: SliderConfig::default(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
        }
    }
}

impl SliderConfig {
    /// Mark label with thousands separators, e.g. `7,500`. Always the
    /// English grouping, whatever the system locale.
    pub fn mark_label(value: f64) -> String {
        (value.round() as i64).to_formatted_string(&Locale::en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_labels_use_thousands_separators() {
        let labels: Vec<String> = SliderConfig::default()
            .marks
            .into_iter()
            .map(SliderConfig::mark_label)
            .collect();
        assert_eq!(labels, ["0", "2,500", "5,000", "7,500", "10,000"]);
    }

    #[test]
    fn mark_labels_round_and_keep_sign() {
        assert_eq!(SliderConfig::mark_label(1234567.6), "1,234,568");
        assert_eq!(SliderConfig::mark_label(-2500.0), "-2,500");
        assert_eq!(SliderConfig::mark_label(999.0), "999");
    }
}
