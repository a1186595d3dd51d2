//! egui rendering: filter panel and the two charts.

pub mod panels;
pub mod plot;
