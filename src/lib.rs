//! Launch records dashboard.
//!
//! The core is rendering-free: [`data`] loads and filters the table,
//! [`chart`] turns control values into chart specs, and [`state`] wires
//! control changes to the charts they trigger. [`ui`] and [`app`] draw it all
//! with egui.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use chart::{on_filters_changed, on_site_changed};
pub use error::DashboardError;
