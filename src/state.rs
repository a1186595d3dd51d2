use crate::chart::{CorrelationChartSpec, ProportionChartSpec, on_filters_changed, on_site_changed};
use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterState, PayloadRange, filtered_indices, init_filter_state};
use crate::data::loader;
use crate::data::model::{Dataset, SiteSelection};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Controls, charts and the trigger table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn id(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    SuccessPie,
    SuccessPayloadScatter,
}

impl ChartId {
    pub const ALL: [ChartId; 2] = [ChartId::SuccessPie, ChartId::SuccessPayloadScatter];

    pub fn id(self) -> &'static str {
        match self {
            ChartId::SuccessPie => "success-pie-chart",
            ChartId::SuccessPayloadScatter => "success-payload-scatter-chart",
        }
    }

    /// Controls whose changes recompute this chart.
    pub fn triggers(self) -> &'static [ControlId] {
        match self {
            ChartId::SuccessPie => &[ControlId::SiteDropdown],
            ChartId::SuccessPayloadScatter => &[ControlId::SiteDropdown, ControlId::PayloadSlider],
        }
    }
}

/// A new value emitted by one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    Site(SiteSelection),
    Payload(PayloadRange),
}

impl ControlEvent {
    pub fn control(&self) -> ControlId {
        match self {
            ControlEvent::Site(_) => ControlId::SiteDropdown,
            ControlEvent::Payload(_) => ControlId::PayloadSlider,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct DashboardState {
    pub config: DashboardConfig,

    /// Loaded once before the window opens; never mutated.
    dataset: Dataset,

    /// Current control values.
    filters: FilterState,

    pie: ProportionChartSpec,
    scatter: CorrelationChartSpec,

    /// Booster category colours, stable across filter changes.
    color_map: ColorMap,
}

impl DashboardState {
    /// Ingest the loaded dataset, initialise filters and both charts.
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let filters = init_filter_state(&dataset);
        let pie = on_site_changed(&dataset, filters.site);
        let scatter = on_filters_changed(&dataset, filters.site, filters.payload);
        let color_map = ColorMap::new(dataset.categories());

        Self {
            config,
            dataset,
            filters,
            pie,
            scatter,
            color_map,
        }
    }

    /// Read `config.dataset_path` and build the initial state. A load failure
    /// is returned once, unlogged, for the caller to report.
    pub fn load(config: DashboardConfig) -> Result<Self> {
        let dataset = loader::load(&config.dataset_path)?;
        log::info!(
            "Loaded {} launches from {}, payload span {}..{} kg, {} booster categories",
            dataset.len(),
            config.dataset_path.display(),
            dataset.min_payload(),
            dataset.max_payload(),
            dataset.categories().len()
        );
        Ok(Self::new(dataset, config))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> FilterState {
        self.filters
    }

    pub fn pie(&self) -> &ProportionChartSpec {
        &self.pie
    }

    pub fn scatter(&self) -> &CorrelationChartSpec {
        &self.scatter
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Number of records passing both filters.
    pub fn visible_count(&self) -> usize {
        filtered_indices(&self.dataset, &self.filters).len()
    }

    /// Apply a control change and recompute every chart it triggers.
    /// Returns the recomputed charts in [`ChartId::ALL`] order.
    pub fn apply(&mut self, event: ControlEvent) -> Vec<ChartId> {
        match event {
            ControlEvent::Site(site) => self.filters.site = site,
            ControlEvent::Payload(range) => self.filters.payload = range,
        }

        let control = event.control();
        let fired: Vec<ChartId> = ChartId::ALL
            .into_iter()
            .filter(|chart| chart.triggers().contains(&control))
            .collect();

        for &chart in &fired {
            self.recompute(chart);
        }
        fired
    }

    fn recompute(&mut self, chart: ChartId) {
        let FilterState { site, payload } = self.filters;
        match chart {
            ChartId::SuccessPie => {
                self.pie = on_site_changed(&self.dataset, site);
                log::debug!("{}: {} slices for {site}", chart.id(), self.pie.slices.len());
            }
            ChartId::SuccessPayloadScatter => {
                self.scatter = on_filters_changed(&self.dataset, site, payload);
                log::debug!(
                    "{}: {} points for {site} in ({}, {})",
                    chart.id(),
                    self.scatter.points.len(),
                    payload.low,
                    payload.high
                );
            }
        }
    }

    /// Move the low handle, pushing the high handle up if they would cross.
    pub fn set_payload_low(&mut self, low: f64) -> Vec<ChartId> {
        let slider = &self.config.payload_slider;
        let low = low.clamp(slider.min, slider.max);
        let high = self.filters.payload.high.max(low);
        self.apply(ControlEvent::Payload(PayloadRange::new(low, high)))
    }

    /// Move the high handle, pushing the low handle down if they would cross.
    pub fn set_payload_high(&mut self, high: f64) -> Vec<ChartId> {
        let slider = &self.config.payload_slider;
        let high = high.clamp(slider.min, slider.max);
        let low = self.filters.payload.low.min(high);
        self.apply(ControlEvent::Payload(PayloadRange::new(low, high)))
    }

    /// Back to all sites and the dataset's full payload span.
    pub fn reset_filters(&mut self) {
        let defaults = init_filter_state(&self.dataset);
        self.apply(ControlEvent::Site(defaults.site));
        self.apply(ControlEvent::Payload(defaults.payload));
    }
}
