use std::collections::BTreeMap;

use crate::data::filter::{PayloadRange, filtered_records, site_records};
use crate::data::model::{Dataset, LaunchSite, OutcomeClass, SiteSelection};

pub const ALL_SITES_PIE_TITLE: &str = "Successful launches per launch site";
pub const SITE_PIE_TITLE: &str = "Launch outcomes for the selected launch site";

// ---------------------------------------------------------------------------
// Proportion (pie) chart
// ---------------------------------------------------------------------------

/// What a pie slice counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKey {
    /// Successful launches at one site (all-sites mode).
    Site(LaunchSite),
    /// Launches of one outcome class (single-site mode).
    Outcome(OutcomeClass),
}

impl SliceKey {
    pub fn label(&self) -> String {
        match self {
            SliceKey::Site(site) => site.name().to_string(),
            SliceKey::Outcome(class) => class.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub key: SliceKey,
    pub count: usize,
    /// Share of the chart total, in `0..=1`.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChartSpec {
    pub title: &'static str,
    /// In order of first appearance in the dataset.
    pub slices: Vec<Slice>,
}

impl ProportionChartSpec {
    fn from_counts(title: &'static str, counts: Vec<(SliceKey, usize)>) -> Self {
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        let slices = counts
            .into_iter()
            .map(|(key, count)| Slice {
                key,
                count,
                fraction: count as f64 / total as f64,
            })
            .collect();
        Self { title, slices }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Count keys in order of first appearance.
fn count_in_order<K: PartialEq>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Recompute the pie chart for the site selector's current value.
///
/// * All sites: successful launches grouped by site.
/// * One site: that site's launches grouped by outcome class.
pub fn on_site_changed(dataset: &Dataset, site: SiteSelection) -> ProportionChartSpec {
    match site {
        SiteSelection::AllSites => {
            let keys = dataset
                .records()
                .iter()
                .filter(|r| r.outcome == OutcomeClass::Success)
                .map(|r| SliceKey::Site(r.site));
            ProportionChartSpec::from_counts(ALL_SITES_PIE_TITLE, count_in_order(keys))
        }
        SiteSelection::Site(_) => {
            let keys = site_records(dataset, site).map(|r| SliceKey::Outcome(r.outcome));
            ProportionChartSpec::from_counts(SITE_PIE_TITLE, count_in_order(keys))
        }
    }
}

// ---------------------------------------------------------------------------
// Correlation (scatter) chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationChartSpec {
    pub title: String,
    /// In dataset order.
    pub points: Vec<ScatterPoint>,
}

impl CorrelationChartSpec {
    /// Points grouped by booster category (sorted by name), as `[x, y]` pairs
    /// ready for plotting.
    pub fn series_by_category(&self) -> BTreeMap<&str, Vec<[f64; 2]>> {
        let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for p in &self.points {
            series
                .entry(p.booster_category.as_str())
                .or_default()
                .push([p.payload_mass_kg, p.outcome.as_i64() as f64]);
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn scatter_title(site: SiteSelection) -> String {
    match site {
        SiteSelection::AllSites => {
            "Correlation between payload and success for all sites".to_string()
        }
        SiteSelection::Site(s) => format!("Correlation between payload and success for {s}"),
    }
}

/// Recompute the scatter chart for the current site and payload range.
/// Payload bounds are exclusive.
pub fn on_filters_changed(
    dataset: &Dataset,
    site: SiteSelection,
    range: PayloadRange,
) -> CorrelationChartSpec {
    let points = filtered_records(dataset, site, range)
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    CorrelationChartSpec {
        title: scatter_title(site),
        points,
    }
}
