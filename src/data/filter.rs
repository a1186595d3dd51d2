use super::model::{Dataset, LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Filter predicate: selected site + payload window
// ---------------------------------------------------------------------------

/// Payload range selected on the slider, in kilograms.
///
/// Membership is exclusive on both ends: a record passes only when
/// `low < payload < high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg > self.low && payload_mass_kg < self.high
    }
}

/// Control values held by the binding layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

/// Initialise a [`FilterState`] for a freshly loaded dataset:
/// all sites, full payload span.
pub fn init_filter_state(dataset: &Dataset) -> FilterState {
    FilterState {
        site: SiteSelection::AllSites,
        payload: PayloadRange::new(dataset.min_payload(), dataset.max_payload()),
    }
}

/// Records at the selected site, in dataset order.
pub fn site_records(
    dataset: &Dataset,
    site: SiteSelection,
) -> impl Iterator<Item = &LaunchRecord> + '_ {
    dataset.records().iter().filter(move |r| site.matches(r.site))
}

/// Records at the selected site whose payload lies strictly inside `range`.
pub fn filtered_records(
    dataset: &Dataset,
    site: SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &LaunchRecord> + '_ {
    site_records(dataset, site).filter(move |r| range.contains(r.payload_mass_kg))
}

/// Return indices of records that pass both filters.
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            filters.site.matches(r.site) && filters.payload.contains(r.payload_mass_kg)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::scenario_dataset;
    use crate::data::model::LaunchSite;

    #[test]
    fn range_excludes_both_bounds() {
        let range = PayloadRange::new(500.0, 3000.0);
        assert!(!range.contains(500.0));
        assert!(!range.contains(3000.0));
        assert!(range.contains(500.5));
        assert!(range.contains(2999.0));
    }

    #[test]
    fn initial_state_spans_dataset() {
        let ds = scenario_dataset();
        let state = init_filter_state(&ds);
        assert_eq!(state.site, SiteSelection::AllSites);
        assert_eq!(state.payload, PayloadRange::new(500.0, 3000.0));
    }

    #[test]
    fn default_bounds_exclude_the_extreme_payloads() {
        // min/max payload records sit on the bounds, so they drop out.
        let ds = scenario_dataset();
        let state = init_filter_state(&ds);
        assert!(filtered_indices(&ds, &state).is_empty());
    }

    #[test]
    fn indices_follow_site_and_range() {
        let ds = scenario_dataset();
        let mut state = FilterState {
            site: SiteSelection::AllSites,
            payload: PayloadRange::new(0.0, 10000.0),
        };
        assert_eq!(filtered_indices(&ds, &state), vec![0, 1, 2]);

        state.site = SiteSelection::Site(LaunchSite::CcafsLc40);
        assert_eq!(filtered_indices(&ds, &state), vec![0, 1]);

        state.payload = PayloadRange::new(1000.0, 10000.0);
        assert!(filtered_indices(&ds, &state).is_empty());
    }

    #[test]
    fn site_records_ignore_payload() {
        let ds = scenario_dataset();
        let n = site_records(&ds, SiteSelection::Site(LaunchSite::KscLc39a)).count();
        assert_eq!(n, 1);
        let n = site_records(&ds, SiteSelection::Site(LaunchSite::VafbSlc4e)).count();
        assert_eq!(n, 0);
    }
}
