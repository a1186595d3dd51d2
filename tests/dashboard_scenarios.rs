use std::fs;
use std::path::{Path, PathBuf};

use launch_dash::chart::SliceKey;
use launch_dash::config::DashboardConfig;
use launch_dash::data::filter::PayloadRange;
use launch_dash::data::loader::load;
use launch_dash::data::model::{LaunchSite, OutcomeClass, SiteSelection};
use launch_dash::state::{ControlEvent, DashboardState};
use launch_dash::{DashboardError, on_filters_changed, on_site_changed};
use tempfile::TempDir;

fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("spacex_launch_dash.csv");
    let mut out = String::from(
        ",Flight Number,Launch Site,Mission Outcome,class,\
         Payload Mass (kg),Booster Version,Booster Version Category\n",
    );
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    fs::write(&path, out).unwrap();
    path
}

fn scenario_file(dir: &TempDir) -> PathBuf {
    write_csv(
        dir.path(),
        &[
            "0,1,CCAFS LC-40,Success,1,500.0,F9 v1.0  B0003,v1.0",
            "1,2,CCAFS LC-40,Success,0,500.0,F9 v1.0  B0004,v1.0",
            "2,3,KSC LC-39A,Success,1,3000.0,F9 v1.1  B1011,v1.1",
        ],
    )
}

fn points(site: SiteSelection, low: f64, high: f64, dir: &TempDir) -> Vec<(f64, i64, String)> {
    let ds = load(&scenario_file(dir)).unwrap();
    on_filters_changed(&ds, site, PayloadRange::new(low, high))
        .points
        .into_iter()
        .map(|p| (p.payload_mass_kg, p.outcome.as_i64(), p.booster_category))
        .collect()
}

#[test]
fn pie_scenarios_from_file() {
    let dir = TempDir::new().unwrap();
    let ds = load(&scenario_file(&dir)).unwrap();

    let all: Vec<(SliceKey, usize)> = on_site_changed(&ds, "ALL_SITES".parse().unwrap())
        .slices
        .into_iter()
        .map(|s| (s.key, s.count))
        .collect();
    assert_eq!(
        all,
        vec![
            (SliceKey::Site(LaunchSite::CcafsLc40), 1),
            (SliceKey::Site(LaunchSite::KscLc39a), 1),
        ]
    );

    let one: Vec<(SliceKey, usize)> = on_site_changed(&ds, "CCAFS LC-40".parse().unwrap())
        .slices
        .into_iter()
        .map(|s| (s.key, s.count))
        .collect();
    assert_eq!(
        one,
        vec![
            (SliceKey::Outcome(OutcomeClass::Success), 1),
            (SliceKey::Outcome(OutcomeClass::Failure), 1),
        ]
    );
}

#[test]
fn scatter_scenarios_from_file() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        points(SiteSelection::AllSites, 0.0, 10000.0, &dir),
        vec![
            (500.0, 1, "v1.0".to_string()),
            (500.0, 0, "v1.0".to_string()),
            (3000.0, 1, "v1.1".to_string()),
        ]
    );
    assert_eq!(
        points(SiteSelection::AllSites, 1000.0, 10000.0, &dir),
        vec![(3000.0, 1, "v1.1".to_string())]
    );
    assert!(points(SiteSelection::Site(LaunchSite::KscLc39a), 0.0, 2999.0, &dir).is_empty());
}

#[test]
fn unknown_selector_value_is_rejected() {
    let err = "Cape Canaveral".parse::<SiteSelection>().unwrap_err();
    assert_eq!(err, DashboardError::InvalidSelection("Cape Canaveral".to_string()));
}

#[test]
fn binding_layer_tracks_controls() {
    let dir = TempDir::new().unwrap();
    let ds = load(&scenario_file(&dir)).unwrap();
    let mut state = DashboardState::new(ds, DashboardConfig::default());

    state.apply(ControlEvent::Payload(PayloadRange::new(0.0, 10000.0)));
    assert_eq!(state.scatter().points.len(), 3);

    state.apply(ControlEvent::Site(SiteSelection::Site(LaunchSite::KscLc39a)));
    assert_eq!(state.scatter().points.len(), 1);
    assert_eq!(state.pie().total(), 1);
}
