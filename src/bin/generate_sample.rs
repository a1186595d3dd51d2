use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use launch_dash::config::DashboardConfig;
use launch_dash::data::model::LaunchSite;

/// One output row. Mirrors the published launch table, including columns the
/// dashboard ignores.
#[derive(Serialize)]
struct SampleRow<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    site: &'a str,
    #[serde(rename = "Mission Outcome")]
    mission_outcome: &'a str,
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'a str,
}

/// Booster generations in flight order: (category, flights, landing success
/// probability, payload range in kg).
const GENERATIONS: [(&str, u32, f64, (f64, f64)); 5] = [
    ("v1.0", 5, 0.2, (0.0, 700.0)),
    ("v1.1", 15, 0.35, (500.0, 4500.0)),
    ("FT", 24, 0.7, (2000.0, 9600.0)),
    ("B4", 11, 0.6, (2200.0, 7000.0)),
    ("B5", 1, 0.95, (3600.0, 3700.0)),
];

fn main() -> Result<()> {
    // Fixed seed: the same file on every run.
    let mut rng = StdRng::seed_from_u64(42);
    let output_path = DashboardConfig::default().dataset_path;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let mut flight_number = 0u32;
    for (category, flights, p_success, (lo, hi)) in GENERATIONS {
        for _ in 0..flights {
            flight_number += 1;
            let site = LaunchSite::ALL
                .choose(&mut rng)
                .copied()
                .context("launch site list is empty")?;
            let class = i64::from(rng.gen_bool(p_success));
            let payload_mass_kg = rng.gen_range(lo..=hi).round();

            writer.serialize(SampleRow {
                flight_number,
                site: site.name(),
                mission_outcome: "Success",
                class,
                payload_mass_kg,
                booster_version: format!("F9 {category} B{}", 1000 + flight_number),
                booster_category: category,
            })?;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {flight_number} launches to {}", output_path.display());
    Ok(())
}
