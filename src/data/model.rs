use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// LaunchSite – the fixed set of launch locations
// ---------------------------------------------------------------------------

/// A launch location. The set is closed: rows naming any other site are
/// rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LaunchSite {
    CcafsLc40,
    VafbSlc4e,
    KscLc39a,
    CcafsSlc40,
}

impl LaunchSite {
    /// Selector order.
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::VafbSlc4e,
        LaunchSite::KscLc39a,
        LaunchSite::CcafsSlc40,
    ];

    /// Name as it appears in the dataset's `Launch Site` column.
    pub fn name(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::VafbSlc4e => "VAFB SLC-4E",
            LaunchSite::KscLc39a => "KSC LC-39A",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
        }
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LaunchSite {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaunchSite::ALL
            .into_iter()
            .find(|site| site.name() == s.trim())
            .ok_or_else(|| DashboardError::InvalidSelection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// OutcomeClass – binary launch result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    /// Numeric class as stored in the `class` column (and plotted on the y axis).
    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for OutcomeClass {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(other),
        }
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the site selector's value
// ---------------------------------------------------------------------------

/// Raw selector value meaning "no site restriction".
pub const ALL_SITES: &str = "ALL_SITES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(LaunchSite),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection.
    pub fn matches(self, site: LaunchSite) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    /// Human-readable selector label.
    pub fn label(self) -> &'static str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(site) => site.name(),
        }
    }

    /// Every value the selector can emit, in display order.
    pub fn options() -> impl Iterator<Item = SiteSelection> {
        std::iter::once(SiteSelection::AllSites)
            .chain(LaunchSite::ALL.into_iter().map(SiteSelection::Site))
    }
}

impl FromStr for SiteSelection {
    type Err = DashboardError;

    /// Parse a raw selector value: `ALL_SITES` or a site name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL_SITES {
            return Ok(SiteSelection::AllSites);
        }
        s.parse().map(SiteSelection::Site)
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => f.write_str(ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: LaunchSite,
    /// Always finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    /// Used only for colouring.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table with bounds pre-computed once.
///
/// There is no `&mut` access: once built, a dataset is only read.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    categories: BTreeSet<String>,
}

impl Dataset {
    /// Build payload bounds and the category index from the loaded records.
    /// An empty table gets bounds `[0, 0]`.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let (min_payload, max_payload) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg))
            })
        };
        let categories = records
            .iter()
            .map(|r| r.booster_category.clone())
            .collect();

        Dataset {
            records,
            min_payload,
            max_payload,
            categories,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct booster categories, sorted.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
