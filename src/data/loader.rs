use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{Dataset, LaunchRecord, LaunchSite, OutcomeClass};
use crate::error::DashboardError;

/// Column names shared by every supported format.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const CATEGORY_COLUMN: &str = "Booster Version Category";

pub const REQUIRED_COLUMNS: [&str; 4] =
    [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, CATEGORY_COLUMN];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset, reporting any failure as
/// [`DashboardError::DataLoad`].
pub fn load(path: &Path) -> crate::error::Result<Dataset> {
    load_file(path).map_err(|e| DashboardError::DataLoad {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

/// Load launch records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, extra columns ignored
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

/// One row as it comes off the wire, before validation.
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawLaunchRow {
    fn validate(self, row: usize) -> Result<LaunchRecord> {
        let site: LaunchSite = self
            .site
            .parse()
            .map_err(|_| anyhow::anyhow!("Row {row}: unknown launch site '{}'", self.site))?;

        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            bail!("Row {row}: invalid payload mass {}", self.payload_mass_kg);
        }

        let outcome = OutcomeClass::try_from(self.class)
            .map_err(|v| anyhow::anyhow!("Row {row}: class must be 0 or 1, got {v}"))?;

        Ok(LaunchRecord {
            site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_category: self.booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    reader
        .deserialize::<RawLaunchRow>()
        .enumerate()
        .map(|(row_no, result)| {
            let raw = result.with_context(|| format!("CSV row {row_no}"))?;
            raw.validate(row_no)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&text).context("Expected top-level JSON array")?;

    rows.into_iter()
        .enumerate()
        .map(|(i, value)| {
            let obj = value
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            for col in REQUIRED_COLUMNS {
                if !obj.contains_key(col) {
                    bail!("Row {i}: missing '{col}'");
                }
            }
            let raw: RawLaunchRow =
                serde_json::from_value(value).with_context(|| format!("Row {i}: invalid field"))?;
            raw.validate(i)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per field.
///
/// Numeric columns are cast to float, so files written by both **Pandas**
/// (int64 / float64) and narrower writers load the same way. `class` must
/// still hold exactly 0 or 1 after the cast.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &str, to: &DataType| -> Result<ArrayRef> {
            let idx = schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
            cast(batch.column(idx), to).with_context(|| format!("casting '{name}' to {to:?}"))
        };

        let sites = column(SITE_COLUMN, &DataType::Utf8)?;
        let payloads = column(PAYLOAD_COLUMN, &DataType::Float64)?;
        let classes = column(CLASS_COLUMN, &DataType::Float64)?;
        let categories = column(CATEGORY_COLUMN, &DataType::Utf8)?;

        let sites = sites.as_string::<i32>();
        let payloads = payloads.as_primitive::<Float64Type>();
        let classes = classes.as_primitive::<Float64Type>();
        let categories = categories.as_string::<i32>();

        for i in 0..batch.num_rows() {
            let row = records.len();
            if sites.is_null(i)
                || payloads.is_null(i)
                || classes.is_null(i)
                || categories.is_null(i)
            {
                bail!("Row {row}: null value in a required column");
            }
            let raw = RawLaunchRow {
                site: sites.value(i).to_string(),
                payload_mass_kg: payloads.value(i),
                class: exact_class(classes.value(i), row)?,
                booster_category: categories.value(i).to_string(),
            };
            records.push(raw.validate(row)?);
        }
    }

    Ok(records)
}

/// Float `class` values are accepted only when they are exactly 0 or 1;
/// truncating 0.5 or 1.9 would invent an outcome.
fn exact_class(value: f64, row: usize) -> Result<i64> {
    if value == 0.0 || value == 1.0 {
        Ok(value as i64)
    } else {
        bail!("Row {row}: class must be 0 or 1, got {value}")
    }
}
