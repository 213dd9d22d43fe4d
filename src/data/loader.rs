use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Dataset, Record, Series};

/// Date-only format of the `Week` column.
pub const WEEK_FORMAT: &str = "%Y-%m-%d";

/// Name of the date column in both JSON and CSV sources.
const WEEK_COLUMN: &str = "Week";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid week '{0}', expected YYYY-MM-DD")]
    InvalidWeek(String),
    #[error("missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("row {row}, {column}: '{value}' is not a number")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("no header row starting with 'Week' found")]
    MissingHeader,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the weekly interest dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "Week": "2021-06-07", "javascript": 20, "python": 70, "java": 44 }, ...]`
/// * `.csv`  – Google Trends export, `Week,javascript: (Worldwide),...`
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            parse_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse a `YYYY-MM-DD` week string. The result is a calendar date with no
/// time zone; wherever a timestamp is needed it is taken as UTC midnight.
pub fn parse_week(s: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(s.trim(), WEEK_FORMAT)
        .map_err(|_| DataError::InvalidWeek(s.to_string()))
}

pub(crate) fn deserialize_week<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_week(&s).map_err(serde::de::Error::custom)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Decode the records-oriented JSON array.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let records: Vec<Record> = serde_json::from_str(text).context("parsing JSON")?;
    Ok(Dataset::new(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout as exported by Google Trends:
///
/// ```text
/// Category: All categories
///
/// Week,javascript: (Worldwide),python: (Worldwide),java: (Worldwide)
/// 2020-06-07,20,70,44
/// 2020-06-14,21,<1,45
/// ```
///
/// Lines before the `Week` header are skipped. Series columns are matched by
/// the text before the first `:`. A `<1` score is read as `0`; `NaN` and
/// infinities are rejected like any other non-number.
pub fn parse_csv<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut columns: Option<[usize; 3]> = None;
    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let Some(idx) = columns else {
            if row.get(0).map(str::trim) == Some(WEEK_COLUMN) {
                columns = Some(series_columns(&row)?);
            }
            continue;
        };

        let week = parse_week(row.get(0).unwrap_or(""))
            .with_context(|| format!("CSV row {row_no}"))?;
        let mut values = [0.0; 3];
        for (series, slot) in Series::ALL.iter().zip(values.iter_mut()) {
            let raw = row.get(idx[series.index()]).unwrap_or("");
            *slot = parse_score(raw).ok_or_else(|| DataError::InvalidValue {
                row: row_no,
                column: series.field(),
                value: raw.to_string(),
            })?;
        }
        records.push(Record::new(week, values[0], values[1], values[2]));
    }

    if columns.is_none() {
        bail!(DataError::MissingHeader);
    }
    Ok(Dataset::new(records))
}

fn series_columns(header: &csv::StringRecord) -> Result<[usize; 3], DataError> {
    let find = |series: Series| {
        header
            .iter()
            .position(|h| {
                let name = h.split(':').next().unwrap_or("").trim();
                name.eq_ignore_ascii_case(series.field())
            })
            .ok_or(DataError::MissingColumn(series.field()))
    };
    Ok([
        find(Series::JavaScript)?,
        find(Series::Python)?,
        find(Series::Java)?,
    ])
}

fn parse_score(s: &str) -> Option<f64> {
    let s = s.trim();
    if s == "<1" {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
