use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Series – the three tracked languages
// ---------------------------------------------------------------------------

/// One of the tracked search terms. The declaration order is the display
/// order used by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Series {
    JavaScript,
    Python,
    Java,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::JavaScript, Series::Python, Series::Java];

    /// Human-readable name used in labels and tooltips.
    pub fn name(self) -> &'static str {
        match self {
            Series::JavaScript => "JavaScript",
            Series::Python => "Python",
            Series::Java => "Java",
        }
    }

    /// Column / field name in the source data.
    pub fn field(self) -> &'static str {
        match self {
            Series::JavaScript => "javascript",
            Series::Python => "python",
            Series::Java => "java",
        }
    }

    /// Position in [`Series::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Record – one week of observations
// ---------------------------------------------------------------------------

/// A single weekly observation (one object of the source JSON array).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Week", deserialize_with = "super::loader::deserialize_week")]
    pub week: NaiveDate,
    pub javascript: f64,
    pub python: f64,
    pub java: f64,
}

impl Record {
    pub fn new(week: NaiveDate, javascript: f64, python: f64, java: f64) -> Self {
        Record {
            week,
            javascript,
            python,
            java,
        }
    }

    /// Interest score of one series in this week.
    pub fn value(&self, series: Series) -> f64 {
        match series {
            Series::JavaScript => self.javascript,
            Series::Python => self.python,
            Series::Java => self.java,
        }
    }

    /// Largest of the three scores.
    pub fn max_value(&self) -> f64 {
        self.javascript.max(self.python).max(self.java)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the loaded collection
// ---------------------------------------------------------------------------

/// The full parsed dataset, in file order. Weeks are expected to be
/// non-decreasing but this is not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of weeks.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest week, or `None` when empty.
    pub fn week_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.week;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.week), hi.max(r.week))
        }))
    }

    /// Largest score across all series, `0.0` when empty.
    pub fn max_value(&self) -> f64 {
        self.records
            .iter()
            .map(Record::max_value)
            .fold(0.0, f64::max)
    }
}

// ---------------------------------------------------------------------------
// SeriesAverages – derived per-series means
// ---------------------------------------------------------------------------

/// Per-series mean across all records, rounded to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesAverages {
    pub javascript: i64,
    pub python: i64,
    pub java: i64,
}

impl SeriesAverages {
    pub fn get(&self, series: Series) -> i64 {
        match series {
            Series::JavaScript => self.javascript,
            Series::Python => self.python,
            Series::Java => self.java,
        }
    }

    /// Averages in display order, each paired with the series it belongs to.
    pub fn entries(&self) -> [(Series, i64); 3] {
        Series::ALL.map(|s| (s, self.get(s)))
    }

    /// Largest of the three averages.
    pub fn max(&self) -> i64 {
        self.javascript.max(self.python).max(self.java)
    }

    /// Tooltip / list label for one series, e.g. `"Python: 68"`.
    pub fn label(&self, series: Series) -> String {
        format!("{series}: {}", self.get(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn extent_and_max_cover_all_records() {
        let ds = Dataset::new(vec![
            Record::new(week(2021, 1, 10), 15.0, 60.0, 40.0),
            Record::new(week(2021, 1, 3), 20.0, 70.0, 45.0),
            Record::new(week(2021, 1, 17), 25.0, 74.0, 44.0),
        ]);
        assert_eq!(ds.week_extent(), Some((week(2021, 1, 3), week(2021, 1, 17))));
        assert_eq!(ds.max_value(), 74.0);
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.week_extent(), None);
        assert_eq!(ds.max_value(), 0.0);
    }

    #[test]
    fn labels_follow_series_not_value() {
        // Two series share a value; each label must still name its own series.
        let avg = SeriesAverages {
            javascript: 43,
            python: 68,
            java: 43,
        };
        assert_eq!(avg.label(Series::JavaScript), "JavaScript: 43");
        assert_eq!(avg.label(Series::Java), "Java: 43");
        assert_eq!(
            avg.entries(),
            [(Series::JavaScript, 43), (Series::Python, 68), (Series::Java, 43)]
        );
    }
}
