use chrono::{Datelike, NaiveDate};

use crate::data::loader::WEEK_FORMAT;
use crate::data::model::{Dataset, Series};

pub const MARKER_RADIUS: f32 = 1.5;
pub const LINE_WIDTH: f32 = 2.0;
/// Time-axis label format.
pub const AXIS_DATE_FORMAT: &str = "%b %Y";

// ---------------------------------------------------------------------------
// Plot coordinates
// ---------------------------------------------------------------------------

/// X coordinate of a week: days since 0001-01-01.
pub fn day_value(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`day_value`], rounded to the nearest day.
pub fn date_from_value(v: f64) -> Option<NaiveDate> {
    if !v.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(v.round() as i32)
}

/// Text for a grid mark on the time axis.
pub fn axis_label(v: f64) -> String {
    date_from_value(v)
        .map(|d| d.format(AXIS_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scatter data: one line + one marker set per series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoints {
    pub series: Series,
    /// `[day_value(week), value]`, in record order.
    pub points: Vec<[f64; 2]>,
}

/// What the pointer is over in the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterHit {
    Line(Series),
    Marker { series: Series, index: usize },
}

/// Everything the scatter plot draws, independent of the container size.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    pub weeks: Vec<NaiveDate>,
    pub series: Vec<SeriesPoints>,
    /// First and last week on the x axis.
    pub x_range: Option<(f64, f64)>,
    pub y_max: f64,
}

pub fn build(dataset: &Dataset) -> ScatterData {
    let weeks: Vec<NaiveDate> = dataset.records.iter().map(|r| r.week).collect();
    let series = Series::ALL
        .into_iter()
        .map(|series| SeriesPoints {
            series,
            points: dataset
                .records
                .iter()
                .map(|r| [day_value(r.week), r.value(series)])
                .collect(),
        })
        .collect();

    ScatterData {
        weeks,
        series,
        x_range: dataset
            .week_extent()
            .map(|(first, last)| (day_value(first), day_value(last))),
        y_max: dataset.max_value(),
    }
}

impl ScatterData {
    /// The value axis always starts at zero.
    pub fn y_bounds(&self) -> (f64, f64) {
        (0.0, self.y_max)
    }

    pub fn points(&self, series: Series) -> &[[f64; 2]] {
        self.series
            .iter()
            .find(|sp| sp.series == series)
            .map(|sp| sp.points.as_slice())
            .unwrap_or(&[])
    }

    /// Marker of `series` closest to `x` along the time axis.
    pub fn nearest_marker(&self, series: Series, x: f64) -> Option<usize> {
        self.points(series)
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a[0] - x).abs().total_cmp(&(b[0] - x).abs()))
            .map(|(i, _)| i)
    }

    /// Lines, then one marker per week per series.
    pub fn element_count(&self) -> usize {
        Series::ALL.len() * (1 + self.weeks.len())
    }

    /// Flat element index: lines first, then the markers series by series.
    pub fn target(&self, hit: ScatterHit) -> usize {
        match hit {
            ScatterHit::Line(series) => series.index(),
            ScatterHit::Marker { series, index } => {
                Series::ALL.len() + series.index() * self.weeks.len() + index
            }
        }
    }

    /// Inverse of [`ScatterData::target`].
    pub fn hit(&self, target: usize) -> Option<ScatterHit> {
        let lines = Series::ALL.len();
        if target < lines {
            return Some(ScatterHit::Line(Series::ALL[target]));
        }
        let n = self.weeks.len();
        if n == 0 || target >= self.element_count() {
            return None;
        }
        let marker = target - lines;
        Some(ScatterHit::Marker {
            series: Series::ALL[marker / n],
            index: marker % n,
        })
    }

    /// Tooltip text: the series name on a line, name, value and week on a
    /// marker.
    pub fn hover_text(&self, hit: ScatterHit) -> Option<String> {
        match hit {
            ScatterHit::Line(series) => Some(series.name().to_string()),
            ScatterHit::Marker { series, index } => {
                let [_, value] = *self.points(series).get(index)?;
                let week = self.weeks.get(index)?;
                Some(format!(
                    "{}\n{}\n{}",
                    series.name(),
                    value,
                    week.format(WEEK_FORMAT)
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn week(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, d).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            Record::new(week(6), 15.0, 60.0, 40.0),
            Record::new(week(13), 20.0, 70.0, 45.0),
            Record::new(week(20), 25.0, 74.0, 44.0),
        ])
    }

    #[test]
    fn one_point_set_per_series() {
        let data = build(&sample());
        let order: Vec<Series> = data.series.iter().map(|sp| sp.series).collect();
        assert_eq!(order, Series::ALL.to_vec());
        assert!(data.series.iter().all(|sp| sp.points.len() == 3));
        assert_eq!(data.element_count(), 3 + 9);

        let python = data.points(Series::Python);
        assert_eq!(python[2], [day_value(week(20)), 74.0]);
        assert_eq!(python[1][0] - python[0][0], 7.0);
    }

    #[test]
    fn bounds_run_from_zero_to_max_and_span_the_weeks() {
        let data = build(&sample());
        assert_eq!(data.y_bounds(), (0.0, 74.0));
        assert_eq!(
            data.x_range,
            Some((day_value(week(6)), day_value(week(20))))
        );
    }

    #[test]
    fn day_values_round_trip_to_axis_labels() {
        let v = day_value(week(13));
        assert_eq!(date_from_value(v + 0.3), Some(week(13)));
        assert_eq!(axis_label(v), "Jun 2021");
        assert_eq!(axis_label(f64::NAN), "");
        assert_eq!(axis_label(1e12), "");
    }

    #[test]
    fn nearest_marker_follows_the_time_axis() {
        let data = build(&sample());
        let x = day_value(week(13));
        assert_eq!(data.nearest_marker(Series::Java, x - 3.0), Some(1));
        assert_eq!(data.nearest_marker(Series::Java, x + 4.0), Some(2));
        assert_eq!(data.nearest_marker(Series::Java, 0.0), Some(0));
        assert_eq!(build(&Dataset::default()).nearest_marker(Series::Java, x), None);
    }

    #[test]
    fn targets_are_unique_and_invertible() {
        let data = build(&sample());
        let mut seen = Vec::new();
        for target in 0..data.element_count() {
            let hit = data.hit(target).unwrap();
            assert_eq!(data.target(hit), target);
            seen.push(hit);
        }
        assert_eq!(seen[1], ScatterHit::Line(Series::Python));
        assert_eq!(
            seen[3 + 3 + 2],
            ScatterHit::Marker {
                series: Series::Python,
                index: 2
            }
        );
        assert_eq!(data.hit(data.element_count()), None);
    }

    #[test]
    fn marker_tooltips_carry_value_and_date() {
        let data = build(&sample());
        let marker = |series, index| ScatterHit::Marker { series, index };
        assert_eq!(
            data.hover_text(marker(Series::JavaScript, 1)).as_deref(),
            Some("JavaScript\n20\n2021-06-13")
        );
        assert_eq!(
            data.hover_text(marker(Series::Java, 2)).as_deref(),
            Some("Java\n44\n2021-06-20")
        );
        assert_eq!(
            data.hover_text(ScatterHit::Line(Series::JavaScript)).as_deref(),
            Some("JavaScript")
        );
        assert_eq!(data.hover_text(marker(Series::Java, 7)), None);
    }

    #[test]
    fn empty_dataset_has_no_markers() {
        let data = build(&Dataset::default());
        assert_eq!(data.x_range, None);
        assert_eq!(data.y_bounds(), (0.0, 0.0));
        assert_eq!(data.element_count(), 3);
        assert_eq!(data.hit(3), None);
    }
}
