use crate::data::model::{Series, SeriesAverages};

/// Bar width in category units; the remaining 0.1 is the band padding.
pub const BAR_WIDTH: f64 = 0.9;
pub const STROKE_WIDTH: f32 = 3.0;

// ---------------------------------------------------------------------------
// Bar chart of the series averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub series: Series,
    /// Category position on the x axis (0, 1, 2).
    pub position: f64,
    pub value: f64,
    /// Tooltip text, e.g. `Python: 68`.
    pub label: String,
}

impl BarSpec {
    /// Whether the plot point `(x, y)` lies inside the bar.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.position).abs() <= BAR_WIDTH / 2.0 && y >= 0.0 && y <= self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    pub bars: Vec<BarSpec>,
    pub y_max: f64,
}

pub fn build(averages: &SeriesAverages) -> HistogramData {
    let bars = averages
        .entries()
        .into_iter()
        .map(|(series, value)| BarSpec {
            series,
            position: series.index() as f64,
            value: value as f64,
            label: averages.label(series),
        })
        .collect();
    HistogramData {
        bars,
        y_max: averages.max() as f64,
    }
}

impl HistogramData {
    pub fn y_bounds(&self) -> (f64, f64) {
        (0.0, self.y_max)
    }

    /// Left and right edge of the category axis.
    pub fn x_bounds(&self) -> (f64, f64) {
        (-0.5, self.bars.len() as f64 - 0.5)
    }

    /// Index of the bar under the plot point `(x, y)`.
    pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
        self.bars.iter().position(|bar| bar.contains(x, y))
    }
}

/// Category name for a grid mark; marks between categories get none.
pub fn category_label(x: f64) -> Option<&'static str> {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return None;
    }
    Series::ALL.get(i as usize).map(|s| s.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages() -> SeriesAverages {
        SeriesAverages {
            javascript: 20,
            python: 68,
            java: 43,
        }
    }

    #[test]
    fn one_bar_per_series_in_order() {
        let data = build(&averages());
        let values: Vec<f64> = data.bars.iter().map(|b| b.value).collect();
        let positions: Vec<f64> = data.bars.iter().map(|b| b.position).collect();
        let labels: Vec<&str> = data.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(values, vec![20.0, 68.0, 43.0]);
        assert_eq!(positions, vec![0.0, 1.0, 2.0]);
        assert_eq!(labels, vec!["JavaScript: 20", "Python: 68", "Java: 43"]);
    }

    #[test]
    fn value_axis_runs_from_zero_to_the_largest_average() {
        let data = build(&averages());
        assert_eq!(data.y_bounds(), (0.0, 68.0));
        assert_eq!(data.x_bounds(), (-0.5, 2.5));

        let zero = build(&SeriesAverages {
            javascript: 0,
            python: 0,
            java: 0,
        });
        assert_eq!(zero.y_bounds(), (0.0, 0.0));
    }

    #[test]
    fn bars_are_hit_inside_their_band_only() {
        let data = build(&averages());
        assert_eq!(data.bar_at(1.0, 60.0), Some(1));
        assert_eq!(data.bar_at(1.44, 1.0), Some(1));
        assert_eq!(data.bar_at(0.0, 25.0), None); // above the bar
        assert_eq!(data.bar_at(1.5, 10.0), None); // in the padding
        assert_eq!(data.bar_at(2.0, -1.0), None);
    }

    #[test]
    fn categories_are_labelled_with_series_names() {
        assert_eq!(category_label(0.0), Some("JavaScript"));
        assert_eq!(category_label(2.0), Some("Java"));
        assert_eq!(category_label(0.5), None);
        assert_eq!(category_label(3.0), None);
        assert_eq!(category_label(-1.0), None);
    }
}
