use super::model::{Dataset, SeriesAverages};

/// Mean of every series across the dataset, rounded half-up.
///
/// Returns `None` when there is nothing to average: no dataset was loaded,
/// or the loaded dataset has no records. Recomputed on every call.
pub fn series_averages(dataset: Option<&Dataset>) -> Option<SeriesAverages> {
    let dataset = dataset.filter(|ds| !ds.is_empty())?;

    let (js, py, ja) = dataset
        .records
        .iter()
        .fold((0.0, 0.0, 0.0), |(js, py, ja), r| {
            (js + r.javascript, py + r.python, ja + r.java)
        });
    let n = dataset.len() as f64;

    Some(SeriesAverages {
        javascript: round_half_up(js / n),
        python: round_half_up(py / n),
        java: round_half_up(ja / n),
    })
}

/// Round to the nearest integer, ties towards positive infinity.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}
