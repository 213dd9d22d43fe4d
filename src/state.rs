use std::path::Path;

use crate::data::loader::load_file;
use crate::data::model::{Dataset, SeriesAverages};
use crate::data::stats::series_averages;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering. Renderers receive it
/// by reference; there is no global dataset.
#[derive(Debug, Default)]
pub struct AppState {
    /// Loaded dataset (None when the initial load failed).
    pub dataset: Option<Dataset>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Perform the one-off initial load. Failure is logged and leaves the
    /// dataset empty; it is never retried.
    pub fn load(path: &Path) -> Self {
        let mut state = AppState::default();
        match load_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {} weeks from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("error loading data from {}: {e:#}", path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
        state
    }

    /// Ingest a newly loaded dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Per-series averages of the current dataset, computed afresh.
    pub fn averages(&self) -> Option<SeriesAverages> {
        series_averages(self.dataset.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_load_sets_dataset_and_averages() {
        let path = std::env::temp_dir().join(format!(
            "lang-trends-{}-state.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[
                {"Week": "2021-06-06", "javascript": 10, "python": 60, "java": 40},
                {"Week": "2021-06-13", "javascript": 20, "python": 70, "java": 45},
                {"Week": "2021-06-20", "javascript": 30, "python": 74, "java": 44}
            ]"#,
        )
        .unwrap();
        let state = AppState::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(state.dataset.as_ref().map(Dataset::len), Some(3));
        assert!(state.status_message.is_none());
        let avg = state.averages().unwrap();
        assert_eq!(avg.label(crate::data::model::Series::JavaScript), "JavaScript: 20");
        assert_eq!(avg.python, 68);
        assert_eq!(avg.java, 43);
    }

    #[test]
    fn failed_load_leaves_no_dataset() {
        let state = AppState::load(Path::new("does/not/exist.json"));
        assert!(state.dataset.is_none());
        assert!(state.averages().is_none());
        let msg = state.status_message.unwrap();
        assert!(msg.starts_with("Error:"));
    }
}
