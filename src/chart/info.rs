use crate::data::model::SeriesAverages;

pub const HEADING: &str = "Info";
pub const DESCRIPTION: &str =
    "Average value of interest over duration of three years for three languages:";

/// Text content of the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub heading: String,
    pub description: String,
    pub items: Vec<String>,
}

/// One `"<Series>: <average>"` line per series, in series order.
pub fn build(averages: Option<&SeriesAverages>) -> InfoPanel {
    match averages {
        Some(avg) => InfoPanel {
            heading: HEADING.to_string(),
            description: DESCRIPTION.to_string(),
            items: avg.entries().iter().map(|&(s, _)| avg.label(s)).collect(),
        },
        None => InfoPanel {
            heading: HEADING.to_string(),
            description: "No data loaded.".to_string(),
            items: Vec::new(),
        },
    }
}
