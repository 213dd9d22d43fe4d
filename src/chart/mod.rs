//! Chart builders: pure functions from data (and, for the donut, the
//! container size) to what a container shows.
//!
//! Nothing in here touches egui state. The `ui` module hands scatter and
//! histogram data to `egui_plot`, paints scenes itself, and routes pointer
//! hover back to a flat element index per container.

pub mod histogram;
pub mod info;
pub mod pie;
pub mod scatter;
pub mod scene;

use eframe::egui::{pos2, Align2, Vec2};

use histogram::HistogramData;
use scatter::ScatterData;
pub use scene::{Mark, Scene};

use crate::color;

/// One child of a chart container.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Scatter(ScatterData),
    Histogram(HistogramData),
    /// Painter-drawn: the donut and the placeholder.
    Scene(Scene),
}

impl ChartView {
    /// Number of drawn elements; hover targets index into them.
    pub fn element_count(&self) -> usize {
        match self {
            ChartView::Scatter(data) => data.element_count(),
            ChartView::Histogram(data) => data.bars.len(),
            ChartView::Scene(scene) => scene.len(),
        }
    }

    /// Tooltip text of element `target`, if it has one.
    pub fn hover_text(&self, target: usize) -> Option<String> {
        match self {
            ChartView::Scatter(data) => data.hover_text(data.hit(target)?),
            ChartView::Histogram(data) => data.bars.get(target).map(|b| b.label.clone()),
            ChartView::Scene(scene) => scene.hover_text(target).map(str::to_string),
        }
    }
}

/// Scene shown in a chart container when there is nothing to plot.
pub fn placeholder(size: Vec2) -> Scene {
    let mut scene = Scene::new(size);
    scene.push(Mark::Label {
        pos: pos2(size.x / 2.0, size.y / 2.0),
        text: "No data loaded".to_string(),
        anchor: Align2::CENTER_CENTER,
        color: color::TEXT,
        size: 14.0,
    });
    scene
}
