use eframe::egui::{pos2, vec2, Rect, Vec2};

use crate::chart::{self, histogram, info, info::InfoPanel, pie, scatter, ChartView};
use crate::state::AppState;
use crate::tooltip::TooltipSlot;

/// Height of the title strip above each container.
pub const TITLE_HEIGHT: f32 = 24.0;
/// Gap between neighbouring areas.
pub const SPACING: f32 = 8.0;
/// Share of the height given to the scatter area.
const SCATTER_SHARE: f32 = 0.6;

// ---------------------------------------------------------------------------
// Screen regions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Scatter,
    Pie,
    Info,
    Histogram,
}

impl ContainerId {
    pub fn title(self) -> &'static str {
        match self {
            ContainerId::Scatter => "Scatter Plot",
            ContainerId::Pie => "Pie Chart",
            ContainerId::Info => "Info",
            ContainerId::Histogram => "Histogram",
        }
    }
}

/// One titled area of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub title: Rect,
    /// Where the chart is drawn; its size is what the renderers see.
    pub body: Rect,
}

impl Region {
    fn split(area: Rect, titled: bool) -> Self {
        let title_h = if titled { TITLE_HEIGHT.min(area.height()) } else { 0.0 };
        let (title, body) = area.split_top_bottom_at_y(area.top() + title_h);
        Region { title, body }
    }
}

/// The four areas: scatter on top, pie | info | histogram below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regions {
    pub scatter: Region,
    pub pie: Region,
    pub info: Region,
    pub histogram: Region,
}

impl Regions {
    pub fn new(screen: Rect) -> Self {
        let top_h = ((screen.height() - SPACING) * SCATTER_SHARE).max(0.0);
        let top = Rect::from_min_size(screen.min, vec2(screen.width(), top_h));
        let bottom = Rect::from_min_max(
            pos2(screen.left(), (top.bottom() + SPACING).min(screen.bottom())),
            screen.max,
        );
        let col_w = ((bottom.width() - 2.0 * SPACING) / 3.0).max(0.0);
        let column = |i: usize| {
            let left = bottom.left() + i as f32 * (col_w + SPACING);
            Rect::from_min_size(pos2(left, bottom.top()), vec2(col_w, bottom.height()))
        };

        Regions {
            scatter: Region::split(top, true),
            pie: Region::split(column(0), true),
            // The info panel brings its own heading.
            info: Region::split(column(1), false),
            histogram: Region::split(column(2), true),
        }
    }

    pub fn get(&self, id: ContainerId) -> &Region {
        match id {
            ContainerId::Scatter => &self.scatter,
            ContainerId::Pie => &self.pie,
            ContainerId::Info => &self.info,
            ContainerId::Histogram => &self.histogram,
        }
    }

    /// Sizes of the three chart containers.
    pub fn chart_sizes(&self) -> ChartSizes {
        ChartSizes {
            scatter: self.scatter.body.size(),
            pie: self.pie.body.size(),
            histogram: self.histogram.body.size(),
        }
    }
}

/// Sizes the chart renderers were last built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSizes {
    pub scatter: Vec2,
    pub pie: Vec2,
    pub histogram: Vec2,
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// A chart container: the views appended to it plus its tooltip slot.
#[derive(Debug)]
pub struct Container {
    pub id: ContainerId,
    pub children: Vec<ChartView>,
    pub tooltip: TooltipSlot,
}

impl Container {
    fn new(id: ContainerId) -> Self {
        Container {
            id,
            children: Vec::new(),
            tooltip: TooltipSlot::default(),
        }
    }

    /// Remove every child, including a visible tooltip.
    pub fn clear(&mut self) {
        self.children.clear();
        self.tooltip.clear();
    }

    pub fn append(&mut self, view: ChartView) {
        self.children.push(view);
    }

    /// Total number of drawn elements across all children.
    pub fn child_count(&self) -> usize {
        self.children.iter().map(ChartView::element_count).sum()
    }
}

// ---------------------------------------------------------------------------
// Layout controller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing rendered yet.
    Initial,
    /// All components rendered; watching for size changes.
    Ready,
}

/// Owns the rendered containers and decides when they are rebuilt.
#[derive(Debug)]
pub struct LayoutController {
    phase: Phase,
    pub scatter: Container,
    pub pie: Container,
    pub histogram: Container,
    pub info: Option<InfoPanel>,
    built_for: Option<ChartSizes>,
    info_renders: usize,
    rebuilds: usize,
}

impl Default for LayoutController {
    fn default() -> Self {
        Self {
            phase: Phase::Initial,
            scatter: Container::new(ContainerId::Scatter),
            pie: Container::new(ContainerId::Pie),
            histogram: Container::new(ContainerId::Histogram),
            info: None,
            built_for: None,
            info_renders: 0,
            rebuilds: 0,
        }
    }
}

impl LayoutController {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How many times the info panel has been rendered.
    pub fn info_renders(&self) -> usize {
        self.info_renders
    }

    /// How many resize rebuilds have happened.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Called once per frame with the current container sizes.
    pub fn observe(&mut self, state: &AppState, sizes: ChartSizes) {
        match self.phase {
            Phase::Initial => self.initial(state, sizes),
            Phase::Ready if self.built_for != Some(sizes) => self.resize(state, sizes),
            Phase::Ready => {}
        }
    }

    /// First render of all four components.
    pub fn initial(&mut self, state: &AppState, sizes: ChartSizes) {
        self.render_charts(state, sizes);
        self.info = Some(info::build(state.averages().as_ref()));
        self.info_renders += 1;
        self.phase = Phase::Ready;
    }

    /// Tear down and rebuild the three chart containers. The info panel is
    /// left as it is.
    pub fn resize(&mut self, state: &AppState, sizes: ChartSizes) {
        for container in self.charts_mut() {
            container.clear();
        }
        self.render_charts(state, sizes);
        self.rebuilds += 1;
        log::debug!(
            "rebuild #{}: scatter {:?}, pie {:?}, histogram {:?}",
            self.rebuilds,
            sizes.scatter,
            sizes.pie,
            sizes.histogram
        );
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        match id {
            ContainerId::Scatter => Some(&mut self.scatter),
            ContainerId::Pie => Some(&mut self.pie),
            ContainerId::Histogram => Some(&mut self.histogram),
            ContainerId::Info => None,
        }
    }

    fn charts_mut(&mut self) -> [&mut Container; 3] {
        [&mut self.scatter, &mut self.pie, &mut self.histogram]
    }

    fn render_charts(&mut self, state: &AppState, sizes: ChartSizes) {
        self.scatter.append(match &state.dataset {
            Some(ds) => ChartView::Scatter(scatter::build(ds)),
            None => ChartView::Scene(chart::placeholder(sizes.scatter)),
        });

        let averages = state.averages();
        self.pie.append(ChartView::Scene(match &averages {
            Some(avg) => pie::build(avg, sizes.pie),
            None => chart::placeholder(sizes.pie),
        }));
        self.histogram.append(match &averages {
            Some(avg) => ChartView::Histogram(histogram::build(avg)),
            None => ChartView::Scene(chart::placeholder(sizes.histogram)),
        });

        self.built_for = Some(sizes);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::chart::Mark;
    use crate::data::model::{Dataset, Record};

    fn state() -> AppState {
        let week = |d| NaiveDate::from_ymd_opt(2021, 6, d).unwrap();
        let mut state = AppState::default();
        state.set_dataset(Dataset::new(vec![
            Record::new(week(6), 15.0, 60.0, 40.0),
            Record::new(week(13), 20.0, 70.0, 45.0),
            Record::new(week(20), 25.0, 74.0, 44.0),
        ]));
        state
    }

    fn sizes(w: f32) -> ChartSizes {
        ChartSizes {
            scatter: vec2(w, 400.0),
            pie: vec2(w / 3.0, 250.0),
            histogram: vec2(w / 3.0, 250.0),
        }
    }

    fn counts(layout: &LayoutController) -> [usize; 3] {
        [
            layout.scatter.child_count(),
            layout.pie.child_count(),
            layout.histogram.child_count(),
        ]
    }

    #[test]
    fn first_frame_renders_everything_once() {
        let state = state();
        let mut layout = LayoutController::default();
        assert_eq!(layout.phase(), Phase::Initial);

        layout.observe(&state, sizes(900.0));
        assert_eq!(layout.phase(), Phase::Ready);
        assert_eq!(layout.info_renders(), 1);
        assert_eq!(layout.rebuilds(), 0);
        assert_eq!(layout.scatter.children.len(), 1);

        // Same size again: nothing happens.
        layout.observe(&state, sizes(900.0));
        assert_eq!(layout.rebuilds(), 0);
    }

    #[test]
    fn resize_is_idempotent() {
        let state = state();
        let mut layout = LayoutController::default();
        layout.initial(&state, sizes(900.0));
        let baseline = counts(&layout);
        let view = layout.pie.children[0].clone();

        for _ in 0..5 {
            layout.resize(&state, sizes(900.0));
            assert_eq!(counts(&layout), baseline);
            assert_eq!(layout.scatter.children.len(), 1);
            assert_eq!(layout.pie.children[0], view);
        }
        assert_eq!(layout.rebuilds(), 5);
    }

    #[test]
    fn size_change_rebuilds_charts_but_not_info() {
        let state = state();
        let mut layout = LayoutController::default();
        layout.observe(&state, sizes(900.0));
        let info = layout.info.clone();
        layout.pie.tooltip.show(0, "JavaScript: 20", pos2(1.0, 1.0));

        layout.observe(&state, sizes(600.0));
        layout.observe(&state, sizes(1200.0));
        assert_eq!(layout.rebuilds(), 2);
        assert_eq!(layout.info_renders(), 1);
        assert_eq!(layout.info, info);
        assert!(layout.pie.tooltip.current().is_none());
        let ChartView::Scene(pie) = &layout.pie.children[0] else {
            panic!("pie is not a scene");
        };
        assert_eq!(pie.size, vec2(400.0, 250.0));
        assert!(matches!(layout.scatter.children[0], ChartView::Scatter(_)));
    }

    #[test]
    fn charts_and_info_agree_on_averages() {
        let state = state();
        let mut layout = LayoutController::default();
        layout.observe(&state, sizes(900.0));

        let hovers = |c: &Container| -> Vec<String> {
            let view = &c.children[0];
            (0..view.element_count())
                .filter_map(|i| view.hover_text(i))
                .collect()
        };
        let expected = vec!["JavaScript: 20", "Python: 68", "Java: 43"];
        assert_eq!(hovers(&layout.pie), expected);
        assert_eq!(hovers(&layout.histogram), expected);
        assert_eq!(layout.info.unwrap().items, expected);
    }

    #[test]
    fn missing_data_renders_placeholders() {
        let state = AppState::default();
        let mut layout = LayoutController::default();
        layout.observe(&state, sizes(900.0));
        for c in [&layout.scatter, &layout.pie, &layout.histogram] {
            assert_eq!(c.child_count(), 1);
            let ChartView::Scene(scene) = &c.children[0] else {
                panic!("{:?} is not a placeholder", c.id);
            };
            assert!(matches!(scene.primitives[0].mark, Mark::Label { .. }));
        }
        assert!(layout.info.unwrap().items.is_empty());
    }

    #[test]
    fn regions_tile_the_screen() {
        let screen = Rect::from_min_size(pos2(0.0, 0.0), vec2(1208.0, 808.0));
        let r = Regions::new(screen);
        assert_eq!(r.scatter.body.top(), TITLE_HEIGHT);
        assert!((r.scatter.body.bottom() - 480.0).abs() < 1e-3);
        assert!((r.pie.body.width() - 397.333).abs() < 1e-2);
        assert!(r.pie.body.right() < r.info.body.left());
        assert!(r.info.body.right() < r.histogram.body.left());
        assert!((r.histogram.body.right() - 1208.0).abs() < 1e-3);
        assert_eq!(r.info.title.height(), 0.0);
        assert_eq!(r.get(ContainerId::Pie), &r.pie);
    }
}
