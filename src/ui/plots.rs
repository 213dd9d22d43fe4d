use eframe::egui::{Id, Rect, Stroke, Ui, UiBuilder};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints, Points};

use super::paint::HIGHLIGHT;
use crate::chart::histogram::{self, HistogramData, STROKE_WIDTH};
use crate::chart::scatter::{self, ScatterData, ScatterHit, LINE_WIDTH, MARKER_RADIUS};
use crate::color::{self, highlight, series_color};
use crate::data::model::Series;
use crate::tooltip::Hover;

/// Screen distance within which a marker wins over the line through it.
const MARKER_REACH: f32 = MARKER_RADIUS + 3.0;

fn line_id(series: Series) -> Id {
    Id::new(("scatter_line", series))
}

fn points_id(series: Series) -> Id {
    Id::new(("scatter_points", series))
}

fn bars_id() -> Id {
    Id::new("histogram_bars")
}

/// A non-interactive plot filling `rect`. Built-in hover labels are turned
/// off; the container tooltip replaces them.
fn fixed_plot(id: &str, rect: Rect) -> Plot {
    Plot::new(id)
        .width(rect.width())
        .height(rect.height())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .label_formatter(|_name, _value| String::new())
}

// ---------------------------------------------------------------------------
// Scatter plot: one line + one marker set per series
// ---------------------------------------------------------------------------

/// Draw the scatter plot into `rect`. `lit` is the element to highlight;
/// returns what the pointer is over.
pub fn scatter_plot(
    ui: &mut Ui,
    data: &ScatterData,
    rect: Rect,
    lit: Option<usize>,
) -> Option<Hover> {
    let (y_min, y_max) = data.y_bounds();
    let mut plot = fixed_plot("scatter_plot", rect)
        .x_axis_formatter(|mark, _range| scatter::axis_label(mark.value))
        .include_y(y_min)
        .include_y(y_max);
    if let Some((first, last)) = data.x_range {
        plot = plot.include_x(first).include_x(last);
    }

    let lit = lit.and_then(|t| data.hit(t));
    let scope = UiBuilder::new().max_rect(rect);
    let response = ui
        .scope_builder(scope, |ui: &mut Ui| {
            plot.show(ui, |plot_ui| {
                for sp in &data.series {
                    let base = series_color(sp.series);
                    let on_line = lit == Some(ScatterHit::Line(sp.series));
                    let (color, width) = if on_line {
                        (highlight(base, HIGHLIGHT), LINE_WIDTH * 1.5)
                    } else {
                        (base, LINE_WIDTH)
                    };
                    plot_ui.line(
                        Line::new(PlotPoints::new(sp.points.clone()))
                            .name(sp.series.name())
                            .color(color)
                            .width(width)
                            .id(line_id(sp.series)),
                    );
                }

                // Markers after all lines so they are drawn on top.
                for sp in &data.series {
                    plot_ui.points(
                        Points::new(PlotPoints::new(sp.points.clone()))
                            .name(sp.series.name())
                            .color(series_color(sp.series))
                            .filled(true)
                            .radius(MARKER_RADIUS)
                            .id(points_id(sp.series)),
                    );
                }

                if let Some(ScatterHit::Marker { series, index }) = lit {
                    if let Some(&point) = data.points(series).get(index) {
                        plot_ui.points(
                            Points::new(PlotPoints::new(vec![point]))
                                .color(highlight(series_color(series), HIGHLIGHT))
                                .filled(true)
                                .radius(MARKER_RADIUS * 2.0)
                                .id(points_id(series)),
                        );
                    }
                }
            })
        })
        .inner;

    let pointer = response.response.hover_pos()?;
    let item = response.hovered_plot_item?;
    let x = response.transform.value_from_position(pointer).x;

    let hit = Series::ALL.into_iter().find_map(|series| {
        let nearest = data.nearest_marker(series, x);
        let marker = |index| ScatterHit::Marker { series, index };
        if item == points_id(series) {
            nearest.map(marker)
        } else if item == line_id(series) {
            // Every vertex carries a marker; near one, the marker wins.
            let on_vertex = nearest.filter(|&i| {
                data.points(series).get(i).is_some_and(|&[px, py]| {
                    let at = response
                        .transform
                        .position_from_point(&PlotPoint::new(px, py));
                    at.distance(pointer) <= MARKER_REACH
                })
            });
            Some(on_vertex.map_or(ScatterHit::Line(series), marker))
        } else {
            None
        }
    })?;

    Some(Hover {
        target: data.target(hit),
        text: data.hover_text(hit)?,
        pointer,
    })
}

// ---------------------------------------------------------------------------
// Histogram: one bar per series average
// ---------------------------------------------------------------------------

/// Draw the histogram into `rect`. `lit` is the bar to highlight; returns
/// what the pointer is over.
pub fn histogram_plot(
    ui: &mut Ui,
    data: &HistogramData,
    rect: Rect,
    lit: Option<usize>,
) -> Option<Hover> {
    let (x_min, x_max) = data.x_bounds();
    let (y_min, y_max) = data.y_bounds();
    let plot = fixed_plot("histogram_plot", rect)
        .x_axis_formatter(|mark, _range| {
            histogram::category_label(mark.value)
                .unwrap_or_default()
                .to_string()
        })
        .include_x(x_min)
        .include_x(x_max)
        .include_y(y_min)
        .include_y(y_max);

    let bars: Vec<Bar> = data
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let base = series_color(bar.series);
            let fill = if lit == Some(i) {
                highlight(base, HIGHLIGHT)
            } else {
                base
            };
            Bar::new(bar.position, bar.value)
                .width(histogram::BAR_WIDTH)
                .fill(fill)
                .stroke(Stroke::new(STROKE_WIDTH, color::OUTLINE))
                .name(&bar.label)
        })
        .collect();

    let scope = UiBuilder::new().max_rect(rect);
    let response = ui
        .scope_builder(scope, |ui: &mut Ui| {
            plot.show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .element_formatter(Box::new(|_bar, _chart| String::new()))
                        .id(bars_id()),
                );
            })
        })
        .inner;

    let pointer = response.response.hover_pos()?;
    if response.hovered_plot_item != Some(bars_id()) {
        return None;
    }
    let value = response.transform.value_from_position(pointer);
    let target = data.bar_at(value.x, value.y)?;

    Some(Hover {
        target,
        text: data.bars[target].label.clone(),
        pointer,
    })
}
