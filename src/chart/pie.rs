use std::f64::consts::TAU;

use eframe::egui::{pos2, Vec2};

use super::scene::{Mark, Scene};
use crate::color::{self, series_color};
use crate::data::model::SeriesAverages;

/// Angular gap between neighbouring slices, radians.
pub const PAD_ANGLE: f64 = 0.1;
pub const STROKE_WIDTH: f32 = 3.0;

/// Start and end angle of one slice, padding included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
    pub pad: f64,
}

impl SliceAngles {
    /// The visible part of the slice, with half the pad removed on each side.
    pub fn drawn(&self) -> (f64, f64) {
        let half = self.pad / 2.0;
        let start = self.start + half;
        let end = (self.end - half).max(start);
        (start, end)
    }
}

/// Lay out `values` around a full circle in the given order.
///
/// Every slice spans `value * k + pad` where `k` shares what is left of the
/// circle after padding in proportion to the values. Negative values get no
/// angle of their own.
pub fn layout(values: &[f64], pad_angle: f64) -> Vec<SliceAngles> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let pad = pad_angle.min(TAU / n as f64);
    let sum: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let k = if sum > 0.0 {
        (TAU - n as f64 * pad) / sum
    } else {
        0.0
    };

    let mut angle = 0.0;
    values
        .iter()
        .map(|&v| {
            let start = angle;
            angle += v.max(0.0) * k + pad;
            SliceAngles {
                start,
                end: angle,
                pad,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Donut chart of the series averages
// ---------------------------------------------------------------------------

/// Build the donut chart for a container of `size`. Slices follow series
/// order and are not sorted by value.
pub fn build(averages: &SeriesAverages, size: Vec2) -> Scene {
    let margin_top = 0.05 * size.y;
    let margin_right = 0.025 * size.x;
    let margin_bottom = 0.1 * size.y;
    let margin_left = 0.025 * size.x;
    let inner_width = (size.x - margin_left - margin_right).max(0.0);
    let inner_height = (size.y - margin_top - margin_bottom).max(0.0);

    // Leave room for the outline on both sides.
    let outer_radius = (inner_width.min(inner_height) / 2.0 - STROKE_WIDTH / 2.0).max(0.0);
    let inner_radius = outer_radius / 3.0;
    let center = pos2(inner_width / 2.0, inner_height / 2.0);

    let entries = averages.entries();
    let values: Vec<f64> = entries.iter().map(|&(_, v)| v as f64).collect();

    let mut scene = Scene::new(size);
    for (&(series, _), slice) in entries.iter().zip(layout(&values, PAD_ANGLE)) {
        let (start, end) = slice.drawn();
        scene.push_hoverable(
            Mark::Sector {
                center,
                inner_radius,
                outer_radius,
                start_angle: start as f32,
                end_angle: end as f32,
                fill: series_color(series),
                stroke: color::OUTLINE,
                stroke_width: STROKE_WIDTH,
            },
            averages.label(series),
        );
    }
    scene
}
