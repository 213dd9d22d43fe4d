use std::f32::consts::TAU;

use eframe::egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2};

use crate::chart::scene::clock_point;
use crate::chart::{Mark, Scene};
use crate::color::highlight;

/// Lightness added to the primitive under the pointer.
pub const HIGHLIGHT: f32 = 0.15;
/// Maximum angle covered by one polygon when tessellating a sector.
const ARC_STEP: f32 = TAU / 180.0;

// ---------------------------------------------------------------------------
// Scene painting
// ---------------------------------------------------------------------------

/// Paint `scene` with its local origin at `origin` (screen coordinates).
/// `hovered` is the primitive under the pointer, drawn highlighted.
pub fn paint_scene(painter: &Painter, origin: Vec2, scene: &Scene, hovered: Option<usize>) {
    for (i, prim) in scene.primitives.iter().enumerate() {
        let lit = hovered == Some(i);
        paint_mark(painter, origin, &prim.mark, lit);
    }
}

fn paint_mark(painter: &Painter, origin: Vec2, mark: &Mark, lit: bool) {
    let tint = |c| if lit { highlight(c, HIGHLIGHT) } else { c };
    match mark {
        Mark::Sector {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill,
            stroke,
            stroke_width,
        } => {
            let span = end_angle - start_angle;
            if span <= 0.0 || *outer_radius <= 0.0 {
                return;
            }
            let c = *center + origin;
            let steps = ((span / ARC_STEP).ceil() as usize).max(2);
            let angles: Vec<f32> = (0..=steps)
                .map(|i| start_angle + span * i as f32 / steps as f32)
                .collect();
            let outer: Vec<Pos2> = angles
                .iter()
                .map(|&a| clock_point(c, *outer_radius, a))
                .collect();
            let inner: Vec<Pos2> = angles
                .iter()
                .map(|&a| clock_point(c, *inner_radius, a))
                .collect();

            let fill = tint(*fill);
            for i in 0..steps {
                painter.add(Shape::convex_polygon(
                    vec![inner[i], outer[i], outer[i + 1], inner[i + 1]],
                    fill,
                    Stroke::NONE,
                ));
            }
            let outline: Vec<Pos2> = outer.iter().chain(inner.iter().rev()).copied().collect();
            painter.add(Shape::closed_line(outline, Stroke::new(*stroke_width, *stroke)));
        }
        Mark::Label {
            pos,
            text,
            anchor,
            color,
            size,
        } => {
            painter.text(
                *pos + origin,
                *anchor,
                text,
                FontId::proportional(*size),
                *color,
            );
        }
    }
}

/// Paint a plain heading at the top-left of `at`.
pub fn paint_title(painter: &Painter, at: Pos2, text: &str, size: f32, color: Color32) {
    painter.text(
        pos2(at.x + 4.0, at.y + 2.0),
        Align2::LEFT_TOP,
        text,
        FontId::proportional(size),
        color,
    );
}
