use std::f32::consts::TAU;

use eframe::egui::{Align2, Color32, Pos2, Vec2};

// ---------------------------------------------------------------------------
// Marks
// ---------------------------------------------------------------------------

/// A single drawable shape in container-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Annular sector. Angles are radians measured clockwise from 12 o'clock.
    Sector {
        center: Pos2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        fill: Color32,
        stroke: Color32,
        stroke_width: f32,
    },
    Label {
        pos: Pos2,
        text: String,
        anchor: Align2,
        color: Color32,
        size: f32,
    },
}

impl Mark {
    /// Whether `p` lies on the mark. Labels are never hit.
    pub fn contains(&self, p: Pos2) -> bool {
        match self {
            Mark::Sector {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                ..
            } => {
                let r = p.distance(*center);
                if r < *inner_radius || r > *outer_radius {
                    return false;
                }
                let angle = clock_angle(*center, p);
                angle >= *start_angle && angle <= *end_angle
            }
            Mark::Label { .. } => false,
        }
    }
}

/// Point on a circle at `angle` radians clockwise from 12 o'clock.
pub fn clock_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::new(angle.sin(), -angle.cos()) * radius
}

/// Angle of `p` around `center`, clockwise from 12 o'clock, in `[0, TAU)`.
pub fn clock_angle(center: Pos2, p: Pos2) -> f32 {
    let d = p - center;
    d.x.atan2(-d.y).rem_euclid(TAU)
}

// ---------------------------------------------------------------------------
// Scene – the rendered children of one container
// ---------------------------------------------------------------------------

/// A mark plus the tooltip text shown while the pointer is over it.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub mark: Mark,
    pub hover: Option<String>,
}

/// Everything one renderer produced for a container of a given size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub size: Vec2,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(size: Vec2) -> Self {
        Scene {
            size,
            primitives: Vec::new(),
        }
    }

    /// Add a decorative mark.
    pub fn push(&mut self, mark: Mark) {
        self.primitives.push(Primitive { mark, hover: None });
    }

    /// Add a mark that shows `hover` as a tooltip.
    pub fn push_hoverable(&mut self, mark: Mark, hover: impl Into<String>) {
        self.primitives.push(Primitive {
            mark,
            hover: Some(hover.into()),
        });
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Index of the top-most hoverable primitive under `p`. Later
    /// primitives are drawn on top, so they win.
    pub fn hit_test(&self, p: Pos2) -> Option<usize> {
        self.primitives
            .iter()
            .enumerate()
            .rev()
            .find(|(_, prim)| prim.hover.is_some() && prim.mark.contains(p))
            .map(|(i, _)| i)
    }

    /// Tooltip text of primitive `index`, if it has one.
    pub fn hover_text(&self, index: usize) -> Option<&str> {
        self.primitives.get(index)?.hover.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn clock_angles_run_clockwise_from_top() {
        let c = pos2(0.0, 0.0);
        assert!(clock_angle(c, pos2(0.0, -1.0)).abs() < 1e-5);
        assert!((clock_angle(c, pos2(1.0, 0.0)) - PI / 2.0).abs() < 1e-5);
        assert!((clock_angle(c, pos2(0.0, 1.0)) - PI).abs() < 1e-5);
        assert!((clock_angle(c, pos2(-1.0, 0.0)) - 1.5 * PI).abs() < 1e-5);
        let p = clock_point(c, 2.0, PI / 2.0);
        assert!((p.x - 2.0).abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn sector_hit_respects_ring_and_angle() {
        let sector = Mark::Sector {
            center: pos2(50.0, 50.0),
            inner_radius: 10.0,
            outer_radius: 30.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
            fill: Color32::RED,
            stroke: Color32::BLACK,
            stroke_width: 3.0,
        };
        assert!(sector.contains(pos2(65.0, 40.0)));
        assert!(!sector.contains(pos2(52.0, 48.0))); // inside the hole
        assert!(!sector.contains(pos2(35.0, 40.0))); // wrong quadrant
        assert!(!sector.contains(pos2(95.0, 50.0))); // outside
    }

    fn ring(start_angle: f32, end_angle: f32, fill: Color32) -> Mark {
        Mark::Sector {
            center: pos2(50.0, 50.0),
            inner_radius: 10.0,
            outer_radius: 30.0,
            start_angle,
            end_angle,
            fill,
            stroke: Color32::BLACK,
            stroke_width: 3.0,
        }
    }

    #[test]
    fn later_primitives_win_hit_test() {
        let mut scene = Scene::new(Vec2::new(100.0, 100.0));
        scene.push_hoverable(ring(0.0, PI, Color32::RED), "wide");
        scene.push_hoverable(ring(0.0, PI / 4.0, Color32::BLUE), "narrow");
        scene.push(Mark::Label {
            pos: pos2(60.0, 30.0),
            text: "decor".into(),
            anchor: Align2::CENTER_CENTER,
            color: Color32::BLACK,
            size: 12.0,
        });

        // Both sectors cover this point; the one pushed last wins.
        let hit = scene.hit_test(pos2(55.0, 30.0)).unwrap();
        assert_eq!(scene.hover_text(hit), Some("narrow"));
        let hit = scene.hit_test(pos2(70.0, 55.0)).unwrap();
        assert_eq!(scene.hover_text(hit), Some("wide"));
        assert_eq!(scene.hit_test(pos2(30.0, 55.0)), None);
        assert_eq!(scene.len(), 3);
    }
}
