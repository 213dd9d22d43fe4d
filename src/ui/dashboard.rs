use eframe::egui::{self, Id, Order, Rect, Sense, Ui};

use super::paint::{paint_scene, paint_title};
use super::{panels, plots};
use crate::chart::{ChartView, Scene};
use crate::color;
use crate::layout::{Container, ContainerId, LayoutController, Region, Regions};
use crate::tooltip::Hover;

const TITLE_SIZE: f32 = 16.0;

/// Chart containers in paint order.
const CHARTS: [ContainerId; 3] = [
    ContainerId::Scatter,
    ContainerId::Pie,
    ContainerId::Histogram,
];

// ---------------------------------------------------------------------------
// Dashboard body (central panel)
// ---------------------------------------------------------------------------

/// Paint every container and route pointer hover to tooltips.
pub fn show(ui: &mut Ui, layout: &mut LayoutController, regions: &Regions) {
    for id in CHARTS {
        let region = regions.get(id);
        if let Some(container) = layout.container_mut(id) {
            chart_container(ui, container, region);
        }
    }

    if let Some(info) = &layout.info {
        panels::info_panel(ui, regions.info.body, info);
    }
}

fn chart_container(ui: &mut Ui, container: &mut Container, region: &Region) {
    paint_title(
        &ui.painter_at(region.title),
        region.title.min,
        container.id.title(),
        TITLE_SIZE,
        color::TEXT,
    );

    // Element targets are flat indices across all children. The highlight
    // follows the tooltip of the previous frame.
    let lit = container.tooltip.current().map(|t| t.target);
    let mut hover = None;
    let mut offset = 0;
    for (i, view) in container.children.iter().enumerate() {
        let count = view.element_count();
        let local = lit
            .filter(|&t| t >= offset && t < offset + count)
            .map(|t| t - offset);
        let found = match view {
            ChartView::Scatter(data) => plots::scatter_plot(ui, data, region.body, local),
            ChartView::Histogram(data) => plots::histogram_plot(ui, data, region.body, local),
            ChartView::Scene(scene) => {
                let id = Id::new(("chart", container.id, i));
                scene_view(ui, id, scene, region.body, local)
            }
        };
        if let Some(h) = found {
            hover = Some(Hover {
                target: offset + h.target,
                ..h
            });
        }
        offset += count;
    }

    container.tooltip.track(hover);
    let now = container.tooltip.current().map(|t| t.target);
    if now != lit {
        ui.ctx().request_repaint();
    }

    if let Some(tip) = container.tooltip.current() {
        egui::Area::new(Id::new(("tooltip", container.id)))
            .order(Order::Tooltip)
            .fixed_pos(tip.pos)
            .interactable(false)
            .show(ui.ctx(), |ui: &mut Ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                    ui.label(&tip.text);
                });
            });
    }
}

/// Paint a painter-drawn scene into `body` and hit-test the pointer
/// against it.
fn scene_view(
    ui: &mut Ui,
    id: Id,
    scene: &Scene,
    body: Rect,
    lit: Option<usize>,
) -> Option<Hover> {
    let response = ui.interact(body, id, Sense::hover());
    let origin = body.min.to_vec2();
    paint_scene(&ui.painter_at(body), origin, scene, lit);

    let pointer = response.hover_pos()?;
    let target = scene.hit_test(pointer - origin)?;
    let text = scene.hover_text(target)?.to_string();
    Some(Hover {
        target,
        text,
        pointer,
    })
}
