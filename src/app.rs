use eframe::egui;

use crate::layout::{LayoutController, Regions};
use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LangTrendsApp {
    pub state: AppState,
    pub layout: LayoutController,
}

impl LangTrendsApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            layout: LayoutController::default(),
        }
    }
}

impl eframe::App for LangTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: charts ----
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let regions = Regions::new(ui.available_rect_before_wrap());
                self.layout.observe(&self.state, regions.chart_sizes());
                dashboard::show(ui, &mut self.layout, &regions);
            });
    }
}
