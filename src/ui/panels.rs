use eframe::egui::{pos2, Color32, FontId, Rect, RichText, Ui};

use crate::chart::info::InfoPanel;
use crate::color;
use crate::state::AppState;

const HEADING_SIZE: f32 = 22.0;
const BODY_SIZE: f32 = 14.0;
const LINE_GAP: f32 = 6.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Search interest: JavaScript · Python · Java");
        ui.separator();

        if let Some(ds) = &state.dataset {
            match ds.week_extent() {
                Some((first, last)) => ui.label(format!(
                    "{} weeks, {} to {}",
                    ds.len(),
                    first.format("%Y-%m-%d"),
                    last.format("%Y-%m-%d")
                )),
                None => ui.label("dataset is empty"),
            };
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Info panel
// ---------------------------------------------------------------------------

/// Paint the info panel text into `rect`: heading, description, then a
/// bulleted list of averages.
pub fn info_panel(ui: &Ui, rect: Rect, panel: &InfoPanel) {
    let painter = ui.painter_at(rect);
    let wrap = (rect.width() - 8.0).max(1.0);
    let mut y = rect.top() + 2.0;

    let mut put = |text: String, size: f32, indent: f32| {
        let galley = painter.layout(text, FontId::proportional(size), color::TEXT, wrap - indent);
        let height = galley.size().y;
        painter.galley(pos2(rect.left() + 4.0 + indent, y), galley, color::TEXT);
        y += height + LINE_GAP;
    };

    put(panel.heading.clone(), HEADING_SIZE, 0.0);
    put(panel.description.clone(), BODY_SIZE, 0.0);
    for item in &panel.items {
        put(format!("• {item}"), BODY_SIZE, 12.0);
    }
}

