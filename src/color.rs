use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// CSS `red`.
pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
/// CSS `blue`.
pub const BLUE: Color32 = Color32::from_rgb(0, 0, 255);
/// CSS `green` (not the full-intensity `lime`).
pub const GREEN: Color32 = Color32::from_rgb(0, 128, 0);

pub const OUTLINE: Color32 = Color32::BLACK;
pub const AXIS: Color32 = Color32::from_gray(60);
pub const GRID: Color32 = Color32::from_gray(220);
pub const TEXT: Color32 = Color32::from_gray(30);

/// Colour of a series, identical across all charts.
pub fn series_color(series: Series) -> Color32 {
    match series {
        Series::JavaScript => RED,
        Series::Python => BLUE,
        Series::Java => GREEN,
    }
}

// ---------------------------------------------------------------------------
// Hover highlight
// ---------------------------------------------------------------------------

/// Lighten a colour in HSL space, used for the mark under the pointer.
pub fn highlight(color: Color32, amount: f32) -> Color32 {
    let rgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + amount).clamp(0.0, 1.0);
    let out: Srgb = hsl.into_color();
    Color32::from_rgba_unmultiplied(
        (out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        color.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_has_a_distinct_color() {
        let colors: Vec<_> = Series::ALL.iter().map(|&s| series_color(s)).collect();
        assert_eq!(colors, vec![RED, BLUE, GREEN]);
    }

    #[test]
    fn highlight_lightens_but_keeps_hue() {
        let light = highlight(RED, 0.2);
        assert_eq!(light.r(), 255);
        assert!(light.g() > 0 && light.g() == light.b());
        assert_eq!(highlight(Color32::WHITE, 0.2), Color32::WHITE);
    }
}
