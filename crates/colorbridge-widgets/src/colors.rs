//! Color swatches and conversions between bridge colors and egui colors.

use colorbridge_core::{CanonicalColor, RgbColor};
use egui::{vec2, Color32, CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{sizing, theme};

/// Convert a canonical color for painting.
pub fn to_color32(color: CanonicalColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.alpha_byte())
}

/// Convert an opaque picker color for painting.
pub fn rgb_to_color32(rgb: RgbColor) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Check if two colors match (for selection highlighting).
pub fn colors_match(a: RgbColor, b: RgbColor) -> bool {
    a == b
}

/// Style for color swatches.
#[derive(Clone)]
pub struct ColorSwatchStyle {
    /// Size of the swatch
    pub size: Vec2,
}

impl Default for ColorSwatchStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }
}

impl ColorSwatchStyle {
    /// Preset swatch (small, rounded rect)
    pub fn preset() -> Self {
        Self::default()
    }

    /// Wide preview of the current color
    pub fn preview(width: f32) -> Self {
        Self {
            size: vec2(width, sizing::PREVIEW_HEIGHT),
        }
    }
}

/// A clickable color swatch. An empty tooltip shows no hover text.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    style: ColorSwatchStyle,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            style: ColorSwatchStyle::default(),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the style.
    pub fn style(mut self, style: ColorSwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let corner = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, corner, self.color);
            ui.painter()
                .rect_stroke(rect, corner, Stroke::new(1.0, theme::BORDER), StrokeKind::Inside);

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    corner,
                    Stroke::new(2.0, theme::ACCENT),
                    StrokeKind::Inside,
                );
            }
        }

        let clicked = response.clicked();
        if !self.tooltip.is_empty() {
            response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        }
        (clicked, rect)
    }
}
