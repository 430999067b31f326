//! The color picker panel.
//!
//! The picker renders whatever canonical color it is given and reports
//! finished interactions as plain [`RgbColor`] values. It knows nothing about
//! formats; wire its output into `StateBridge::update`.

use colorbridge_core::serialize::to_hex_string;
use colorbridge_core::{CanonicalColor, RgbColor, StateBridge};
use egui::{vec2, DragValue, Id, Ui};

use crate::colors::{colors_match, rgb_to_color32, to_color32, ColorSwatch, ColorSwatchStyle};
use crate::layout::section_label;
use crate::tracker::ChangeTracker;
use crate::{menu, sizing};

/// Picker configuration.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Panel width in points.
    pub width: f32,
    /// Preset colors shown as a swatch row (none by default).
    pub presets: Vec<RgbColor>,
    /// Header label.
    pub title: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            presets: Vec::new(),
            title: "Color".to_string(),
        }
    }
}

/// A color picker bound to the current canonical color.
pub struct ColorPicker<'a> {
    color: CanonicalColor,
    config: &'a PickerConfig,
    id: Id,
}

impl<'a> ColorPicker<'a> {
    /// Create a picker showing `color`.
    pub fn new(color: CanonicalColor, config: &'a PickerConfig) -> Self {
        Self {
            color,
            config,
            id: Id::new("color_picker"),
        }
    }

    /// Use a distinct id when more than one picker is on screen.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    /// Show the picker. Returns a color once per completed interaction.
    pub fn show(self, ui: &mut Ui) -> Option<RgbColor> {
        let current = self.color.rgb();
        let mut tracker = ui
            .data_mut(|d| d.get_temp::<ChangeTracker>(self.id))
            .unwrap_or_else(|| ChangeTracker::new(current));
        tracker.sync(current);

        let mut completed = None;

        menu::panel_frame().show(ui, |ui| {
            ui.set_width(self.config.width);
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing = vec2(0.0, 6.0);
                section_label(ui, &self.config.title);

                // Preview keeps the bridge's alpha; edits never touch it.
                let shown = self.color.with_rgb(tracker.display());
                ColorSwatch::new(to_color32(shown), "")
                    .style(ColorSwatchStyle::preview(self.config.width))
                    .show(ui);

                completed = channel_editors(ui, &mut tracker).or(completed);

                if !self.config.presets.is_empty() {
                    completed = preset_row(ui, &self.config.presets, &mut tracker).or(completed);
                }
            });
        });

        if let Some(rgb) = completed {
            log::debug!("Picker change complete: {:?}", rgb);
        }
        ui.data_mut(|d| d.insert_temp(self.id, tracker));
        completed
    }
}

/// Render the picker for a bridge and feed completed interactions back.
///
/// The picker reads the bridge's state every frame, so pending notifications
/// are consumed as a repaint request. Returns whether the bridge changed.
pub fn bridge_picker(ui: &mut Ui, bridge: &mut StateBridge, config: &PickerConfig) -> bool {
    let notified = !bridge.poll_events().is_empty();

    let updated = match ColorPicker::new(bridge.color(), config).show(ui) {
        Some(rgb) => {
            bridge.update(rgb);
            // Our own update needs no second repaint.
            bridge.poll_events();
            true
        }
        None => false,
    };

    if notified || updated {
        ui.ctx().request_repaint();
    }
    notified || updated
}

/// R/G/B drag values. Dragging or typing edits; releasing or leaving the
/// field completes.
fn channel_editors(ui: &mut Ui, tracker: &mut ChangeTracker) -> Option<RgbColor> {
    let mut completed = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = vec2(8.0, 0.0);

        let shown = tracker.display();
        let mut channels = [shown.r, shown.g, shown.b];
        for (i, label) in ["R ", "G ", "B "].into_iter().enumerate() {
            let response = ui.add(
                DragValue::new(&mut channels[i])
                    .range(0..=255)
                    .speed(1.0)
                    .prefix(label),
            );

            if response.changed() {
                let [r, g, b] = channels;
                tracker.edit(RgbColor::new(r, g, b));
            }
            if response.drag_stopped() || response.lost_focus() {
                completed = tracker.complete().or(completed);
            }
        }
    });

    completed
}

fn preset_row(ui: &mut Ui, presets: &[RgbColor], tracker: &mut ChangeTracker) -> Option<RgbColor> {
    let mut completed = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(sizing::PRESET_GAP, sizing::PRESET_GAP);
        let current = tracker.display();
        for &preset in presets {
            let tooltip = preset_tooltip(preset);
            let (clicked, _) = ColorSwatch::new(rgb_to_color32(preset), &tooltip)
                .style(ColorSwatchStyle::preset())
                .selected(colors_match(current, preset))
                .show(ui);
            if clicked {
                completed = Some(tracker.commit(preset));
            }
        }
    });

    completed
}

/// Hover text for a preset swatch.
fn preset_tooltip(rgb: RgbColor) -> String {
    to_hex_string(&CanonicalColor::BLACK.with_rgb(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_tooltip() {
        assert_eq!(preset_tooltip(RgbColor::new(255, 0, 0)), "#ff0000");
        assert_eq!(preset_tooltip(RgbColor::new(1, 171, 205)), "#01abcd");
    }

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.width, 300.0);
        assert!(config.presets.is_empty());
    }

    fn run_frame(bridge: &mut StateBridge, config: &PickerConfig) -> bool {
        let ctx = egui::Context::default();
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed |= bridge_picker(ui, bridge, config);
            });
        });
        changed
    }

    #[test]
    fn test_idle_frame_leaves_bridge_alone() {
        let mut bridge = StateBridge::initialize("hsl(200, 50%, 50%)");
        let before = *bridge.state();

        assert!(!run_frame(&mut bridge, &PickerConfig::default()));
        assert_eq!(*bridge.state(), before);
    }

    #[test]
    fn test_frame_consumes_notifications() {
        let mut bridge = StateBridge::initialize("#000000");
        bridge.set("rgb(1, 2, 3)");

        let config = PickerConfig {
            presets: vec![RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 255)],
            ..PickerConfig::default()
        };
        assert!(run_frame(&mut bridge, &config));
        assert!(!bridge.has_pending_events());
        assert_eq!(bridge.get(), "rgb(1, 2, 3)");
    }
}
