//! The bridge between the embedding environment and the picker widget.

use std::collections::VecDeque;

use crate::color::{CanonicalColor, RgbColor};
use crate::format::FormatTag;
use crate::input::ColorValue;

use super::events::StateChange;
use super::state::ColorState;

/// Undrained notifications kept at most; older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 64;

/// Owns the current color state for the lifetime of a mounted picker.
///
/// Every operation is a synchronous state transition that always succeeds.
/// Unreadable input to [`initialize`](Self::initialize) or [`set`](Self::set)
/// resets the state to opaque black in `hex` format.
///
/// Transitions are reported to the rendering layer as [`StateChange`] events,
/// queued after the mutation and drained with [`poll_events`](Self::poll_events).
/// Every event carries the full post-mutation state, so a run of updates
/// collapses into the latest one and the queue never holds more than
/// [`MAX_PENDING_EVENTS`].
#[derive(Debug, Clone)]
pub struct StateBridge {
    state: ColorState,
    /// Pending notifications for the rendering layer.
    events: VecDeque<StateChange>,
}

impl StateBridge {
    /// Create a bridge from the initial external value.
    pub fn initialize(value: impl Into<ColorValue>) -> Self {
        let state = ColorState::from_value(&value.into());
        log::debug!("Color bridge initialized as {} ({})", state.to_text(), state.format);
        Self {
            state,
            events: VecDeque::new(),
        }
    }

    /// The current color in its remembered format.
    ///
    /// Recomputed on every call.
    pub fn get(&self) -> String {
        self.state.to_text()
    }

    /// Replace color and format from an external value.
    pub fn set(&mut self, value: impl Into<ColorValue>) {
        let previous = self.state.format;
        self.state = ColorState::from_value(&value.into());
        log::debug!("Color set to {} (format {} -> {})", self.get(), previous, self.state.format);
        self.notify(StateChange::Set { state: self.state });
    }

    /// Apply a finished picker interaction.
    ///
    /// Only the RGB channels change; alpha and format are kept.
    pub fn update(&mut self, rgb: impl Into<RgbColor>) {
        self.state = self.state.with_rgb(rgb.into());
        log::debug!("Color updated to {} (format {})", self.get(), self.state.format);
        self.notify(StateChange::Update { state: self.state });
    }

    /// Read-only view of the state, for rendering.
    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn color(&self) -> CanonicalColor {
        self.state.color
    }

    pub fn format(&self) -> FormatTag {
        self.state.format
    }

    /// Drain pending notifications, oldest first.
    pub fn poll_events(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.events).into()
    }

    /// Whether the rendering layer has notifications to process.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn notify(&mut self, change: StateChange) {
        if let (Some(StateChange::Update { .. }), StateChange::Update { .. }) =
            (self.events.back(), &change)
        {
            self.events.pop_back();
        }
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(change);
    }
}

impl Default for StateBridge {
    fn default() -> Self {
        Self::initialize(ColorValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_does_not_notify() {
        let mut bridge = StateBridge::initialize("#ff0000");
        assert!(!bridge.has_pending_events());
        assert!(bridge.poll_events().is_empty());
    }

    #[test]
    fn test_default_is_black_hex() {
        let bridge = StateBridge::default();
        assert_eq!(bridge.color(), CanonicalColor::BLACK);
        assert_eq!(bridge.format(), FormatTag::Hex);
        assert_eq!(bridge.get(), "#000000");
    }

    #[test]
    fn test_set_replaces_format() {
        let mut bridge = StateBridge::initialize("#ff0000");
        bridge.set("hsl(120, 100%, 50%)");
        assert_eq!(bridge.format(), FormatTag::Hsl);
        assert_eq!(bridge.get(), "hsl(120, 100%, 50%)");
    }

    #[test]
    fn test_update_keeps_format_and_alpha() {
        let mut bridge = StateBridge::initialize("rgba(1, 2, 3, 0.4)");
        bridge.update(RgbColor::new(40, 50, 60));
        assert_eq!(bridge.format(), FormatTag::Rgb);
        assert_eq!(bridge.color(), CanonicalColor::new(40, 50, 60, 0.4));
        assert_eq!(bridge.get(), "rgba(40, 50, 60, 0.4)");
    }

    #[test]
    fn test_events_follow_mutations_in_order() {
        let mut bridge = StateBridge::initialize("#000000");
        bridge.set("rgb(1, 2, 3)");
        bridge.update(RgbColor::new(4, 5, 6));

        let events = bridge.poll_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], StateChange::Set { .. }));
        assert_eq!(events[0].state().color, CanonicalColor::opaque(1, 2, 3));
        assert!(matches!(events[1], StateChange::Update { .. }));
        assert_eq!(events[1].state(), bridge.state());
        assert!(!bridge.has_pending_events());
    }

    #[test]
    fn test_invalid_set_resets() {
        let mut bridge = StateBridge::initialize("hsl(200, 50%, 50%)");
        bridge.set("definitely not a color");
        assert_eq!(*bridge.state(), ColorState::new(CanonicalColor::BLACK, FormatTag::Hex));
        assert_eq!(bridge.poll_events().len(), 1);
    }

    #[test]
    fn test_event_json() {
        let mut bridge = StateBridge::initialize("#000000");
        bridge.update(RgbColor::new(1, 2, 3));
        let json = serde_json::to_string(&bridge.poll_events()[0]).unwrap();
        assert!(json.starts_with(r#"{"type":"update""#));
    }

    #[test]
    fn test_undrained_updates_collapse() {
        let mut bridge = StateBridge::initialize("#000000");
        for i in 0..100_000u32 {
            bridge.update(RgbColor::new((i % 256) as u8, 0, 0));
        }

        let events = bridge.poll_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].state(), bridge.state());
    }

    #[test]
    fn test_undrained_sets_are_capped() {
        let mut bridge = StateBridge::initialize("#000000");
        for i in 0..1000u32 {
            bridge.set(format!("rgb({}, 0, 0)", i % 256));
            bridge.update(RgbColor::new(0, 0, 1));
        }

        let events = bridge.poll_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert!(matches!(events.last(), Some(StateChange::Update { .. })));
        assert_eq!(events.last().map(StateChange::state), Some(bridge.state()));
    }
}
