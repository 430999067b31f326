//! Change-complete tracking for picker interactions.

use colorbridge_core::RgbColor;

/// Tracks one picker interaction at a time.
///
/// Intermediate edits (drag steps, keystrokes) only move the displayed
/// color. The bridge hears about the interaction once, when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeTracker {
    /// Last color the bridge reported or accepted.
    committed: RgbColor,
    /// Color shown while an interaction is in progress.
    pending: Option<RgbColor>,
}

impl ChangeTracker {
    pub fn new(current: RgbColor) -> Self {
        Self {
            committed: current,
            pending: None,
        }
    }

    /// Adopt the bridge's color. Ignored while an interaction is in progress.
    pub fn sync(&mut self, current: RgbColor) {
        if self.pending.is_none() {
            self.committed = current;
        }
    }

    /// Record an intermediate edit.
    pub fn edit(&mut self, rgb: RgbColor) {
        self.pending = Some(rgb);
    }

    /// Finish the interaction. Returns the color to hand to the bridge, if
    /// anything was edited.
    pub fn complete(&mut self) -> Option<RgbColor> {
        let rgb = self.pending.take()?;
        self.committed = rgb;
        Some(rgb)
    }

    /// A single-step interaction, such as clicking a preset.
    pub fn commit(&mut self, rgb: RgbColor) -> RgbColor {
        self.pending = None;
        self.committed = rgb;
        rgb
    }

    /// Color the widget should draw right now.
    pub fn display(&self) -> RgbColor {
        self.pending.unwrap_or(self.committed)
    }

    pub fn is_editing(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_emits_once() {
        let mut tracker = ChangeTracker::new(RgbColor::new(0, 0, 0));
        tracker.edit(RgbColor::new(10, 0, 0));
        tracker.edit(RgbColor::new(20, 0, 0));
        tracker.edit(RgbColor::new(30, 0, 0));
        assert_eq!(tracker.display(), RgbColor::new(30, 0, 0));

        assert_eq!(tracker.complete(), Some(RgbColor::new(30, 0, 0)));
        assert_eq!(tracker.complete(), None);
        assert_eq!(tracker.display(), RgbColor::new(30, 0, 0));
    }

    #[test]
    fn test_complete_without_edit() {
        let mut tracker = ChangeTracker::new(RgbColor::new(1, 2, 3));
        assert_eq!(tracker.complete(), None);
    }

    #[test]
    fn test_sync_ignored_while_editing() {
        let mut tracker = ChangeTracker::new(RgbColor::new(0, 0, 0));
        tracker.edit(RgbColor::new(5, 5, 5));
        tracker.sync(RgbColor::new(100, 100, 100));
        assert_eq!(tracker.display(), RgbColor::new(5, 5, 5));

        tracker.complete();
        tracker.sync(RgbColor::new(100, 100, 100));
        assert_eq!(tracker.display(), RgbColor::new(100, 100, 100));
    }

    #[test]
    fn test_commit_discards_pending() {
        let mut tracker = ChangeTracker::new(RgbColor::new(0, 0, 0));
        tracker.edit(RgbColor::new(5, 5, 5));
        assert_eq!(tracker.commit(RgbColor::new(9, 9, 9)), RgbColor::new(9, 9, 9));
        assert!(!tracker.is_editing());
        assert_eq!(tracker.complete(), None);
    }
}
