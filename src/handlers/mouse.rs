//! Mouse Drag Adapter
//!
//! A left-button press on the campsite card starts a drag; the release
//! ends it and yields a `GestureSample` in density-independent units
//! (terminal cells scaled by `cell_width_dp`).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::logic::gesture::GestureSample;

/// Default width of one terminal column in dp
pub const DEFAULT_CELL_WIDTH_DP: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct GestureTracker {
    origin: Option<(u16, u16)>,
    cell_width_dp: f64,
}

impl GestureTracker {
    pub fn new(cell_width_dp: f64) -> Self {
        Self {
            origin: None,
            cell_width_dp,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Feed one mouse event; returns a sample when a drag ends
    ///
    /// `card` is the area of the campsite card on the last frame, or None
    /// when no card is visible.
    pub fn handle(&mut self, event: MouseEvent, card: Option<Rect>) -> Option<GestureSample> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = card
                    .filter(|area| contains(*area, event.column, event.row))
                    .map(|_| (event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col, row) = self.origin.take()?;
                let dx = (event.column as f64 - col as f64) * self.cell_width_dp;
                let dy = (event.row as f64 - row as f64) * self.cell_width_dp;
                Some(GestureSample::new(dx, dy))
            }
            _ => None,
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH_DP)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const CARD: Rect = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 10,
    };

    #[test]
    fn test_drag_left_produces_negative_dx() {
        let mut tracker = GestureTracker::default();
        assert!(tracker
            .handle(mouse(MouseEventKind::Down(MouseButton::Left), 40, 8), Some(CARD))
            .is_none());
        assert!(tracker.is_tracking());

        let sample = tracker
            .handle(mouse(MouseEventKind::Up(MouseButton::Left), 15, 8), Some(CARD))
            .unwrap();
        assert_eq!(sample.dx, -250.0);
        assert_eq!(sample.dy, 0.0);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_press_outside_card_is_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 2, 2), Some(CARD));
        assert!(tracker
            .handle(mouse(MouseEventKind::Up(MouseButton::Left), 40, 2), Some(CARD))
            .is_none());
    }

    #[test]
    fn test_no_card_no_gesture() {
        let mut tracker = GestureTracker::default();
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 20, 8), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_release_may_land_outside_card() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), Some(CARD));
        let sample = tracker
            .handle(mouse(MouseEventKind::Up(MouseButton::Left), 60, 5), Some(CARD))
            .unwrap();
        assert_eq!(sample.dx, 250.0);
    }
}
