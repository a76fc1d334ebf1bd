//! Open/close state machine for the dropdown panel.
//!
//! | From      | Trigger            | To        | Command                   |
//! |-----------|--------------------|-----------|---------------------------|
//! | Collapsed | summary activated  | Expanded  | height `items * row`      |
//! | Expanded  | summary activated  | Collapsed | height `0`                |
//! | Expanded  | activation outside | Collapsed | height `0`                |
//! | Collapsed | activation outside | Collapsed | none                      |

use ratatui::layout::{Position, Rect};

// ============================================================================
// PanelState
// ============================================================================

/// Whether the item panel is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

// ============================================================================
// HeightCommand
// ============================================================================

/// Request to the presentation layer: animate the panel to `target` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightCommand {
    pub target: u16,
}

// ============================================================================
// HitRegion
// ============================================================================

/// Cells painted by the widget on its last frame.
///
/// The panel rectangle only covers its visible (animated) height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitRegion {
    pub summary: Rect,
    pub panel: Rect,
}

impl HitRegion {
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.summary.contains(position) || self.panel.contains(position)
    }
}

// ============================================================================
// InteractionController
// ============================================================================

/// Owns the expanded flag and derives the panel's target height.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: PanelState,
    item_count: usize,
    row_height: u16,
}

impl InteractionController {
    /// A collapsed controller for `item_count` rows of `row_height` each.
    #[must_use]
    pub const fn new(item_count: usize, row_height: u16) -> Self {
        Self {
            state: PanelState::Collapsed,
            item_count,
            row_height,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Height of the fully open panel, saturating at `u16::MAX`.
    #[must_use]
    pub fn open_height(&self) -> u16 {
        u16::try_from(self.item_count)
            .ok()
            .and_then(|count| count.checked_mul(self.row_height))
            .unwrap_or(u16::MAX)
    }

    /// Target height for the current state.
    #[must_use]
    pub fn target_height(&self) -> u16 {
        if self.is_expanded() {
            self.open_height()
        } else {
            0
        }
    }

    /// Summary control activated.
    pub fn toggle(&mut self) -> HeightCommand {
        self.state = self.state.toggled();
        tracing::debug!("dropdown toggled to {:?}", self.state);
        HeightCommand {
            target: self.target_height(),
        }
    }

    /// Force the panel closed. `None` if it already was.
    pub fn collapse(&mut self) -> Option<HeightCommand> {
        if !self.is_expanded() {
            return None;
        }
        self.state = PanelState::Collapsed;
        tracing::debug!("dropdown collapsed");
        Some(HeightCommand { target: 0 })
    }

    /// Pointer activation at `position`; collapses when it lies outside `region`.
    pub fn dismiss_at(&mut self, position: Position, region: &HitRegion) -> Option<HeightCommand> {
        if region.contains(position) {
            return None;
        }
        self.collapse()
    }

    /// The host supplied a new item list. Re-targets an open panel.
    pub fn set_item_count(&mut self, item_count: usize) -> Option<HeightCommand> {
        if item_count == self.item_count {
            return None;
        }
        self.item_count = item_count;
        self.is_expanded().then(|| HeightCommand {
            target: self.open_height(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn region() -> HitRegion {
        HitRegion {
            summary: Rect::new(10, 0, 30, 4),
            panel: Rect::new(20, 4, 20, 9),
        }
    }

    #[test]
    fn test_starts_collapsed() {
        let controller = InteractionController::new(3, 3);
        assert_eq!(controller.state(), PanelState::Collapsed);
        assert_eq!(controller.target_height(), 0);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 3)]
    #[case(3, 9)]
    #[case(10, 30)]
    fn test_toggle_cycle(#[case] items: usize, #[case] open: u16) {
        let mut controller = InteractionController::new(items, 3);

        assert_eq!(controller.toggle(), HeightCommand { target: open });
        assert_eq!(controller.state(), PanelState::Expanded);

        assert_eq!(controller.toggle(), HeightCommand { target: 0 });
        assert_eq!(controller.state(), PanelState::Collapsed);
    }

    #[test]
    fn test_open_height_saturates() {
        let controller = InteractionController::new(usize::MAX, 3);
        assert_eq!(controller.open_height(), u16::MAX);

        let controller = InteractionController::new(30_000, 3);
        assert_eq!(controller.open_height(), u16::MAX);
    }

    #[rstest]
    #[case(Position::new(0, 0))]
    #[case(Position::new(15, 6))]
    #[case(Position::new(40, 2))]
    #[case(Position::new(25, 13))]
    fn test_outside_activation_collapses(#[case] position: Position) {
        let mut controller = InteractionController::new(3, 3);
        controller.toggle();

        assert_eq!(
            controller.dismiss_at(position, &region()),
            Some(HeightCommand { target: 0 })
        );
        assert!(!controller.is_expanded());
    }

    #[rstest]
    #[case(Position::new(10, 0))]
    #[case(Position::new(39, 3))]
    #[case(Position::new(20, 4))]
    #[case(Position::new(39, 12))]
    fn test_inside_activation_never_collapses(#[case] position: Position) {
        let mut controller = InteractionController::new(3, 3);
        controller.toggle();

        assert_eq!(controller.dismiss_at(position, &region()), None);
        assert!(controller.is_expanded());
    }

    #[test]
    fn test_outside_activation_when_collapsed_is_noop() {
        let mut controller = InteractionController::new(3, 3);
        assert_eq!(controller.dismiss_at(Position::new(0, 0), &region()), None);
        assert_eq!(controller.state(), PanelState::Collapsed);
    }

    #[test]
    fn test_empty_region_treats_everything_as_outside() {
        let mut controller = InteractionController::new(2, 3);
        controller.toggle();
        assert!(
            controller
                .dismiss_at(Position::new(0, 0), &HitRegion::default())
                .is_some()
        );
    }

    #[test]
    fn test_set_item_count_retargets_open_panel() {
        let mut controller = InteractionController::new(3, 3);
        assert_eq!(controller.set_item_count(5), None);

        controller.toggle();
        assert_eq!(
            controller.set_item_count(2),
            Some(HeightCommand { target: 6 })
        );
        assert_eq!(controller.set_item_count(2), None);
        assert_eq!(controller.item_count(), 2);
    }
}
