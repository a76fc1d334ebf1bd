//! Constants for the balance dropdown widget.
//!
//! Dimensions are measured in terminal cells. Default props live here so the
//! config layer, the CLI and the tests agree on a single source of truth.

use std::time::Duration;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of each item row in the dropdown panel (in rows).
///
/// Each row displays:
/// - Line 1: Top padding
/// - Line 2: Label and icon
/// - Line 3: Bottom padding
pub const ROW_HEIGHT: u16 = 3;

/// Height of the summary control (in rows).
///
/// Border, label line, value line, border.
pub const SUMMARY_HEIGHT: u16 = 4;

/// Horizontal margin around each summary text column.
pub const COLUMN_MARGIN: u16 = 1;

/// Width reserved for the toggle icon, including its margins.
pub const ICON_COLUMN_WIDTH: u16 = 3;

/// Horizontal padding on each side of a panel row.
pub const ROW_PADDING_X: u16 = 2;

/// Gap between a row label and its icon.
pub const ROW_ICON_GAP: u16 = 2;

// ============================================================================
// Labels
// ============================================================================

/// Caption above the formatted balance.
pub const BALANCE_LABEL: &str = "BALANCE";

/// Caption above the account name.
pub const ACCOUNT_LABEL: &str = "ACCOUNT";

/// Separator between the formatted amount and the currency code.
pub const CURRENCY_SEPARATOR: char = '\u{a0}';

// ============================================================================
// Animation
// ============================================================================

/// Duration of the panel height transition.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(230);

/// Control points of the cubic-bezier easing curve `(x1, y1, x2, y2)`.
pub const ANIMATION_CURVE: (f32, f32, f32, f32) = (0.68, 0.0, 0.39, 1.0);

/// Frame interval while a transition is running.
pub const FRAME_RATE: Duration = Duration::from_millis(16);

/// Poll interval when nothing is animating.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

// ============================================================================
// Font Size Mapping
// ============================================================================

/// Row font sizes at or above this (px) render bold.
pub const LARGE_FONT_SIZE: f64 = 18.0;

/// Row font sizes at or below this (px) render dim.
pub const SMALL_FONT_SIZE: f64 = 12.0;

// ============================================================================
// Default Props
// ============================================================================

pub const DEFAULT_BALANCE: &str = "10000";
pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_ACCOUNT: &str = "Company Inc.";
pub const DEFAULT_ICON: &str = "keyboard_arrow_down";
pub const DEFAULT_ITEMS: [&str; 3] = ["Account", "Contacts", "Logout"];
pub const DEFAULT_ICONS: [&str; 3] = ["arrow_downward", "contacts", "logout"];
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

// ============================================================================
// Tests
// ============================================================================
