//! Theme and styling constants for the balance dropdown.
//!
//! Light card palette: grey captions, dark values, white panel.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Caption text color (`BALANCE`, `ACCOUNT`).
pub const LIGHT_GREY: Color = Color::Rgb(150, 155, 165);

/// Primary text color for values, rows and icons.
pub const DARK_GREY: Color = Color::Rgb(60, 64, 72);

/// Panel background.
pub const PANEL_BG: Color = Color::Rgb(255, 255, 255);

/// Background of a hovered row.
pub const HOVER_BG: Color = Color::Rgb(240, 240, 240);

/// Muted text color for hints.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for status messages.
pub const ACCENT_COLOR: Color = Color::Cyan;

// ============================================================================
// Style Constants
// ============================================================================

/// Border of the summary control.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border of the summary control while the panel is open.
pub const EXPANDED_BORDER_STYLE: Style = Style::new().fg(ACCENT_COLOR);

/// Caption style for the `BALANCE` and `ACCOUNT` labels.
pub const LABEL_STYLE: Style = Style::new().fg(LIGHT_GREY).add_modifier(Modifier::BOLD);

/// Value style for the balance and account.
pub const VALUE_STYLE: Style = Style::new().fg(DARK_GREY).add_modifier(Modifier::BOLD);

/// Toggle icon style.
pub const ICON_STYLE: Style = Style::new().fg(DARK_GREY);

/// Base style for the panel and its rows.
pub const PANEL_STYLE: Style = Style::new().fg(DARK_GREY).bg(PANEL_BG);

/// Style for the hovered row.
pub const HOVER_STYLE: Style = Style::new().fg(DARK_GREY).bg(HOVER_BG);
