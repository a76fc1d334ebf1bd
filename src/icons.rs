//! Icon identifiers to terminal glyphs.
//!
//! Props carry Material icon names (`keyboard_arrow_down`, `logout`, ...).
//! Terminals cannot render icon fonts, so each known name maps to a single
//! Unicode glyph.

/// Glyph used for icon names without a mapping.
pub const UNKNOWN_ICON: &str = "•";

/// Get the terminal glyph for a Material icon name.
///
/// Names are matched case-insensitively after trimming. Unknown names map to
/// [`UNKNOWN_ICON`]; a blank name maps to an empty string.
///
/// # Examples
///
/// ```
/// use balance_dropdown::icons::icon_glyph;
///
/// assert_eq!(icon_glyph("keyboard_arrow_down"), "▾");
/// assert_eq!(icon_glyph("logout"), "⇥");
/// ```
#[must_use]
pub fn icon_glyph(name: &str) -> &'static str {
    let name = name.trim();
    if name.is_empty() {
        return "";
    }
    match name.to_ascii_lowercase().as_str() {
        "keyboard_arrow_down" | "expand_more" => "▾",
        "keyboard_arrow_up" | "expand_less" => "▴",
        "keyboard_arrow_left" | "chevron_left" => "◂",
        "keyboard_arrow_right" | "chevron_right" => "▸",
        "arrow_downward" => "↓",
        "arrow_upward" => "↑",
        "arrow_back" => "←",
        "arrow_forward" => "→",
        "contacts" | "person" | "account_circle" => "☺",
        "logout" | "exit_to_app" => "⇥",
        "login" => "⇤",
        "settings" => "⚙",
        "home" => "⌂",
        "mail" | "email" => "✉",
        "phone" | "call" => "☏",
        "star" | "favorite" => "★",
        "check" | "done" => "✓",
        "close" | "clear" => "✕",
        "add" => "+",
        "remove" => "−",
        "search" => "⌕",
        "info" | "help" => "ⓘ",
        "warning" => "⚠",
        "lock" => "⚿",
        "menu" => "≡",
        "account_balance" | "account_balance_wallet" | "payments" => "$",
        _ => UNKNOWN_ICON,
    }
}

/// Glyph for an optional icon: `None` renders nothing.
#[must_use]
pub fn optional_glyph(name: Option<&str>) -> &'static str {
    name.map_or("", icon_glyph)
}

// ============================================================================
// Tests
// ============================================================================
