//! Caption-over-value text column.
//!
//! Renders a small caption line above a value line, as used for the
//! `BALANCE` and `ACCOUNT` columns of the summary control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{LABEL_STYLE, VALUE_STYLE};

// ============================================================================
// LabeledValue Widget
// ============================================================================

/// A caption with its value underneath.
///
/// # Example
///
/// ```text
/// BALANCE
/// 10,000.00 EUR
/// ```
///
/// # Usage
///
/// ```
/// use balance_dropdown::widgets::LabeledValue;
///
/// let column = LabeledValue::new("ACCOUNT", "Company Inc.");
/// assert_eq!(column.width(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledValue {
    label: String,
    value: String,
    label_style: Style,
    value_style: Style,
}

impl LabeledValue {
    /// Create a column with the theme's caption and value styles.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            label_style: LABEL_STYLE,
            value_style: VALUE_STYLE,
        }
    }

    /// Display width of the wider of the two lines.
    #[must_use]
    pub fn width(&self) -> u16 {
        let widest = self.label_line().width().max(self.value_line().width());
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    fn label_line(&self) -> Line<'_> {
        Line::from(Span::styled(self.label.as_str(), self.label_style))
    }

    fn value_line(&self) -> Line<'_> {
        Line::from(Span::styled(self.value.as_str(), self.value_style))
    }

    /// The caption and value lines.
    #[must_use]
    pub fn to_lines(&self) -> [Line<'_>; 2] {
        [self.label_line(), self.value_line()]
    }
}

impl Widget for &LabeledValue {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }

        for (offset, line) in self.to_lines().into_iter().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            if offset >= area.height {
                break;
            }
            buf.set_line(area.x, area.y + offset, &line, area.width);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;

    #[test]
    fn test_width_is_widest_line() {
        assert_eq!(LabeledValue::new("BALANCE", "1.00\u{a0}EUR").width(), 8);
        assert_eq!(LabeledValue::new("BALANCE", "10,000.00\u{a0}EUR").width(), 13);
    }

    #[test]
    fn test_to_lines() {
        let column = LabeledValue::new("ACCOUNT", "Company Inc.");
        let [label, value] = column.to_lines();
        assert_eq!(label.spans[0].content, "ACCOUNT");
        assert_eq!(value.spans[0].content, "Company Inc.");
        assert_eq!(label.spans[0].style, LABEL_STYLE);
    }

    #[test]
    fn test_render_clips_to_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        LabeledValue::new("ACCOUNT", "Company Inc.").render(Rect::new(0, 0, 5, 1), &mut buf);

        let lines = buffer_lines(&buf);
        assert_eq!(lines[0], "ACCOU ");
        assert_eq!(lines[1], "      ");
    }

    #[test]
    fn test_render_empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        LabeledValue::new("X", "Y").render(Rect::new(0, 0, 0, 2), &mut buf);
        assert_eq!(buffer_lines(&buf), ["    ", "    "]);
    }
}
