//! Layout and rendering of the summary control and the item panel.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, BorderType, Widget},
};

use crate::{
    config::DropDownConfig,
    constants::{
        ACCOUNT_LABEL, BALANCE_LABEL, COLUMN_MARGIN, ICON_COLUMN_WIDTH, LARGE_FONT_SIZE,
        ROW_HEIGHT, ROW_ICON_GAP, ROW_PADDING_X, SMALL_FONT_SIZE, SUMMARY_HEIGHT,
    },
    icons::{icon_glyph, optional_glyph},
    theme::{BORDER_STYLE, EXPANDED_BORDER_STYLE, HOVER_STYLE, ICON_STYLE, PANEL_STYLE},
    widgets::common::LabeledValue,
};

// ============================================================================
// Layout
// ============================================================================

/// Where each part of the widget goes for a given host area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropDownLayout {
    /// Bordered summary control, right-aligned in the area.
    pub summary: Rect,
    pub balance_column: Rect,
    pub account_column: Rect,
    /// Cell of the toggle icon.
    pub icon: Rect,
    /// Fully open panel beneath the summary, clipped to the area.
    pub panel: Rect,
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn text_width(text: &str) -> u16 {
    saturating_u16(Span::raw(text).width())
}

/// Width of the panel: the widest row, icon column reserved on every row.
fn panel_width(config: &DropDownConfig) -> u16 {
    let widest_label = config
        .items
        .iter()
        .map(|label| text_width(label))
        .max()
        .unwrap_or(0);
    ROW_PADDING_X
        .saturating_mul(2)
        .saturating_add(widest_label)
        .saturating_add(ROW_ICON_GAP)
        .saturating_add(1)
}

impl DropDownLayout {
    /// Compute the layout for `area`.
    ///
    /// `balance` is the already formatted balance text.
    #[must_use]
    pub fn compute(area: Rect, balance: &str, config: &DropDownConfig) -> Self {
        let balance_width = LabeledValue::new(BALANCE_LABEL, balance).width();
        let account_width = LabeledValue::new(ACCOUNT_LABEL, config.account.as_str()).width();

        let content_width = balance_width
            .saturating_add(account_width)
            .saturating_add(COLUMN_MARGIN.saturating_mul(4))
            .saturating_add(ICON_COLUMN_WIDTH);
        let summary_width = content_width.saturating_add(2).min(area.width);
        let summary = Rect {
            x: area.right().saturating_sub(summary_width),
            y: area.y,
            width: summary_width,
            height: SUMMARY_HEIGHT.min(area.height),
        };

        let inner = summary.inner(Margin::new(1, 1));
        let balance_column = Rect {
            x: inner.x.saturating_add(COLUMN_MARGIN),
            width: balance_width,
            ..inner
        }
        .intersection(inner);
        let account_column = Rect {
            x: balance_column
                .right()
                .saturating_add(COLUMN_MARGIN.saturating_mul(2)),
            width: account_width,
            ..inner
        }
        .intersection(inner);
        let icon = Rect {
            x: account_column
                .right()
                .saturating_add(COLUMN_MARGIN)
                .saturating_add(1),
            y: inner.y.saturating_add(1),
            width: 1,
            height: 1,
        }
        .intersection(inner);

        let open_height = saturating_u16(config.items.len()).saturating_mul(ROW_HEIGHT);
        let width = panel_width(config).min(summary.width);
        let panel = Rect {
            x: summary.right().saturating_sub(width),
            y: summary.bottom(),
            width,
            height: open_height.min(area.bottom().saturating_sub(summary.bottom())),
        };

        Self {
            summary,
            balance_column,
            account_column,
            icon,
            panel,
        }
    }
}

/// Index of the row under `position` in the visible `panel`.
#[must_use]
pub fn row_at(panel: Rect, position: Position, item_count: usize) -> Option<usize> {
    if !panel.contains(position) {
        return None;
    }
    let index = usize::from((position.y - panel.y) / ROW_HEIGHT);
    (index < item_count).then_some(index)
}

/// Terminal emphasis standing in for the row font size.
#[must_use]
pub fn font_emphasis(font_size: f64) -> Modifier {
    if font_size >= LARGE_FONT_SIZE {
        Modifier::BOLD
    } else if font_size <= SMALL_FONT_SIZE {
        Modifier::DIM
    } else {
        Modifier::empty()
    }
}

// ============================================================================
// DropDownView
// ============================================================================

/// One frame of the widget: summary plus the visible part of the panel.
#[derive(Debug)]
pub struct DropDownView<'a> {
    pub config: &'a DropDownConfig,
    pub balance: &'a str,
    pub layout: DropDownLayout,
    /// Visible panel height in rows.
    pub panel_height: u16,
    pub expanded: bool,
    pub hovered: Option<usize>,
}

impl DropDownView<'_> {
    /// Visible part of the panel.
    #[must_use]
    pub fn visible_panel(&self) -> Rect {
        Rect {
            height: self.panel_height.min(self.layout.panel.height),
            ..self.layout.panel
        }
    }

    fn render_summary(&self, buf: &mut Buffer) {
        let summary = self.layout.summary;
        if summary.is_empty() {
            return;
        }

        let border_style = if self.expanded {
            EXPANDED_BORDER_STYLE
        } else {
            BORDER_STYLE
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .render(summary, buf);

        LabeledValue::new(BALANCE_LABEL, self.balance).render(self.layout.balance_column, buf);
        LabeledValue::new(ACCOUNT_LABEL, self.config.account.as_str())
            .render(self.layout.account_column, buf);

        let icon = self.layout.icon;
        if !icon.is_empty() {
            buf.set_stringn(icon.x, icon.y, icon_glyph(&self.config.icon), 1, ICON_STYLE);
        }
    }

    fn render_panel(&self, buf: &mut Buffer) {
        let panel = self.visible_panel();
        if panel.is_empty() {
            return;
        }

        let emphasis = font_emphasis(self.config.drop_down_font_size);
        buf.set_style(panel, PANEL_STYLE);

        for (index, (label, icon)) in self.config.rows().enumerate() {
            let Ok(offset) = u16::try_from(index) else {
                break;
            };
            let row_top = panel.y.saturating_add(offset.saturating_mul(ROW_HEIGHT));
            if row_top >= panel.bottom() {
                break;
            }

            let base = if self.hovered == Some(index) {
                HOVER_STYLE
            } else {
                PANEL_STYLE
            };
            let style = base.add_modifier(emphasis);
            let row = Rect {
                y: row_top,
                height: ROW_HEIGHT.min(panel.bottom() - row_top),
                ..panel
            };
            buf.set_style(row, base);

            let text_y = row_top + ROW_HEIGHT / 2;
            if text_y >= panel.bottom() {
                continue;
            }

            // Right-aligned: label, gap, icon, padding.
            let icon_x = panel.right().saturating_sub(ROW_PADDING_X + 1);
            let label_width = text_width(label);
            let label_x = icon_x
                .saturating_sub(ROW_ICON_GAP)
                .saturating_sub(label_width)
                .max(panel.x);
            let max_label = usize::from(icon_x.saturating_sub(label_x));
            buf.set_stringn(label_x, text_y, label, max_label, style);

            let glyph = optional_glyph(icon);
            if !glyph.is_empty() && icon_x >= panel.x {
                buf.set_stringn(icon_x, text_y, glyph, 1, style);
            }
        }
    }
}

impl Widget for DropDownView<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        self.render_summary(buf);
        self.render_panel(buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ConfigMother;

    #[test]
    fn test_layout_right_aligns_summary_and_panel() {
        let config = DropDownConfig::default();
        let area = Rect::new(0, 0, 60, 20);
        let layout = DropDownLayout::compute(area, "10,000.00\u{a0}EUR", &config);

        assert_eq!(layout.summary.right(), area.right());
        assert_eq!(layout.summary.height, SUMMARY_HEIGHT);
        assert_eq!(layout.panel.right(), layout.summary.right());
        assert_eq!(layout.panel.y, layout.summary.bottom());
        assert_eq!(layout.panel.height, 3 * ROW_HEIGHT);
    }

    #[test]
    fn test_layout_columns_fit_inside_summary() {
        let config = DropDownConfig::default();
        let layout = DropDownLayout::compute(Rect::new(0, 0, 80, 20), "10,000.00\u{a0}EUR", &config);

        assert_eq!(layout.balance_column.width, 13);
        assert_eq!(layout.account_column.width, 12);
        assert!(layout.summary.contains(Position::new(layout.icon.x, layout.icon.y)));
        assert!(layout.icon.x > layout.account_column.right());
    }

    #[test]
    fn test_layout_clips_panel_to_area() {
        let config = ConfigMother::with_item_count(10);
        let layout = DropDownLayout::compute(Rect::new(0, 0, 60, 10), "1.00\u{a0}EUR", &config);
        assert_eq!(layout.panel.bottom(), 10);
    }

    #[test]
    fn test_layout_in_tiny_area_does_not_panic() {
        let config = DropDownConfig::default();
        let layout = DropDownLayout::compute(Rect::new(0, 0, 3, 1), "1.00\u{a0}EUR", &config);
        assert!(layout.summary.width <= 3);
        assert_eq!(layout.panel.height, 0);
    }

    #[test]
    fn test_row_at() {
        let panel = Rect::new(10, 4, 20, 9);
        let cases = [
            (Position::new(10, 4), Some(0)),
            (Position::new(29, 6), Some(0)),
            (Position::new(15, 7), Some(1)),
            (Position::new(15, 12), Some(2)),
            (Position::new(15, 13), None),
            (Position::new(9, 5), None),
        ];

        for (position, expected) in cases {
            assert_eq!(row_at(panel, position, 3), expected, "{position:?}");
        }
        assert_eq!(row_at(panel, Position::new(15, 10), 2), None);
    }

    #[test]
    fn test_font_emphasis() {
        assert_eq!(font_emphasis(16.0), Modifier::empty());
        assert_eq!(font_emphasis(20.0), Modifier::BOLD);
        assert_eq!(font_emphasis(10.0), Modifier::DIM);
    }
}
