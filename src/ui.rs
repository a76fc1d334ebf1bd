use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    theme::{ACCENT_COLOR, MUTED_COLOR},
};

const HINTS: &str = "click: open/close  r: reload  q: quit";

/// Render the entire application UI.
pub fn render(app: &App, frame: &mut Frame) {
    render_at(app, frame, Instant::now());
}

/// Render the frame displayed at `now`.
pub fn render_at(app: &App, frame: &mut Frame, now: Instant) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_footer(app, frame, footer);

    if let Some(dropdown) = app.dropdown() {
        dropdown.render_at(body.inner(Margin::new(2, 1)), frame.buffer_mut(), now);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::from("balance").fg(ACCENT_COLOR).bold(),
        Span::from("  "),
        Span::from(HINTS).fg(MUTED_COLOR),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(app.status.as_str()).fg(MUTED_COLOR).italic(),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::StartupOptions,
        config::DropDownConfig,
        event::Action,
        test_utils::{buffer_lines, click, scratch_path, test_terminal_80x24},
    };
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn app() -> App {
        let options = StartupOptions {
            config_path: Some(scratch_path("ui-missing.json")),
            ..StartupOptions::default()
        };
        App::with_config(DropDownConfig::default(), options)
    }

    #[rstest]
    fn test_render_layout(mut test_terminal_80x24: Terminal<TestBackend>) {
        let app = app();
        let now = Instant::now();
        test_terminal_80x24
            .draw(|frame| render_at(&app, frame, now))
            .unwrap();

        let lines = buffer_lines(test_terminal_80x24.backend().buffer());
        assert!(lines[0].starts_with("balance  click"));
        assert!(lines[23].starts_with("Click the balance"));
        assert!(lines.iter().any(|line| line.contains("BALANCE")));

        // Summary sits inside the body margin, right-aligned.
        let summary = app.dropdown().map(|d| d.region().summary).unwrap_or_default();
        assert_eq!(summary.y, 2);
        assert_eq!(summary.right(), 78);
    }

    #[rstest]
    fn test_status_follows_interaction(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut app = app();
        let now = Instant::now();
        test_terminal_80x24
            .draw(|frame| render_at(&app, frame, now))
            .unwrap();

        let summary = app.dropdown().map(|d| d.region().summary).unwrap_or_default();
        app.update_at(Action::Pointer(click(summary.x + 1, summary.y + 1)), now);
        test_terminal_80x24
            .draw(|frame| render_at(&app, frame, now))
            .unwrap();

        let lines = buffer_lines(test_terminal_80x24.backend().buffer());
        assert!(lines[23].starts_with("Menu opened"));
    }
}
