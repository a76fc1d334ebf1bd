//! Host application: owns the pointer hub and the mounted widget.

use std::{path::PathBuf, time::Instant};

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    config::DropDownConfig,
    error::DropDownError,
    event::Action,
    format::{Balance, NumberLocale},
    pointer::PointerHub,
    widgets::{BalanceDropDown, DropDownEvent, PanelState},
};

// ============================================================================
// Startup options
// ============================================================================

/// Values given on the command line that win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub balance: Option<String>,
    pub currency: Option<String>,
    pub account: Option<String>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn apply(&self, mut config: DropDownConfig) -> DropDownConfig {
        if let Some(balance) = &self.balance {
            config.balance = Balance::from(balance.as_str());
        }
        if let Some(currency) = &self.currency {
            config.currency.clone_from(currency);
        }
        if let Some(account) = &self.account {
            config.account.clone_from(account);
        }
        config
    }
}

/// Where the host reads its props from.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Explicit config file; the user config directory is used otherwise.
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub locale: NumberLocale,
}

impl StartupOptions {
    /// Read the config file and apply the overrides.
    #[must_use]
    pub fn load_config(&self) -> DropDownConfig {
        let base = match &self.config_path {
            Some(path) => DropDownConfig::load_from(path),
            None => DropDownConfig::load(),
        };
        self.overrides.apply(base)
    }

    /// Write `config` to the explicit config file, or the default one.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or written.
    pub fn save_config(&self, config: &DropDownConfig) -> Result<(), DropDownError> {
        match &self.config_path {
            Some(path) => config.save_to(path),
            None => config.save(),
        }?;
        tracing::info!("config saved");
        Ok(())
    }
}

// ============================================================================
// App
// ============================================================================

/// Top-level host state.
#[derive(Debug)]
pub struct App {
    pub hub: PointerHub,
    dropdown: Option<BalanceDropDown>,
    options: StartupOptions,
    /// Footer message describing the last interaction.
    pub status: String,
    pub exit: bool,
}

impl App {
    #[must_use]
    pub fn new(options: StartupOptions) -> Self {
        let config = options.load_config();
        Self::with_config(config, options)
    }

    /// Mount with an already loaded config.
    #[must_use]
    pub fn with_config(config: DropDownConfig, options: StartupOptions) -> Self {
        let hub = PointerHub::new();
        let dropdown = BalanceDropDown::mount(config, &hub).with_locale(options.locale);
        Self {
            hub,
            dropdown: Some(dropdown),
            options,
            status: String::from("Click the balance to open the menu"),
            exit: false,
        }
    }

    #[must_use]
    pub const fn dropdown(&self) -> Option<&BalanceDropDown> {
        self.dropdown.as_ref()
    }

    /// Whether the next frame should be drawn soon.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.dropdown
            .as_ref()
            .is_some_and(|dropdown| dropdown.is_animating(now))
    }

    pub fn update(&mut self, action: Action) {
        self.update_at(action, Instant::now());
    }

    /// Apply `action` at an explicit time.
    pub fn update_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.exit = true,
            Action::ReloadConfig => self.remount(),
            Action::Pointer(mouse) => self.handle_pointer(mouse, now),
            Action::Resize(width, height) => {
                tracing::debug!("terminal resized to {width}x{height}");
            }
        }
    }

    fn handle_pointer(&mut self, mouse: MouseEvent, now: Instant) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            self.hub.dispatch(Position::new(mouse.column, mouse.row));
        }

        let Some(dropdown) = self.dropdown.as_mut() else {
            return;
        };
        match dropdown.handle_mouse_at(mouse, now) {
            Some(DropDownEvent::Toggled(PanelState::Expanded)) => {
                self.status = String::from("Menu opened");
            }
            Some(DropDownEvent::Toggled(PanelState::Collapsed)) => {
                self.status = String::from("Menu closed");
            }
            Some(DropDownEvent::Selected { label, .. }) => {
                self.status = format!("Selected {label}");
            }
            None => {}
        }
    }

    /// Unmount the current widget, then mount one with freshly loaded props.
    fn remount(&mut self) {
        if let Some(previous) = self.dropdown.take() {
            previous.unmount();
        }
        let config = self.options.load_config();
        self.dropdown =
            Some(BalanceDropDown::mount(config, &self.hub).with_locale(self.options.locale));
        self.status = String::from("Config reloaded");
        tracing::info!("config reloaded, {} listener(s)", self.hub.listener_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ConfigMother, click, scratch_path};
    use crossterm::event::{KeyModifiers, MouseButton};
    use ratatui::{buffer::Buffer, layout::Rect};
    use rstest::rstest;

    fn options(name: &str) -> StartupOptions {
        StartupOptions {
            config_path: Some(scratch_path(name)),
            ..StartupOptions::default()
        }
    }

    fn render(app: &App, now: Instant) -> Buffer {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        if let Some(dropdown) = app.dropdown() {
            dropdown.render_at(area, &mut buf, now);
        }
        buf
    }

    fn summary_center(app: &App) -> (u16, u16) {
        let summary = app.dropdown().map(|d| d.region().summary).unwrap_or_default();
        (summary.x + summary.width / 2, summary.y + 1)
    }

    #[test]
    fn test_overrides_win_over_config() {
        let overrides = ConfigOverrides {
            balance: Some("42".to_string()),
            currency: None,
            account: Some("Acme".to_string()),
        };
        let config = overrides.apply(ConfigMother::with_balance("1", "USD"));

        assert_eq!(config.balance, Balance::from("42"));
        assert_eq!(config.currency, "USD");
        assert_eq!(config.account, "Acme");
    }

    #[test]
    fn test_save_config_round_trips_overrides() {
        let path = scratch_path("app-save.json");
        let _ = std::fs::remove_file(&path);
        let options = StartupOptions {
            config_path: Some(path.clone()),
            overrides: ConfigOverrides {
                currency: Some("CHF".to_string()),
                ..ConfigOverrides::default()
            },
            ..StartupOptions::default()
        };

        let config = options.load_config();
        options.save_config(&config).unwrap();
        let saved = DropDownConfig::try_load_from(&path).unwrap();
        assert_eq!(saved.currency, "CHF");
        assert_eq!(saved, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let app = App::new(options("app-missing.json"));
        let dropdown = app.dropdown().expect("widget should be mounted");
        assert_eq!(dropdown.config(), &DropDownConfig::default());
        assert_eq!(app.hub.listener_count(), 1);
    }

    #[rstest]
    #[case(Action::Quit, true)]
    #[case(Action::Resize(80, 24), false)]
    fn test_exit_flag(#[case] action: Action, #[case] exits: bool) {
        let mut app = App::with_config(DropDownConfig::default(), options("app-exit.json"));
        app.update(action);
        assert_eq!(app.exit, exits);
    }

    #[test]
    fn test_click_summary_then_outside_collapses() {
        let now = Instant::now();
        let mut app = App::with_config(DropDownConfig::default(), options("app-click.json"));
        render(&app, now);

        let (x, y) = summary_center(&app);
        app.update_at(Action::Pointer(click(x, y)), now);
        assert!(app.dropdown().is_some_and(BalanceDropDown::is_expanded));
        assert_eq!(app.status, "Menu opened");

        app.update_at(Action::Pointer(click(0, 39)), now);
        assert!(!app.dropdown().is_some_and(BalanceDropDown::is_expanded));
        assert_eq!(app.dropdown().map(BalanceDropDown::target_height), Some(0));
    }

    #[test]
    fn test_click_summary_twice_closes() {
        let now = Instant::now();
        let mut app = App::with_config(DropDownConfig::default(), options("app-twice.json"));
        render(&app, now);

        let (x, y) = summary_center(&app);
        app.update_at(Action::Pointer(click(x, y)), now);
        app.update_at(Action::Pointer(click(x, y)), now);
        assert!(!app.dropdown().is_some_and(BalanceDropDown::is_expanded));
        assert_eq!(app.status, "Menu closed");
    }

    #[test]
    fn test_moved_does_not_dismiss() {
        let now = Instant::now();
        let mut app = App::with_config(DropDownConfig::default(), options("app-moved.json"));
        render(&app, now);

        let (x, y) = summary_center(&app);
        app.update_at(Action::Pointer(click(x, y)), now);
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 39,
            modifiers: KeyModifiers::NONE,
        };
        app.update_at(Action::Pointer(moved), now);
        assert!(app.dropdown().is_some_and(BalanceDropDown::is_expanded));
    }

    #[test]
    fn test_right_click_outside_dismisses() {
        let now = Instant::now();
        let mut app = App::with_config(DropDownConfig::default(), options("app-right.json"));
        render(&app, now);

        let (x, y) = summary_center(&app);
        app.update_at(Action::Pointer(click(x, y)), now);
        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(0, 39)
        };
        app.update_at(Action::Pointer(right), now);
        assert!(!app.dropdown().is_some_and(BalanceDropDown::is_expanded));
    }

    #[test]
    fn test_reload_remounts_with_single_listener() {
        let now = Instant::now();
        let mut app = App::with_config(DropDownConfig::default(), options("app-reload.json"));
        render(&app, now);
        let (x, y) = summary_center(&app);
        app.update_at(Action::Pointer(click(x, y)), now);

        app.update(Action::ReloadConfig);

        assert_eq!(app.hub.listener_count(), 1);
        assert!(!app.dropdown().is_some_and(BalanceDropDown::is_expanded));
        assert_eq!(app.status, "Config reloaded");
    }
}
