//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::{path::PathBuf, time::Duration};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::{
    animation::{CubicBezier, HeightAnimation},
    config::DropDownConfig,
    format::Balance,
    pointer::PointerHub,
    widgets::BalanceDropDown,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ConfigMother;

impl ConfigMother {
    #[must_use]
    pub fn with_rows(items: &[&str], icons: &[&str]) -> DropDownConfig {
        DropDownConfig {
            items: items.iter().map(ToString::to_string).collect(),
            icons: icons.iter().map(ToString::to_string).collect(),
            ..DropDownConfig::default()
        }
    }

    /// Three items, two icons.
    #[must_use]
    pub fn mismatched() -> DropDownConfig {
        Self::with_rows(
            &["Account", "Contacts", "Logout"],
            &["arrow_downward", "contacts"],
        )
    }

    #[must_use]
    pub fn with_item_count(count: usize) -> DropDownConfig {
        DropDownConfig {
            items: (0..count).map(|i| format!("Item {i}")).collect(),
            icons: vec!["logout".to_string(); count],
            ..DropDownConfig::default()
        }
    }

    #[must_use]
    pub fn with_balance(balance: &str, currency: &str) -> DropDownConfig {
        DropDownConfig {
            balance: Balance::from(balance),
            currency: currency.to_string(),
            ..DropDownConfig::default()
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Mount with a zero-duration animation so heights settle immediately.
#[must_use]
pub fn mount_instant(config: DropDownConfig, hub: &PointerHub) -> BalanceDropDown {
    BalanceDropDown::mount(config, hub)
        .with_animation(HeightAnimation::new(Duration::ZERO, CubicBezier::default()))
}

/// Left-button press at a cell.
#[must_use]
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Buffer contents, one string per row.
#[must_use]
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buf.cell((x, y)).map_or(" ", |cell| cell.symbol()))
                .collect()
        })
        .collect()
}

/// A per-process scratch file path in the system temp directory.
#[must_use]
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "balance-dropdown-tests-{}-{name}",
        std::process::id()
    ))
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}
