//! Balance summary widget with an animated dropdown menu for ratatui.
//!
//! The widget shows a formatted balance and an account name. Clicking it
//! opens a panel of menu rows; clicking anywhere else closes it. Outside
//! clicks reach every mounted widget through a [`PointerHub`].

pub mod animation;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod format;
pub mod handler;
pub mod icons;
pub mod pointer;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigIssue, DropDownConfig};
pub use error::DropDownError;
pub use format::{Balance, NumberLocale, format_balance};
pub use pointer::{PointerHub, Subscription};
pub use widgets::{BalanceDropDown, DropDownEvent, PanelState};
