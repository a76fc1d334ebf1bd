//! Widget components of the balance dropdown.
//!
//! # Module Structure
//!
//! - [`common`]: Small reusable pieces (caption-over-value columns)
//! - [`dropdown`]: The balance dropdown component, its state machine and view

pub mod common;
pub mod dropdown;

pub use common::LabeledValue;
pub use dropdown::{
    BalanceDropDown, DropDownEvent, DropDownLayout, HeightCommand, HitRegion,
    InteractionController, PanelState,
};
