//! Common reusable widget components.
//!
//! - [`LabeledValue`]: A caption line above a value line

mod labeled;

pub use labeled::LabeledValue;
