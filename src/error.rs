//! Error types for the balance dropdown.
//!
//! Rendering and interaction never fail; errors only arise when the host
//! loads or saves the widget configuration.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while loading or saving a [`DropDownConfig`](crate::config::DropDownConfig).
#[derive(Debug, Error)]
pub enum DropDownError {
    /// The configuration file could not be read or written.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for the props contract.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No platform configuration directory could be determined.
    #[error(
        "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
    )]
    ConfigDir,
}

// ============================================================================
// Tests
// ============================================================================
