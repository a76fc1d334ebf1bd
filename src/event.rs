use crossterm::event::MouseEvent;

/// Application actions triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Reload the config file and remount the widget.
    ReloadConfig,
    /// Mouse press or movement, forwarded to the pointer hub and the widget.
    Pointer(MouseEvent),
    Resize(u16, u16),
}
