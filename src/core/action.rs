//! Actions that panel modules can return to communicate with the app

/// Actions returned by panels to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Copy text to the clipboard
    Copy(String),

    /// Show notification in the status line
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
