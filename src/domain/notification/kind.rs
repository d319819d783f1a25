//! Notifier backend selector

use std::fmt;

/// Notification backend chosen from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    /// Popups through notify-send
    Desktop,
    /// One log line per notification
    Log,
    /// Notifications disabled
    #[default]
    Nop,
}

impl NotifierKind {
    /// Map a configuration selector to a backend.
    ///
    /// Matching is exact. Unknown or empty selectors disable notifications
    /// instead of failing.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "desktop" => Self::Desktop,
            "log" => Self::Log,
            "none" => Self::Nop,
            _ => Self::Nop,
        }
    }

    /// Selector string that maps back to this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Log => "log",
            Self::Nop => "none",
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
