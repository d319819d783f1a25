//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::NotifierKind;

/// `[notifications]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Backend selector: "desktop", "log" or "none"
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub notifications: Option<NotificationsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            notifications: Some(NotificationsConfig {
                kind: Some(NotifierKind::Desktop.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Config that only sets the notification selector
    pub fn with_notifications(selector: impl Into<String>) -> Self {
        Self {
            notifications: Some(NotificationsConfig {
                kind: Some(selector.into()),
            }),
        }
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            notifications: Self::merge_notifications(self.notifications, other.notifications),
        }
    }

    fn merge_notifications(
        base: Option<NotificationsConfig>,
        other: Option<NotificationsConfig>,
    ) -> Option<NotificationsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(NotificationsConfig {
                kind: o.kind.or(b.kind),
            }),
        }
    }

    /// Raw selector string, or "" when unset
    pub fn notifications_selector(&self) -> &str {
        self.notifications
            .as_ref()
            .and_then(|n| n.kind.as_deref())
            .unwrap_or("")
    }

    /// Backend selected by this config. Unset or unknown values disable notifications.
    pub fn notifier_kind(&self) -> NotifierKind {
        NotifierKind::from_selector(self.notifications_selector())
    }
}
