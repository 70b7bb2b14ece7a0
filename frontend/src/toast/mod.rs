//! Toast notifications.
//!
//! Transient feedback messages shown over the page. At most one toast per
//! severity level is live at a time; showing another evicts the previous
//! one immediately. A toast is registered in the `Created` phase, turns
//! `Visible` after a short enter delay, starts `Dismissing` once its
//! display time elapses, and is dropped from the registry when the exit
//! transition ends.

pub mod manager;

pub use manager::{DEFAULT_DURATION, ToastManager};

use chrono::{DateTime, Utc};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

/// Severity of a toast, driving its styling and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Warning => "warning",
            ToastLevel::Info => "info",
        }
    }

    /// Icon name shown next to the message.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "check-circle",
            ToastLevel::Error => "exclamation-circle",
            ToastLevel::Warning => "exclamation-triangle",
            ToastLevel::Info => "info-circle",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToastLevel {
    type Err = Infallible;

    /// Unrecognized names fall back to `Info`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => ToastLevel::Success,
            "error" => ToastLevel::Error,
            "warning" => ToastLevel::Warning,
            _ => ToastLevel::Info,
        })
    }
}

/// Unique identifier of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub(crate) fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Registered but not yet transitioned in.
    Created,
    /// Fully shown.
    Visible,
    /// Exit transition running; removal follows.
    Dismissing,
    /// Gone from the registry, whether by timeout, dismissal, or eviction.
    Removed,
}

/// One live notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: DateTime<Utc>,
    pub duration: Duration,
    pub phase: ToastPhase,
}

/// Reference to a shown toast, usable for manual dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle {
    id: ToastId,
    level: ToastLevel,
}

impl ToastHandle {
    pub(crate) fn new(id: ToastId, level: ToastLevel) -> Self {
        Self { id, level }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn level(&self) -> ToastLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_round_trip() {
        for level in [
            ToastLevel::Success,
            ToastLevel::Error,
            ToastLevel::Warning,
            ToastLevel::Info,
        ] {
            let parsed: ToastLevel = level.as_str().parse().unwrap();
            assert_eq!(parsed, level);
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn unknown_level_names_fall_back_to_info() {
        let parsed: ToastLevel = "critical".parse().unwrap();
        assert_eq!(parsed, ToastLevel::Info);
        assert_eq!(ToastLevel::default(), ToastLevel::Info);
    }

    #[test]
    fn icons_match_levels() {
        assert_eq!(ToastLevel::Success.icon(), "check-circle");
        assert_eq!(ToastLevel::Error.icon(), "exclamation-circle");
        assert_eq!(ToastLevel::Warning.icon(), "exclamation-triangle");
        assert_eq!(ToastLevel::Info.icon(), "info-circle");
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }
}
