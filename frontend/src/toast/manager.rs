//! Toast lifecycle management.
//!
//! The manager owns the registry of live toasts and advances each one
//! through its phases on a spawned timer chain. Eviction and manual
//! dismissal abort the chain through its [`AbortHandle`], so a replaced
//! toast can never advance or remove its successor.

use super::{Toast, ToastHandle, ToastId, ToastLevel, ToastPhase};
use crate::config::Config;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::debug;

/// Delay before a new toast turns visible.
const ENTER_DELAY: Duration = Duration::from_millis(100);

/// Length of the exit transition between dismissal and removal.
const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Display time used when the caller does not pick one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

struct ActiveToast {
    toast: Toast,
    timer: AbortHandle,
}

type Registry = Arc<Mutex<HashMap<ToastLevel, ActiveToast>>>;

/// Shows toasts and drives their lifecycle. Clones share one registry.
///
/// Showing a toast spawns its timer chain, so the manager has to be used
/// from within a Tokio runtime.
#[derive(Clone)]
pub struct ToastManager {
    registry: Registry,
    default_duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_DURATION)
    }

    /// A manager whose `show` uses the configured display time.
    pub fn from_config(config: &Config) -> Self {
        Self::with_default_duration(Duration::from_millis(config.toast_duration_ms))
    }

    /// A manager whose `show` uses the given display time.
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            registry: Arc::new(Mutex::new(HashMap::new())),
            default_duration,
        }
    }

    /// Shows a toast with the default display time.
    pub fn show(&self, message: impl Into<String>, level: ToastLevel) -> ToastHandle {
        self.show_with_duration(message, level, self.default_duration)
    }

    /// Shows a toast, evicting any live toast of the same level first. The
    /// evicted toast skips its exit transition entirely.
    pub fn show_with_duration(
        &self,
        message: impl Into<String>,
        level: ToastLevel,
        duration: Duration,
    ) -> ToastHandle {
        let toast = Toast {
            id: ToastId::new(),
            message: message.into(),
            level,
            created_at: Utc::now(),
            duration,
            phase: ToastPhase::Created,
        };
        let id = toast.id;

        let mut registry = self.registry.lock().unwrap();
        if let Some(evicted) = registry.remove(&level) {
            evicted.timer.abort();
            debug!("Evicted {} toast {}", level, evicted.toast.id);
        }

        let timer = tokio::spawn(Self::drive(Arc::clone(&self.registry), level, id, duration))
            .abort_handle();
        registry.insert(level, ActiveToast { toast, timer });

        debug!("Showing {} toast {}", level, id);
        ToastHandle::new(id, level)
    }

    /// Timer chain advancing one toast through its phases.
    async fn drive(registry: Registry, level: ToastLevel, id: ToastId, duration: Duration) {
        tokio::time::sleep(ENTER_DELAY).await;
        if !set_phase(&registry, level, id, ToastPhase::Visible) {
            return;
        }

        tokio::time::sleep(duration).await;
        if !set_phase(&registry, level, id, ToastPhase::Dismissing) {
            return;
        }

        tokio::time::sleep(EXIT_DELAY).await;
        let mut registry = registry.lock().unwrap();
        if registry.get(&level).is_some_and(|active| active.toast.id == id) {
            registry.remove(&level);
            debug!("Removed {} toast {}", level, id);
        }
    }

    /// Dismisses a toast immediately, canceling its pending transitions.
    /// Returns whether the toast was still live.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut registry = self.registry.lock().unwrap();
        let level = registry
            .iter()
            .find(|(_, active)| active.toast.id == id)
            .map(|(level, _)| *level);

        match level {
            Some(level) => {
                if let Some(active) = registry.remove(&level) {
                    active.timer.abort();
                    debug!("Dismissed {} toast {}", level, id);
                }
                true
            }
            None => false,
        }
    }

    /// Snapshot of every live toast, in no particular order.
    pub fn active(&self) -> Vec<Toast> {
        let registry = self.registry.lock().unwrap();
        registry.values().map(|active| active.toast.clone()).collect()
    }

    /// Snapshot of one toast, `None` once it is gone.
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        let registry = self.registry.lock().unwrap();
        registry
            .values()
            .find(|active| active.toast.id == id)
            .map(|active| active.toast.clone())
    }

    /// Current phase of a toast. A toast no longer tracked reports
    /// [`ToastPhase::Removed`].
    pub fn phase_of(&self, id: ToastId) -> ToastPhase {
        self.get(id).map(|toast| toast.phase).unwrap_or(ToastPhase::Removed)
    }

    pub fn len(&self) -> usize {
        self.registry.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().unwrap().is_empty()
    }
}

fn set_phase(registry: &Registry, level: ToastLevel, id: ToastId, phase: ToastPhase) -> bool {
    let mut registry = registry.lock().unwrap();
    match registry.get_mut(&level) {
        // The slot may have been retaken between wakeup and lock acquisition.
        Some(active) if active.toast.id == id => {
            active.toast.phase = phase;
            true
        }
        _ => false,
    }
}
