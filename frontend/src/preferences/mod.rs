//! User preference storage.
//!
//! The portal keeps a handful of per-user UI preferences in a string-keyed
//! store. Production uses a JSON file next to the application; tests and
//! ephemeral sessions use an in-memory map. [`UiPreferences`] is the typed
//! facade the UI shell talks to.

use crate::config::Config;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::warn;

/// Key under which the sidebar collapse flag is stored.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebar_collapsed";

/// String-keyed preference storage. Writes are last-write-wins; storage
/// failures are logged, never raised.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for tests and sessions without persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed store persisting across sessions.
///
/// The file is re-read on every lookup and rewritten on every update, so
/// concurrent processes see each other's writes. A missing file is an empty
/// store; an unreadable one is ignored with a warning.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> HashMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(err) => {
                warn!("Ignoring unreadable preference file {}: {}", self.path.display(), err);
                HashMap::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        match serde_json::to_string_pretty(&values) {
            Ok(serialized) => {
                if let Err(err) = fs::write(&self.path, serialized) {
                    warn!("Failed to persist preferences to {}: {}", self.path.display(), err);
                }
            }
            Err(err) => warn!("Failed to serialize preferences: {}", err),
        }
    }
}

/// Typed facade over the raw store.
pub struct UiPreferences {
    store: Box<dyn PreferenceStore>,
}

impl UiPreferences {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// File-backed preferences at the configured path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(FilePreferences::new(config.preferences_path.clone())))
    }

    /// Whether the sidebar was collapsed when the user last toggled it.
    /// Only the exact string `"true"` counts; anything else, including an
    /// unset key, means expanded.
    pub fn sidebar_collapsed(&self) -> bool {
        self.store
            .get(SIDEBAR_COLLAPSED_KEY)
            .is_some_and(|value| value == "true")
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.store
            .set(SIDEBAR_COLLAPSED_KEY, if collapsed { "true" } else { "false" });
    }

    /// Flips the sidebar flag and returns the new state.
    pub fn toggle_sidebar(&self) -> bool {
        let collapsed = !self.sidebar_collapsed();
        self.set_sidebar_collapsed(collapsed);
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark");
        assert_eq!(store.get("theme"), Some("dark".to_string()));

        store.set("theme", "light");
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn sidebar_flag_defaults_to_expanded() {
        let prefs = UiPreferences::new(Box::new(MemoryPreferences::new()));
        assert!(!prefs.sidebar_collapsed());
    }

    #[test]
    fn sidebar_flag_only_honors_the_exact_true_string() {
        let store = MemoryPreferences::new();
        store.set(SIDEBAR_COLLAPSED_KEY, "True");
        let prefs = UiPreferences::new(Box::new(store));
        assert!(!prefs.sidebar_collapsed());

        prefs.set_sidebar_collapsed(true);
        assert!(prefs.sidebar_collapsed());
    }

    #[test]
    fn toggle_flips_and_reports_the_new_state() {
        let prefs = UiPreferences::new(Box::new(MemoryPreferences::new()));
        assert!(prefs.toggle_sidebar());
        assert!(prefs.sidebar_collapsed());
        assert!(!prefs.toggle_sidebar());
        assert!(!prefs.sidebar_collapsed());
    }

    #[test]
    fn file_store_round_trips_across_instances() {
        let path = std::env::temp_dir().join(format!("prefs-{}.json", uuid::Uuid::now_v7()));

        let store = FilePreferences::new(&path);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), None);
        store.set(SIDEBAR_COLLAPSED_KEY, "true");
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), Some("true".to_string()));

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.get(SIDEBAR_COLLAPSED_KEY), Some("true".to_string()));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn configured_preference_file_persists_across_instances() {
        let path = std::env::temp_dir().join(format!("prefs-{}.json", uuid::Uuid::now_v7()));
        let config = Config {
            server_base_url: "http://portal.test".to_string(),
            request_timeout_seconds: 5,
            toast_duration_ms: 5000,
            preferences_path: path.to_string_lossy().into_owned(),
        };

        let prefs = UiPreferences::from_config(&config);
        assert!(!prefs.sidebar_collapsed());
        prefs.set_sidebar_collapsed(true);

        let reopened = UiPreferences::from_config(&config);
        assert!(reopened.sidebar_collapsed());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_preference_file_reads_as_empty() {
        let path = std::env::temp_dir().join(format!("prefs-{}.json", uuid::Uuid::now_v7()));
        fs::write(&path, "not json").unwrap();

        let store = FilePreferences::new(&path);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), None);

        // A write replaces the corrupt file with a valid one.
        store.set(SIDEBAR_COLLAPSED_KEY, "false");
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), Some("false".to_string()));

        fs::remove_file(&path).ok();
    }
}
