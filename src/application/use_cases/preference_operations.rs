use crate::domain::{
    entities::{DARK_MODE_KEY, DisplayPreference},
    repositories::PreferenceStore,
};
use std::sync::Arc;

pub struct RestoreDisplayPreference {
    store: Arc<dyn PreferenceStore>,
}

impl RestoreDisplayPreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Unreadable storage falls back to the default preference.
    pub fn execute(&self) -> DisplayPreference {
        match self.store.get(DARK_MODE_KEY) {
            Ok(value) => {
                let preference = DisplayPreference::from_stored(value.as_deref());
                tracing::debug!("Restored display preference: {}", preference);
                preference
            }
            Err(e) => {
                tracing::warn!("Preference storage unavailable, using default: {:#}", e);
                DisplayPreference::default()
            }
        }
    }
}

pub struct ToggleDisplayPreference {
    store: Arc<dyn PreferenceStore>,
}

impl ToggleDisplayPreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Flips the preference and persists it. A failed write keeps the new
    /// value for the current session only.
    pub fn execute(&self, current: DisplayPreference) -> DisplayPreference {
        let next = current.toggled();

        if let Err(e) = self.store.set(DARK_MODE_KEY, next.as_stored()) {
            tracing::warn!("Could not persist display preference, keeping it for this session: {:#}", e);
        } else {
            tracing::info!("Display preference set to {}", next);
        }

        next
    }
}
