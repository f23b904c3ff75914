use crate::application::use_cases::{RestoreDisplayPreference, ToggleDisplayPreference};
use crate::domain::entities::DisplayPreference;
use crate::presentation::render::RenderSurface;
use std::sync::Arc;

pub struct PreferenceToggle {
    current: DisplayPreference,
    restore: Arc<RestoreDisplayPreference>,
    toggle: Arc<ToggleDisplayPreference>,
}

impl PreferenceToggle {
    pub fn new(
        restore: Arc<RestoreDisplayPreference>,
        toggle: Arc<ToggleDisplayPreference>,
    ) -> Self {
        Self {
            current: DisplayPreference::default(),
            restore,
            toggle,
        }
    }

    pub fn current(&self) -> DisplayPreference {
        self.current
    }

    /// Startup: applies the persisted preference and its icon without a click.
    pub fn initialize(&mut self, surface: &mut impl RenderSurface) {
        self.current = self.restore.execute();
        surface.reflect_display_preference(self.current);
    }

    pub fn toggle(&mut self, surface: &mut impl RenderSurface) {
        self.current = self.toggle.execute(self.current);
        surface.reflect_display_preference(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::PreferenceStore;
    use crate::infrastructure::preferences::JsonPreferenceStore;
    use crate::presentation::render::RecordingSurface;
    use tempfile::TempDir;

    fn toggle_for(store: Arc<dyn PreferenceStore>) -> PreferenceToggle {
        PreferenceToggle::new(
            Arc::new(RestoreDisplayPreference::new(Arc::clone(&store))),
            Arc::new(ToggleDisplayPreference::new(store)),
        )
    }

    #[test]
    fn fresh_install_starts_light_with_moon_icon() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonPreferenceStore::with_path(dir.path().join("preferences.json")));
        let mut surface = RecordingSurface::new();
        let mut toggle = toggle_for(store);

        toggle.initialize(&mut surface);

        assert_eq!(surface.last_preference(), Some(DisplayPreference::Disabled));
        assert_eq!(toggle.current().icon(), "🌙");
    }

    #[test]
    fn toggled_preference_survives_a_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let mut surface = RecordingSurface::new();
            let mut toggle = toggle_for(Arc::new(JsonPreferenceStore::with_path(&path)));
            toggle.initialize(&mut surface);
            toggle.toggle(&mut surface);
            assert_eq!(surface.last_preference(), Some(DisplayPreference::Enabled));
        }

        let mut surface = RecordingSurface::new();
        let mut toggle = toggle_for(Arc::new(JsonPreferenceStore::with_path(&path)));
        toggle.initialize(&mut surface);

        assert_eq!(toggle.current(), DisplayPreference::Enabled);
        assert_eq!(surface.last_preference(), Some(DisplayPreference::Enabled));
        assert_eq!(toggle.current().icon(), "☀");
    }

    #[test]
    fn each_activation_flips_once() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonPreferenceStore::with_path(dir.path().join("preferences.json")));
        let mut surface = RecordingSurface::new();
        let mut toggle = toggle_for(store.clone());
        toggle.initialize(&mut surface);

        toggle.toggle(&mut surface);
        toggle.toggle(&mut surface);
        toggle.toggle(&mut surface);

        assert_eq!(toggle.current(), DisplayPreference::Enabled);
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("enabled"));
    }
}
