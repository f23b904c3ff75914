use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data_source: String,
    pub search_debounce_ms: u64,
    pub all_label: String,
    pub no_results_message: String,
    pub load_error_message: String,
    pub show_dark_mode_toggle: bool,
    pub persist_preferences: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl AppConfig {
    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: "data.json".to_string(),
            search_debounce_ms: 300,
            all_label: "All".to_string(),
            no_results_message: "No results found.".to_string(),
            load_error_message:
                "Failed to load the catalog. Check that the data source is valid and reachable."
                    .to_string(),
            show_dark_mode_toggle: true,
            persist_preferences: true,
            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}
