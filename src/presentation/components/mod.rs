mod catalog_browser;
mod debouncer;
mod preference_toggle;

pub use catalog_browser::{BrowserSettings, CatalogBrowser};
pub use debouncer::Debouncer;
pub use preference_toggle::PreferenceToggle;
