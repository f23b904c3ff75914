pub mod binding;
pub mod category;
pub mod config;
pub mod entry;
pub mod filter_state;
pub mod preference;

pub use binding::Binding;
pub use category::CategoryFilter;
pub use config::AppConfig;
pub use entry::Entry;
pub use filter_state::FilterState;
pub use preference::{DARK_MODE_KEY, DisplayPreference};
