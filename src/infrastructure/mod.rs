pub mod catalog;
pub mod config_repository;
pub mod preferences;

use std::path::PathBuf;

/// `~/.config/vitrine`, or the working directory when `HOME` is unset.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("vitrine")
    } else {
        PathBuf::from(".")
    }
}
