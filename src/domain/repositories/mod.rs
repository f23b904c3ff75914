pub mod entry_repository;
pub mod preference_repository;

pub use entry_repository::EntryRepository;
pub use preference_repository::PreferenceStore;
