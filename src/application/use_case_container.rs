use crate::application::use_cases::*;
use crate::domain::repositories::{EntryRepository, PreferenceStore};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub load_catalog: Arc<LoadCatalog>,
    pub restore_preference: Arc<RestoreDisplayPreference>,
    pub toggle_preference: Arc<ToggleDisplayPreference>,
}

impl UseCaseContainer {
    pub fn new(
        entry_repository: Arc<dyn EntryRepository>,
        preference_store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            load_catalog: Arc::new(LoadCatalog::new(entry_repository)),
            restore_preference: Arc::new(RestoreDisplayPreference::new(Arc::clone(
                &preference_store,
            ))),
            toggle_preference: Arc::new(ToggleDisplayPreference::new(preference_store)),
        }
    }
}
