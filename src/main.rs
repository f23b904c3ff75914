mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::UseCaseContainer;
use domain::repositories::PreferenceStore;
use infrastructure::catalog::repository_for;
use infrastructure::config_repository::ConfigRepository;
use infrastructure::preferences::{JsonPreferenceStore, MemoryPreferenceStore};
use presentation::components::{BrowserSettings, CatalogBrowser, PreferenceToggle};
use presentation::services::{AsyncExecutor, CatalogLoader, logging};
use presentation::style;
use presentation::ui::{EguiSurface, VitrineApp};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config_repository = ConfigRepository::new();
    let config = config_repository.load_or_default();
    if !config_repository.exists() {
        match config_repository.save(&config) {
            Ok(()) => tracing::info!(
                "Wrote default configuration to {}",
                config_repository.path().display()
            ),
            Err(e) => tracing::warn!("Could not write default configuration: {:#}", e),
        }
    }

    let preference_store: Arc<dyn PreferenceStore> = if config.persist_preferences {
        Arc::new(JsonPreferenceStore::new())
    } else {
        tracing::info!("Display preference will not be persisted");
        Arc::new(MemoryPreferenceStore::new())
    };
    let use_cases = Arc::new(UseCaseContainer::new(
        repository_for(&config.data_source),
        preference_store,
    ));

    let surface = EguiSurface::new(config.show_dark_mode_toggle);
    let mut browser = CatalogBrowser::bind(surface, BrowserSettings::from(&config))
        .inspect_err(|e| tracing::error!("Cannot start: {}", e))?;

    let mut preference = PreferenceToggle::new(
        Arc::clone(&use_cases.restore_preference),
        Arc::clone(&use_cases.toggle_preference),
    );
    preference.initialize(browser.surface_mut());

    let loader = CatalogLoader::new(AsyncExecutor::new()?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            style::configure_style(&cc.egui_ctx, preference.current());
            Ok(Box::new(VitrineApp::new(
                &cc.egui_ctx,
                browser,
                preference,
                use_cases,
                loader,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated with an error: {}", e))
}
