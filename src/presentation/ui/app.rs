use crate::application::UseCaseContainer;
use crate::application::use_cases::LoadCatalog;
use crate::domain::entities::CategoryFilter;
use crate::infrastructure::catalog::FileEntryRepository;
use crate::presentation::components::{CatalogBrowser, PreferenceToggle};
use crate::presentation::services::CatalogLoader;
use crate::presentation::ui::{EguiSurface, SurfaceEvent};
use eframe::egui;
use std::sync::Arc;
use std::time::Instant;

pub struct VitrineApp {
    browser: CatalogBrowser<EguiSurface>,
    preference: PreferenceToggle,
    use_cases: Arc<UseCaseContainer>,
    loader: CatalogLoader,
    last_load_summary: Option<String>,
}

impl VitrineApp {
    pub fn new(
        ctx: &egui::Context,
        browser: CatalogBrowser<EguiSurface>,
        preference: PreferenceToggle,
        use_cases: Arc<UseCaseContainer>,
        loader: CatalogLoader,
    ) -> Self {
        let mut app = Self {
            browser,
            preference,
            use_cases,
            loader,
            last_load_summary: None,
        };

        let use_case = Arc::clone(&app.use_cases.load_catalog);
        app.start_load(ctx, use_case);
        app
    }

    fn start_load(&mut self, ctx: &egui::Context, use_case: Arc<LoadCatalog>) {
        tracing::info!("Starting catalog load from {}", use_case.source());
        let ctx = ctx.clone();
        self.loader.start(use_case, move || ctx.request_repaint());
    }

    fn open_catalog_file(&mut self, ctx: &egui::Context) {
        let picked = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file();

        match picked {
            Some(path) => {
                let repository = Arc::new(FileEntryRepository::new(path));
                self.start_load(ctx, Arc::new(LoadCatalog::new(repository)));
            }
            None => tracing::debug!("Open catalog cancelled"),
        }
    }

    fn poll_load(&mut self) {
        if let Some(result) = self.loader.poll() {
            self.last_load_summary = result.as_ref().ok().map(|snapshot| snapshot.summary());
            self.browser.on_catalog_loaded(result);
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, events: Vec<SurfaceEvent>) {
        for event in events {
            match event {
                SurfaceEvent::SearchEdited(text) => {
                    self.browser.search_input_changed(text, Instant::now());
                }
                SurfaceEvent::SearchSubmitted => self.browser.submit_search(),
                SurfaceEvent::CategoryActivated(tag) => {
                    self.browser.select_category(tag);
                }
                SurfaceEvent::ToggleDisplayPreference => {
                    self.preference.toggle(self.browser.surface_mut());
                }
                SurfaceEvent::Reload => {
                    let use_case = Arc::clone(&self.use_cases.load_catalog);
                    self.start_load(ctx, use_case);
                }
                SurfaceEvent::OpenCatalog => self.open_catalog_file(ctx),
            }
        }
    }

    fn footer_text(&self) -> String {
        if self.loader.is_loading() {
            return "Loading catalog...".to_string();
        }

        match &self.last_load_summary {
            Some(summary) if self.browser.is_loaded() => {
                let scope = match self.browser.filter().selected_category() {
                    CategoryFilter::All => String::new(),
                    CategoryFilter::Named(name) => format!(" in {}", name),
                };
                format!(
                    "Showing {} of {}{} | {}",
                    self.browser.visible_count(),
                    self.browser.entries().len(),
                    scope,
                    summary
                )
            }
            _ => String::new(),
        }
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        let now = Instant::now();
        self.browser.tick(now);
        self.browser.surface_mut().apply_pending_style(ctx);

        let loading = self.loader.is_loading();
        let mut events = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            let surface = self.browser.surface_mut();
            events.extend(surface.draw_header(ui, loading));
            events.extend(surface.draw_category_filters(ui));
            surface.draw_status(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.small(self.footer_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.browser.surface().draw_cards(ui);
        });

        self.dispatch(ctx, events);

        if let Some(deadline) = self.browser.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
