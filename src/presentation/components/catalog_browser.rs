use crate::application::dto::CatalogSnapshot;
use crate::domain::entities::{AppConfig, Binding, CategoryFilter, Entry, FilterState};
use crate::domain::errors::{LoadError, StartupError};
use crate::domain::services::CatalogFilter;
use crate::presentation::components::Debouncer;
use crate::presentation::render::{CardsView, CategoryButtonView, RenderSurface};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct BrowserSettings {
    pub all_label: String,
    pub no_results_message: String,
    pub load_error_message: String,
    pub search_debounce: Duration,
}

impl From<&AppConfig> for BrowserSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            all_label: config.all_label.clone(),
            no_results_message: config.no_results_message.clone(),
            load_error_message: config.load_error_message.clone(),
            search_debounce: config.search_debounce(),
        }
    }
}

/// Owns the loaded catalog and the filter state, and pushes projections to
/// the surface whenever either changes.
pub struct CatalogBrowser<S: RenderSurface> {
    surface: S,
    settings: BrowserSettings,
    entries: Vec<Entry>,
    categories: Vec<CategoryFilter>,
    filter: FilterState,
    search_input: String,
    pending_search: Debouncer<String>,
    loaded: bool,
    visible_count: usize,
}

impl<S: RenderSurface> CatalogBrowser<S> {
    /// Fails when the surface lacks any required mount point.
    pub fn bind(surface: S, settings: BrowserSettings) -> Result<Self, StartupError> {
        let missing = Binding::missing_required(&surface.bindings());
        if !missing.is_empty() {
            return Err(StartupError::MissingBindings(missing));
        }

        Ok(Self {
            surface,
            pending_search: Debouncer::new(settings.search_debounce),
            settings,
            entries: Vec::new(),
            categories: vec![CategoryFilter::All],
            filter: FilterState::new(),
            search_input: String::new(),
            loaded: false,
            visible_count: 0,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_search.deadline()
    }

    pub fn on_catalog_loaded(&mut self, result: Result<CatalogSnapshot, LoadError>) {
        match result {
            Ok(snapshot) => self.install_catalog(snapshot),
            Err(e) => self.show_load_error(&e),
        }
    }

    fn install_catalog(&mut self, snapshot: CatalogSnapshot) {
        self.entries = snapshot.entries;
        self.categories = snapshot.categories;
        self.loaded = true;

        if !self.categories.contains(self.filter.selected_category()) {
            tracing::info!(
                "Category '{}' no longer exists, showing all entries",
                self.filter.selected_category()
            );
            self.filter.set_selected_category(CategoryFilter::All);
        }

        self.render_category_buttons();
        self.apply_filters();
        self.surface.show_status("");
    }

    fn show_load_error(&mut self, error: &LoadError) {
        tracing::error!("Catalog unavailable: {}", error);
        self.entries.clear();
        self.categories = vec![CategoryFilter::All];
        self.loaded = false;
        self.visible_count = 0;
        self.surface.render_cards(&CardsView::Blank);
        self.surface.render_category_buttons(&[]);
        self.surface.show_status(&self.settings.load_error_message);
    }

    /// Activation of a category control. Tags that do not belong to the
    /// loaded catalog are ignored.
    pub fn select_category(&mut self, tag: CategoryFilter) -> bool {
        if !self.categories.contains(&tag) {
            tracing::warn!("Ignoring activation of unknown category '{}'", tag);
            return false;
        }

        tracing::debug!("Category selected: {}", tag);
        self.filter.set_selected_category(tag);
        self.render_category_buttons();
        self.pending_search.cancel();
        self.apply_filters();
        true
    }

    /// Keystroke in the search input: (re)schedules one debounced apply.
    pub fn search_input_changed(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.pending_search.schedule(self.search_input.clone(), now);
    }

    /// Explicit search trigger: applies immediately.
    pub fn submit_search(&mut self) {
        self.pending_search.cancel();
        self.apply_filters();
    }

    /// Runs the debounced search once its quiet period has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_search.poll(now) {
            Some(text) => {
                self.search_input = text;
                self.apply_filters();
                true
            }
            None => false,
        }
    }

    pub fn apply_filters(&mut self) {
        self.filter.set_search_text(self.search_input.clone());

        if !self.loaded {
            return;
        }

        let visible = CatalogFilter::compute_visible(&self.entries, &self.filter);
        tracing::debug!(
            "Filter '{}' / '{}' matched {} of {} entries",
            self.filter.selected_category(),
            self.filter.search_text(),
            visible.len(),
            self.entries.len()
        );

        self.visible_count = visible.len();
        let view = CardsView::project(&visible, &self.settings.no_results_message);
        self.surface.render_cards(&view);
    }

    fn render_category_buttons(&mut self) {
        let buttons = CategoryButtonView::project(
            &self.categories,
            self.filter.selected_category(),
            &self.settings.all_label,
        );
        self.surface.render_category_buttons(&buttons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::render::{RecordingSurface, SurfaceCall};
    use chrono::Local;

    fn settings() -> BrowserSettings {
        BrowserSettings {
            all_label: "All".to_string(),
            no_results_message: "No results found.".to_string(),
            load_error_message: "Failed to load the catalog.".to_string(),
            search_debounce: Duration::from_millis(300),
        }
    }

    fn entry(name: &str, category: &str, description: &str) -> Entry {
        Entry::new(
            name.to_string(),
            category.to_string(),
            description.to_string(),
            format!("https://{}.example", name.to_lowercase().replace(' ', "-")),
        )
    }

    fn snapshot(entries: Vec<Entry>) -> CatalogSnapshot {
        CatalogSnapshot {
            categories: CatalogFilter::derive_categories(&entries),
            entries,
            source: "test".to_string(),
            loaded_at: Local::now(),
        }
    }

    fn loaded_browser(entries: Vec<Entry>) -> CatalogBrowser<RecordingSurface> {
        let mut browser = CatalogBrowser::bind(RecordingSurface::new(), settings()).unwrap();
        browser.on_catalog_loaded(Ok(snapshot(entries)));
        browser
    }

    fn headings(browser: &CatalogBrowser<RecordingSurface>) -> Vec<String> {
        match browser.surface().last_cards() {
            Some(CardsView::Cards(cards)) => cards.iter().map(|c| c.heading.clone()).collect(),
            _ => Vec::new(),
        }
    }

    fn active_tags(browser: &CatalogBrowser<RecordingSurface>) -> Vec<CategoryFilter> {
        browser
            .surface()
            .last_buttons()
            .unwrap_or_default()
            .iter()
            .filter(|b| b.active)
            .map(|b| b.tag.clone())
            .collect()
    }

    #[test]
    fn bind_fails_when_required_elements_are_missing() {
        let surface = RecordingSurface::with_bindings(vec![Binding::CardContainer]);

        let Err(StartupError::MissingBindings(missing)) = CatalogBrowser::bind(surface, settings())
        else {
            panic!("expected a startup failure");
        };

        assert_eq!(
            missing,
            vec![
                Binding::SearchInput,
                Binding::StatusRegion,
                Binding::SearchButton,
                Binding::CategoryFilters
            ]
        );
    }

    #[test]
    fn bind_succeeds_without_the_optional_toggle() {
        let surface = RecordingSurface::with_bindings(Binding::REQUIRED.to_vec());

        assert!(CatalogBrowser::bind(surface, settings()).is_ok());
    }

    #[test]
    fn single_entry_catalog_renders_one_card_and_two_buttons() {
        let browser = loaded_browser(vec![entry("Acme Co", "Retail", "Sells widgets")]);

        let Some(CardsView::Cards(cards)) = browser.surface().last_cards() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].heading, "Acme Co");
        assert_eq!(cards[0].logo, None);
        assert_eq!(cards[0].category, "Retail");
        assert_eq!(cards[0].description, "Sells widgets");
        assert_eq!(cards[0].link, "https://acme-co.example");

        let buttons = browser.surface().last_buttons().unwrap();
        let labels: Vec<_> = buttons.iter().map(|b| (b.label.as_str(), b.active)).collect();
        assert_eq!(labels, vec![("All", true), ("Retail", false)]);
        assert_eq!(browser.surface().last_status(), Some(""));
    }

    #[test]
    fn load_failure_shows_message_and_leaves_cards_blank() {
        let mut browser = CatalogBrowser::bind(RecordingSurface::new(), settings()).unwrap();

        browser.on_catalog_loaded(Err(LoadError::Status(404)));

        assert_eq!(browser.surface().last_status(), Some("Failed to load the catalog."));
        assert_eq!(browser.surface().last_cards(), Some(&CardsView::Blank));
        assert!(!browser.is_loaded());

        browser.search_input_changed("x", Instant::now());
        browser.submit_search();
        assert_eq!(browser.surface().last_cards(), Some(&CardsView::Blank));
    }

    #[test]
    fn category_click_filters_immediately() {
        let mut browser = loaded_browser(vec![
            entry("one", "a", ""),
            entry("two", "b", ""),
            entry("three", "a", ""),
        ]);

        assert!(browser.select_category(CategoryFilter::named("a")));

        assert_eq!(headings(&browser), vec!["one", "three"]);
        assert_eq!(browser.visible_count(), 2);
    }

    #[test]
    fn only_one_category_is_ever_active() {
        let mut browser = loaded_browser(vec![
            entry("one", "a", ""),
            entry("two", "b", ""),
            entry("three", "c", ""),
        ]);

        let clicks = [
            CategoryFilter::named("b"),
            CategoryFilter::named("c"),
            CategoryFilter::All,
            CategoryFilter::named("a"),
            CategoryFilter::named("a"),
        ];
        for tag in clicks {
            browser.select_category(tag.clone());

            assert_eq!(active_tags(&browser), vec![tag.clone()]);
            assert_eq!(browser.filter().selected_category(), &tag);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut browser = loaded_browser(vec![entry("one", "a", "")]);
        browser.surface_mut().clear();

        assert!(!browser.select_category(CategoryFilter::named("zzz")));

        assert_eq!(browser.filter().selected_category(), &CategoryFilter::All);
        assert!(browser.surface().calls.is_empty());
    }

    #[test]
    fn rapid_typing_applies_once_with_last_text() {
        let mut browser = loaded_browser(vec![entry("Foo Bar", "a", ""), entry("Baz", "a", "")]);
        browser.surface_mut().clear();
        let start = Instant::now();

        for (i, text) in ["b", "ba", "baz"].iter().enumerate() {
            let now = start + Duration::from_millis(100 * i as u64);
            browser.search_input_changed(*text, now);
            assert!(!browser.tick(now));
        }

        assert_eq!(browser.surface().card_renders(), 0);
        assert!(browser.tick(start + Duration::from_millis(500)));
        assert!(!browser.tick(start + Duration::from_millis(900)));

        assert_eq!(browser.surface().card_renders(), 1);
        assert_eq!(browser.filter().search_text(), "baz");
        assert_eq!(headings(&browser), vec!["Baz"]);
    }

    #[test]
    fn search_button_skips_the_debounce() {
        let mut browser = loaded_browser(vec![entry("Foo Bar", "a", ""), entry("Baz", "a", "")]);
        browser.surface_mut().clear();
        let now = Instant::now();

        browser.search_input_changed("FOO", now);
        browser.submit_search();

        assert_eq!(headings(&browser), vec!["Foo Bar"]);
        assert_eq!(browser.next_deadline(), None);
        assert!(!browser.tick(now + Duration::from_secs(1)));
        assert_eq!(browser.surface().card_renders(), 1);
    }

    #[test]
    fn search_and_category_combine() {
        let mut browser = loaded_browser(vec![
            entry("Foo Bar", "a", ""),
            entry("Foo Baz", "b", ""),
            entry("Other", "a", "has foo inside"),
        ]);

        browser.search_input_changed("foo", Instant::now());
        browser.select_category(CategoryFilter::named("a"));

        assert_eq!(headings(&browser), vec!["Foo Bar", "Other"]);
    }

    #[test]
    fn empty_result_renders_only_the_placeholder() {
        let mut browser = loaded_browser(vec![entry("Foo", "a", "")]);

        browser.search_input_changed("nothing matches", Instant::now());
        browser.submit_search();

        assert_eq!(
            browser.surface().last_cards(),
            Some(&CardsView::NoResults("No results found.".to_string()))
        );
        assert_eq!(browser.visible_count(), 0);
    }

    #[test]
    fn reload_resets_a_vanished_category() {
        let mut browser = loaded_browser(vec![entry("one", "a", ""), entry("two", "b", "")]);
        browser.select_category(CategoryFilter::named("b"));

        browser.on_catalog_loaded(Ok(snapshot(vec![entry("three", "a", "")])));

        assert_eq!(browser.filter().selected_category(), &CategoryFilter::All);
        assert_eq!(active_tags(&browser), vec![CategoryFilter::All]);
        assert_eq!(headings(&browser), vec!["three"]);
    }

    #[test]
    fn reload_keeps_a_surviving_category() {
        let mut browser = loaded_browser(vec![entry("one", "a", ""), entry("two", "b", "")]);
        browser.select_category(CategoryFilter::named("b"));

        browser.on_catalog_loaded(Ok(snapshot(vec![entry("three", "b", ""), entry("four", "c", "")])));

        assert_eq!(active_tags(&browser), vec![CategoryFilter::named("b")]);
        assert_eq!(headings(&browser), vec!["three"]);
    }

    #[test]
    fn successful_load_clears_previous_error() {
        let mut browser = CatalogBrowser::bind(RecordingSurface::new(), settings()).unwrap();
        browser.on_catalog_loaded(Err(LoadError::Transport("offline".into())));

        browser.on_catalog_loaded(Ok(snapshot(vec![entry("one", "a", "")])));

        assert_eq!(browser.surface().last_status(), Some(""));
        let status_calls: Vec<_> = browser
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Status(_)))
            .collect();
        assert_eq!(status_calls.len(), 2);
    }
}
