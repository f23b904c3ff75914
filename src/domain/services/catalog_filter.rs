use crate::domain::entities::{CategoryFilter, Entry, FilterState};
use std::collections::HashSet;

pub struct CatalogFilter;

impl CatalogFilter {
    /// Entries passing both the category and the search predicate, in input order.
    pub fn compute_visible<'a>(entries: &'a [Entry], state: &FilterState) -> Vec<&'a Entry> {
        let needle = state.search_text().to_lowercase();

        entries
            .iter()
            .filter(|entry| state.selected_category().matches(&entry.category))
            .filter(|entry| needle.is_empty() || Self::matches_search(entry, &needle))
            .collect()
    }

    /// `All` first, then each category in order of first appearance.
    pub fn derive_categories(entries: &[Entry]) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut categories = vec![CategoryFilter::All];

        for entry in entries {
            if seen.insert(entry.category.as_str()) {
                categories.push(CategoryFilter::named(entry.category.clone()));
            }
        }

        categories
    }

    fn matches_search(entry: &Entry, needle: &str) -> bool {
        entry.name.to_lowercase().contains(needle)
            || entry.description.to_lowercase().contains(needle)
    }
}
