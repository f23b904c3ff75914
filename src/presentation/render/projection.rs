//! Pure projections from catalog state to what a surface displays.
//!
//! Surfaces never see entries or filter state directly, only these views, so
//! the same input always produces the same output.

use crate::domain::entities::{CategoryFilter, Entry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub logo: Option<LogoView>,
    pub heading: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoView {
    pub url: String,
    pub alt_text: String,
}

impl CardView {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            logo: entry.logo_url().map(|url| LogoView {
                url: url.to_string(),
                alt_text: entry.logo_alt_text(),
            }),
            heading: entry.name.clone(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            link: entry.link.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardsView {
    /// Nothing rendered, e.g. after a failed load.
    #[default]
    Blank,
    NoResults(String),
    Cards(Vec<CardView>),
}

impl CardsView {
    pub fn project(entries: &[&Entry], no_results_message: &str) -> Self {
        if entries.is_empty() {
            return Self::NoResults(no_results_message.to_string());
        }

        Self::Cards(entries.iter().map(|entry| CardView::from_entry(entry)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButtonView {
    pub tag: CategoryFilter,
    pub label: String,
    pub active: bool,
}

impl CategoryButtonView {
    /// One control per category; only the one matching `selected` is active.
    pub fn project(
        categories: &[CategoryFilter],
        selected: &CategoryFilter,
        all_label: &str,
    ) -> Vec<Self> {
        categories
            .iter()
            .map(|category| Self {
                tag: category.clone(),
                label: category.label(all_label).to_string(),
                active: category == selected,
            })
            .collect()
    }
}
