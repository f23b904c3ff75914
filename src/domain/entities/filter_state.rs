use super::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    selected_category: CategoryFilter,
    search_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn set_selected_category(&mut self, category: CategoryFilter) {
        self.selected_category = category;
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }
}

#[cfg(test)]
impl FilterState {
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.selected_category = category;
        self
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }
}
