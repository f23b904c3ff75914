/// Mount points a render surface has to provide before the browser can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    CardContainer,
    SearchInput,
    StatusRegion,
    SearchButton,
    CategoryFilters,
    DarkModeToggle,
}

impl Binding {
    pub const REQUIRED: [Binding; 5] = [
        Binding::CardContainer,
        Binding::SearchInput,
        Binding::StatusRegion,
        Binding::SearchButton,
        Binding::CategoryFilters,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Binding::CardContainer => "card-container",
            Binding::SearchInput => "search-input",
            Binding::StatusRegion => "error-message",
            Binding::SearchButton => "search-button",
            Binding::CategoryFilters => "category-filters",
            Binding::DarkModeToggle => "dark-mode-toggle",
        }
    }

    pub fn missing_required(provided: &[Binding]) -> Vec<Binding> {
        Self::REQUIRED
            .iter()
            .filter(|binding| !provided.contains(binding))
            .copied()
            .collect()
    }
}
