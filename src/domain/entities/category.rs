use std::fmt;

/// Stable tag carried by a category control.
///
/// `All` is the sentinel and never collides with a real category that happens
/// to be called "all".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(category: impl Into<String>) -> Self {
        Self::Named(category.into())
    }

    /// Exact, case-sensitive match against an entry category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }

    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Self::All => all_label,
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Named(name) => write!(f, "{}", name),
        }
    }
}
