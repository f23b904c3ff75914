use std::fmt;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Light/dark display preference. `Enabled` means dark mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Enabled,
    #[default]
    Disabled,
}

impl DisplayPreference {
    /// Anything other than the literal "enabled" reads as disabled.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("enabled") => Self::Enabled,
            _ => Self::Disabled,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Icon reflects the current mode: sun while dark, moon while light.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Enabled => "☀",
            Self::Disabled => "🌙",
        }
    }
}

impl fmt::Display for DisplayPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_stored())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_unknown_value_is_disabled() {
        assert_eq!(DisplayPreference::from_stored(None), DisplayPreference::Disabled);
        assert_eq!(
            DisplayPreference::from_stored(Some("ENABLED")),
            DisplayPreference::Disabled
        );
        assert_eq!(
            DisplayPreference::from_stored(Some("disabled")),
            DisplayPreference::Disabled
        );
    }

    #[test]
    fn enabled_value_round_trips() {
        let pref = DisplayPreference::from_stored(Some("enabled"));

        assert_eq!(pref, DisplayPreference::Enabled);
        assert_eq!(pref.as_stored(), "enabled");
    }

    #[test]
    fn icon_tracks_current_mode() {
        assert_eq!(DisplayPreference::Enabled.icon(), "☀");
        assert_eq!(DisplayPreference::Disabled.icon(), "🌙");
        assert_eq!(DisplayPreference::Disabled.toggled(), DisplayPreference::Enabled);
    }
}
