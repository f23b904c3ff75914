use super::{CardsView, CategoryButtonView};
use crate::domain::entities::{Binding, DisplayPreference};

/// Display side of the catalog browser.
///
/// Every render call fully replaces what the surface showed before.
pub trait RenderSurface {
    /// Mount points this surface provides.
    fn bindings(&self) -> Vec<Binding>;

    fn render_cards(&mut self, cards: &CardsView);

    fn render_category_buttons(&mut self, buttons: &[CategoryButtonView]);

    /// Error/status region. An empty message clears it.
    fn show_status(&mut self, message: &str);

    /// Applies the dark style flag and updates the toggle icon.
    fn reflect_display_preference(&mut self, preference: DisplayPreference);
}
