use super::{CardsView, CategoryButtonView, RenderSurface};
use crate::domain::entities::{Binding, DisplayPreference};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Cards(CardsView),
    CategoryButtons(Vec<CategoryButtonView>),
    Status(String),
    Preference(DisplayPreference),
}

/// Test double that records every call instead of drawing.
pub struct RecordingSurface {
    bindings: Vec<Binding>,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        let mut bindings = Binding::REQUIRED.to_vec();
        bindings.push(Binding::DarkModeToggle);
        Self::with_bindings(bindings)
    }

    pub fn with_bindings(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            calls: Vec::new(),
        }
    }

    pub fn last_cards(&self) -> Option<&CardsView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Cards(cards) => Some(cards),
            _ => None,
        })
    }

    pub fn last_buttons(&self) -> Option<&[CategoryButtonView]> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::CategoryButtons(buttons) => Some(buttons.as_slice()),
            _ => None,
        })
    }

    pub fn last_status(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Status(message) => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn last_preference(&self) -> Option<DisplayPreference> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Preference(preference) => Some(*preference),
            _ => None,
        })
    }

    pub fn card_renders(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Cards(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn bindings(&self) -> Vec<Binding> {
        self.bindings.clone()
    }

    fn render_cards(&mut self, cards: &CardsView) {
        self.calls.push(SurfaceCall::Cards(cards.clone()));
    }

    fn render_category_buttons(&mut self, buttons: &[CategoryButtonView]) {
        self.calls.push(SurfaceCall::CategoryButtons(buttons.to_vec()));
    }

    fn show_status(&mut self, message: &str) {
        self.calls.push(SurfaceCall::Status(message.to_string()));
    }

    fn reflect_display_preference(&mut self, preference: DisplayPreference) {
        self.calls.push(SurfaceCall::Preference(preference));
    }
}
