use crate::domain::entities::{Binding, CategoryFilter, DisplayPreference};
use crate::presentation::render::{CardView, CardsView, CategoryButtonView, RenderSurface};
use crate::presentation::style;
use eframe::egui;
use egui::{RichText, ScrollArea};

/// What the user did on the surface during one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    SearchEdited(String),
    SearchSubmitted,
    CategoryActivated(CategoryFilter),
    ToggleDisplayPreference,
    Reload,
    OpenCatalog,
}

/// Keeps the last projection pushed by the browser and draws it each frame.
pub struct EguiSurface {
    cards: CardsView,
    buttons: Vec<CategoryButtonView>,
    status: String,
    preference: DisplayPreference,
    restyle: bool,
    show_toggle: bool,
    search_text: String,
}

impl EguiSurface {
    pub fn new(show_toggle: bool) -> Self {
        Self {
            cards: CardsView::Blank,
            buttons: Vec::new(),
            status: String::new(),
            preference: DisplayPreference::default(),
            restyle: false,
            show_toggle,
            search_text: String::new(),
        }
    }

    pub fn apply_pending_style(&mut self, ctx: &egui::Context) {
        if self.restyle {
            style::apply_display_preference(ctx, self.preference);
            self.restyle = false;
        }
    }

    pub fn draw_header(&mut self, ui: &mut egui::Ui, loading: bool) -> Vec<SurfaceEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Vitrine");
            ui.separator();

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_text)
                    .hint_text("Search by name or description")
                    .desired_width(320.0),
            );
            if response.changed() {
                events.push(SurfaceEvent::SearchEdited(self.search_text.clone()));
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(SurfaceEvent::SearchSubmitted);
            }
            if ui.button("Search").clicked() {
                events.push(SurfaceEvent::SearchSubmitted);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.show_toggle
                    && ui
                        .button(self.preference.icon())
                        .on_hover_text("Toggle dark mode")
                        .clicked()
                {
                    events.push(SurfaceEvent::ToggleDisplayPreference);
                }
                if ui
                    .add_enabled(!loading, egui::Button::new("Open…"))
                    .on_hover_text("Load a catalog from a JSON file")
                    .clicked()
                {
                    events.push(SurfaceEvent::OpenCatalog);
                }
                if ui
                    .add_enabled(!loading, egui::Button::new("Reload"))
                    .clicked()
                {
                    events.push(SurfaceEvent::Reload);
                }
                if loading {
                    ui.spinner();
                }
            });
        });

        events
    }

    /// Single dispatcher for every category control: reports the tag of the
    /// activated one, whatever set of buttons is currently rendered.
    pub fn draw_category_filters(&self, ui: &mut egui::Ui) -> Option<SurfaceEvent> {
        let mut activated = None;

        ui.horizontal_wrapped(|ui| {
            for button in &self.buttons {
                if ui.selectable_label(button.active, button.label.as_str()).clicked() {
                    activated = Some(button.tag.clone());
                }
            }
        });

        activated.map(SurfaceEvent::CategoryActivated)
    }

    pub fn draw_status(&self, ui: &mut egui::Ui) {
        if !self.status.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, self.status.as_str());
        }
    }

    pub fn draw_cards(&self, ui: &mut egui::Ui) {
        match &self.cards {
            CardsView::Blank => {}
            CardsView::NoResults(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(message.as_str());
                });
            }
            CardsView::Cards(cards) => {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for card in cards {
                                Self::draw_card(ui, card);
                            }
                        });
                    });
            }
        }
    }

    fn draw_card(ui: &mut egui::Ui, card: &CardView) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().faint_bg_color)
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(style::CARD_WIDTH);
                ui.vertical(|ui| {
                    if let Some(logo) = &card.logo {
                        ui.add(
                            egui::Image::from_uri(logo.url.clone())
                                .max_height(64.0)
                                .max_width(style::CARD_WIDTH),
                        )
                        .on_hover_text(logo.alt_text.as_str());
                    }
                    ui.heading(card.heading.as_str());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Category:").strong());
                        ui.label(card.category.as_str());
                    });
                    ui.label(card.description.as_str());
                    ui.add(
                        egui::Hyperlink::from_label_and_url("Read more", &card.link)
                            .open_in_new_tab(true),
                    );
                });
            });
    }
}

impl RenderSurface for EguiSurface {
    fn bindings(&self) -> Vec<Binding> {
        let mut bindings = Binding::REQUIRED.to_vec();
        if self.show_toggle {
            bindings.push(Binding::DarkModeToggle);
        }
        bindings
    }

    fn render_cards(&mut self, cards: &CardsView) {
        self.cards = cards.clone();
    }

    fn render_category_buttons(&mut self, buttons: &[CategoryButtonView]) {
        self.buttons = buttons.to_vec();
    }

    fn show_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn reflect_display_preference(&mut self, preference: DisplayPreference) {
        self.preference = preference;
        self.restyle = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_binding_follows_configuration() {
        assert!(EguiSurface::new(true).bindings().contains(&Binding::DarkModeToggle));
        assert!(!EguiSurface::new(false).bindings().contains(&Binding::DarkModeToggle));
        assert!(Binding::missing_required(&EguiSurface::new(false).bindings()).is_empty());
    }

    #[test]
    fn preference_change_requests_restyle_once() {
        let ctx = egui::Context::default();
        let mut surface = EguiSurface::new(true);

        surface.reflect_display_preference(DisplayPreference::Enabled);
        surface.apply_pending_style(&ctx);

        assert!(ctx.style().visuals.dark_mode);
        assert!(!surface.restyle);

        surface.reflect_display_preference(DisplayPreference::Disabled);
        surface.apply_pending_style(&ctx);

        assert!(!ctx.style().visuals.dark_mode);
    }
}
