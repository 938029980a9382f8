//! Filtered pet grid with its empty state, shared by the pet pages.

use egui::{RichText, Ui};
use egui_phosphor::regular as icons;
use petadopt_core::{EmptyState, PetView, visible};
use petadopt_model::{PetFlag, PetId};

use crate::components::{PetCardAction, PetCardVariant, button, filter_bar, pet_card};
use crate::state::AppState;
use crate::theme::{palette, spacing};

pub fn page_header(ui: &mut Ui, title: &str, subtitle: Option<&str>) {
    ui.add_space(spacing::MD);
    ui.label(RichText::new(title).size(24.0).strong());
    if let Some(subtitle) = subtitle {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(spacing::MD);
}

/// Filter bar, cards, and the empty-state panel when nothing is visible.
pub fn pet_grid(ui: &mut Ui, state: &mut AppState, view: PetView, variant: PetCardVariant) {
    let theme = palette(state.settings.general.dark_mode);
    let salt = format!("category_filter_{view:?}");
    filter_bar(ui, &salt, state.filter_mut(view));
    ui.add_space(spacing::MD);

    let mut actions: Vec<(PetId, PetCardAction)> = Vec::new();
    let mut clear_filters = false;

    let pets = state.repo.list();
    let filter = state.filter(view);
    match EmptyState::classify(pets, view, filter) {
        Some(empty) => {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::XL);
                ui.label(RichText::new(icons::MAGNIFYING_GLASS).size(40.0).weak());
                ui.add_space(spacing::SM);
                ui.label(RichText::new(empty.headline(view)).size(18.0).strong());
                ui.label(RichText::new(empty.message(view)).weak());
                ui.add_space(spacing::MD);
                if (empty.offers_reset() || view == PetView::Feed)
                    && filter.is_active()
                    && button::primary(ui, "Clear All Filters", false)
                {
                    clear_filters = true;
                }
            });
        }
        None => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(spacing::MD, spacing::MD);
                for pet in visible(pets, view, filter) {
                    if let Some(action) = pet_card(ui, pet, variant, &theme) {
                        actions.push((pet.id.clone(), action));
                    }
                }
            });
        }
    }

    if clear_filters {
        state.filter_mut(view).reset();
    }
    for (id, action) in actions {
        apply(state, &id, action);
    }
}

fn apply(state: &mut AppState, id: &PetId, action: PetCardAction) {
    match action {
        PetCardAction::ToggleFavourite => state.toggle_flag(id, PetFlag::Favourite),
        PetCardAction::ToggleInterest => state.toggle_flag(id, PetFlag::Interested),
        PetCardAction::ShowOwner => state.show_owner(),
        PetCardAction::StartAdoption => state.start_adoption(id),
        PetCardAction::ConfirmReceived => state.open_adoption(id),
    }
}
