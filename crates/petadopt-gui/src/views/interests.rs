//! Pets the user has shown interest in, with their adoption progress.

use egui::Ui;
use petadopt_core::PetView;

use super::pet_grid::{page_header, pet_grid};
use crate::components::PetCardVariant;
use crate::state::AppState;

pub struct InterestsView;

impl InterestsView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                page_header(
                    ui,
                    "My Interests",
                    Some("Track owner consent and complete adoptions"),
                );
                pet_grid(ui, state, PetView::Interests, PetCardVariant::Interest);
            });
    }
}
