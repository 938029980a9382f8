use egui::Ui;
use petadopt_core::PetView;
use petadopt_model::PetFlag;

use super::pet_grid::{page_header, pet_grid};
use crate::components::PetCardVariant;
use crate::state::AppState;

pub struct FavouritesView;

impl FavouritesView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let count = state.repo.count_flagged(PetFlag::Favourite);
        let subtitle = format!("{count} saved");

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                page_header(ui, "Favourites", Some(&subtitle));
                pet_grid(ui, state, PetView::Favourites, PetCardVariant::Favourite);
            });
    }
}
