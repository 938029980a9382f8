use egui::Ui;
use petadopt_core::PetView;

use super::pet_grid::{page_header, pet_grid};
use crate::components::{PetCardVariant, button};
use crate::state::AppState;

/// Full adoption feed with the entry point to the listing wizard.
pub struct ListingsView;

impl ListingsView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let mut list_pet = false;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    page_header(ui, "Pet For Adoption", Some("Find your next companion"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        list_pet = button::primary(ui, "List For Adoption", false);
                    });
                });
                pet_grid(ui, state, PetView::Feed, PetCardVariant::Feed);
            });

        if list_pet {
            state.open_wizard();
        }
    }
}
