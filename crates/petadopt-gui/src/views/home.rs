//! Home page: hero banner followed by the adoption feed.

use egui::{Color32, CornerRadius, RichText, Ui};
use petadopt_core::PetView;
use petadopt_model::Route;

use super::pet_grid::{page_header, pet_grid};
use crate::components::{PetCardVariant, button};
use crate::state::AppState;
use crate::theme::{colors, spacing};

pub struct HomeView;

impl HomeView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let mut list_pet = false;
        let mut adopt = false;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::new()
                    .fill(colors::NAVY)
                    .corner_radius(CornerRadius::same(16))
                    .inner_margin(spacing::XL)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new("WELCOME PET LOVER!")
                                .size(32.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        ui.add_space(spacing::SM);
                        ui.label(
                            RichText::new(
                                "Research has shown that - those who keep pets for emotional \
                                 support or companionship tend to live a longer life.",
                            )
                            .color(Color32::from_gray(210)),
                        );
                        ui.add_space(spacing::LG);
                        ui.horizontal(|ui| {
                            list_pet = button::primary(ui, "List For Adoption", false);
                            ui.add_space(spacing::SM);
                            adopt = button::secondary(ui, "I Want To Adopt");
                        });
                    });

                page_header(ui, "Pet For Adoption", None);
                pet_grid(ui, state, PetView::Feed, PetCardVariant::Feed);
            });

        if list_pet {
            state.open_wizard();
        }
        if adopt {
            state.navigate(Route::Listings);
        }
    }
}
