//! Reusable widgets.

pub mod button;
mod filter_bar;
mod image_slot;
mod inputs;
mod pet_card;

pub use filter_bar::filter_bar;
pub use image_slot::{image_slot, pick_image};
pub use inputs::{field_error, password_input, select, text_area, text_input};
pub use pet_card::{CARD_WIDTH, PetCardAction, PetCardVariant, pet_card};
