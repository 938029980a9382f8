//! The pet card shared by the feed, favourites and interest pages.

use egui::{Color32, CornerRadius, RichText, Stroke, Ui, Vec2};
use egui_phosphor::regular as icons;
use petadopt_model::{AdoptionStage, Pet, PetCategory};

use crate::components::button;
use crate::theme::{ThemeColors, colors, spacing};

pub const CARD_WIDTH: f32 = 220.0;
const PHOTO_HEIGHT: f32 = 140.0;

/// Which page the card is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetCardVariant {
    Feed,
    Favourite,
    /// Adds the consent banner and the adoption action.
    Interest,
}

/// What the user asked for on a card. Applied by the page after drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetCardAction {
    ToggleFavourite,
    ToggleInterest,
    ShowOwner,
    StartAdoption,
    ConfirmReceived,
}

fn category_icon(category: PetCategory) -> &'static str {
    match category {
        PetCategory::Dog => icons::DOG,
        PetCategory::Cat => icons::CAT,
        PetCategory::Bird => icons::BIRD,
        PetCategory::Other => icons::PAW_PRINT,
    }
}

pub fn pet_card(
    ui: &mut Ui,
    pet: &Pet,
    variant: PetCardVariant,
    theme: &ThemeColors,
) -> Option<PetCardAction> {
    let mut action = None;

    egui::Frame::new()
        .fill(theme.bg_card)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(spacing::SM)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            photo(ui, pet, theme);
            ui.add_space(spacing::SM);

            ui.horizontal(|ui| {
                ui.label(RichText::new(&pet.name).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (tooltip, color) = if pet.interested {
                        ("Remove interest", colors::ACCENT)
                    } else {
                        ("Mark as interested", theme.text_muted)
                    };
                    let icon = if pet.interested {
                        icons::CHECK_CIRCLE
                    } else {
                        icons::PLUS_CIRCLE
                    };
                    if icon_button(ui, icon, color, tooltip) {
                        action = Some(PetCardAction::ToggleInterest);
                    }

                    let (tooltip, color) = if pet.favourite {
                        ("Remove from favourites", colors::ACCENT)
                    } else {
                        ("Add to favourites", theme.text_muted)
                    };
                    if icon_button(ui, icons::HEART, color, tooltip) {
                        action = Some(PetCardAction::ToggleFavourite);
                    }
                });
            });

            ui.label(RichText::new(pet.subtitle()).color(theme.text_muted));
            ui.horizontal(|ui| {
                ui.label(RichText::new(icons::MAP_PIN).color(theme.text_muted));
                ui.label(RichText::new(&pet.location).small().color(theme.text_muted));
            });

            ui.add_space(spacing::XS);
            ui.horizontal(|ui| {
                let owner = ui
                    .add(egui::Button::new(RichText::new(icons::USER_CIRCLE).size(20.0)).frame(false))
                    .on_hover_text("Pet owner's information");
                if owner.clicked() {
                    action = Some(PetCardAction::ShowOwner);
                }
                ui.label(RichText::new("Owner").small().color(theme.text_muted));
            });

            if variant == PetCardVariant::Interest
                && let Some(stage_action) = interest_footer(ui, pet.adoption_stage())
            {
                action = Some(stage_action);
            }
        });

    action
}

fn photo(ui: &mut Ui, pet: &Pet, theme: &ThemeColors) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(CARD_WIDTH, PHOTO_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, CornerRadius::same(8), theme.bg_secondary);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        category_icon(pet.category),
        egui::FontId::proportional(48.0),
        theme.text_muted,
    );
    ui.painter().text(
        rect.left_bottom() + Vec2::new(spacing::SM, -spacing::SM),
        egui::Align2::LEFT_BOTTOM,
        pet.image.as_str(),
        egui::FontId::monospace(10.0),
        theme.text_muted,
    );
}

fn icon_button(ui: &mut Ui, icon: &str, color: Color32, tooltip: &str) -> bool {
    ui.add(egui::Button::new(RichText::new(icon).size(18.0).color(color)).frame(false))
        .on_hover_text(tooltip)
        .clicked()
}

/// Consent banner plus the action for the current stage.
fn interest_footer(ui: &mut Ui, stage: AdoptionStage) -> Option<PetCardAction> {
    let banner = stage.banner()?;
    let (fill, text) = match stage {
        AdoptionStage::AwaitingConsent => (colors::AMBER, Color32::from_rgb(180, 110, 0)),
        _ => (colors::MINT, Color32::from_rgb(22, 130, 70)),
    };

    ui.add_space(spacing::SM);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(spacing::XS + 2.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let icon = match stage {
                AdoptionStage::AwaitingConsent => icons::CLOCK,
                _ => icons::SEAL_CHECK,
            };
            ui.label(RichText::new(format!("{icon} {banner}")).color(text).small());
        });

    let label = stage.action_label()?;
    ui.add_space(spacing::XS);
    if !button::primary_wide(ui, label, false) {
        return None;
    }
    match stage {
        AdoptionStage::ReadyToStart => Some(PetCardAction::StartAdoption),
        AdoptionStage::InProgress => Some(PetCardAction::ConfirmReceived),
        AdoptionStage::NotTracked | AdoptionStage::AwaitingConsent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_icon() {
        for category in [
            PetCategory::Dog,
            PetCategory::Cat,
            PetCategory::Bird,
            PetCategory::Other,
        ] {
            assert!(!category_icon(category).is_empty());
        }
    }
}
