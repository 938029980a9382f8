//! Profile page: account details, verification badge, and record tabs.

use egui::{CornerRadius, RichText, Stroke, Ui};
use egui_phosphor::regular as icons;
use petadopt_model::{Choice, Route};

use crate::components::button;
use crate::state::{AppState, ProfileTab};
use crate::theme::{ThemeColors, colors, palette, spacing};

const FULL_NAME: &str = "Angela Christoper";
const EMAIL: &str = "Angela@gmail.com";
const PHONE: &str = "+234 903 123 1233";
const ADDRESS: &str = "24 Just Street, Lekki, Lagos, Nigeria";

enum ProfileIntent {
    Verify,
    Tab(ProfileTab),
    ListPet,
    Adopt,
}

pub struct ProfileView;

impl ProfileView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let theme = palette(state.settings.general.dark_mode);
        let mut intent = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(spacing::MD);
                details_card(ui, state, &theme, &mut intent);
                ui.add_space(spacing::LG);

                ui.horizontal(|ui| {
                    for tab in ProfileTab::all() {
                        if ui
                            .selectable_label(state.profile_tab == *tab, tab.label())
                            .clicked()
                        {
                            intent = Some(ProfileIntent::Tab(*tab));
                        }
                    }
                });
                ui.separator();
                ui.add_space(spacing::SM);

                let listed = match state.profile_tab {
                    ProfileTab::AdoptionRecord => adoption_records(ui, state, &theme),
                    ProfileTab::ListingRecord => listing_records(ui, state, &theme),
                };
                if !listed {
                    empty_records(ui, state.profile_tab, &mut intent);
                }
            });

        match intent {
            Some(ProfileIntent::Verify) => state.open_identity(),
            Some(ProfileIntent::Tab(tab)) => state.profile_tab = tab,
            Some(ProfileIntent::ListPet) => state.open_wizard(),
            Some(ProfileIntent::Adopt) => state.navigate(Route::Listings),
            None => {}
        }
    }
}

fn details_card(
    ui: &mut Ui,
    state: &AppState,
    theme: &ThemeColors,
    intent: &mut Option<ProfileIntent>,
) {
    let name = state
        .session
        .as_ref()
        .map_or(FULL_NAME, |session| session.display_name.as_str());
    let email = state
        .session
        .as_ref()
        .map_or(EMAIL, |session| session.email.as_str());

    card(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(icons::USER_CIRCLE).size(64.0).color(theme.accent));
            ui.add_space(spacing::MD);
            ui.vertical(|ui| {
                ui.label(RichText::new(name).size(22.0).strong());
                if state.verified {
                    ui.label(
                        RichText::new(format!("{} Account Verified", icons::SEAL_CHECK))
                            .color(colors::SUCCESS),
                    );
                } else if button::secondary(ui, "Verify Identity") {
                    *intent = Some(ProfileIntent::Verify);
                }
            });
        });
        ui.add_space(spacing::MD);
        egui::Grid::new("profile_details")
            .num_columns(2)
            .spacing([spacing::LG, spacing::SM])
            .show(ui, |ui| {
                detail_row(ui, icons::ENVELOPE, "Email Address", email);
                detail_row(ui, icons::PHONE, "Phone Number", PHONE);
                detail_row(ui, icons::MAP_PIN, "Address", ADDRESS);
            });
    });
}

fn detail_row(ui: &mut Ui, icon: &str, label: &str, value: &str) {
    ui.label(RichText::new(format!("{icon} {label}")).weak());
    ui.label(value);
    ui.end_row();
}

fn card(theme: &ThemeColors) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.bg_card)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(spacing::LG)
}

fn adoption_records(ui: &mut Ui, state: &AppState, theme: &ThemeColors) -> bool {
    for record in &state.adoption_records {
        card(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&record.pet_name).strong());
            ui.label(
                RichText::new(format!(
                    "Received {} at {}",
                    record.form.date_received, record.form.receipt_location
                ))
                .weak(),
            );
            if let Some(condition) = record.form.condition {
                ui.label(format!("Condition: {}", condition.label()));
            }
        });
        ui.add_space(spacing::SM);
    }
    !state.adoption_records.is_empty()
}

fn listing_records(ui: &mut Ui, state: &AppState, theme: &ThemeColors) -> bool {
    for receipt in state.listing_records.iter().rev() {
        card(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&receipt.title).strong());
                ui.label(RichText::new(&receipt.reference).weak().monospace());
            });
            let kind = receipt.pet_type.map_or("Pet", |category| category.label());
            ui.label(
                RichText::new(format!(
                    "{kind} in {}, {} image(s), listed {}",
                    receipt.city,
                    receipt.image_count,
                    receipt.submitted_at.format("%d %b %Y %H:%M")
                ))
                .weak(),
            );
        });
        ui.add_space(spacing::SM);
    }
    !state.listing_records.is_empty()
}

fn empty_records(ui: &mut Ui, tab: ProfileTab, intent: &mut Option<ProfileIntent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::XL);
        ui.label(RichText::new(icons::FOLDER_OPEN).size(40.0).weak());
        ui.label(RichText::new("No Record").size(18.0).strong());
        ui.label(RichText::new(tab.empty_message()).weak());
        ui.add_space(spacing::MD);
        ui.horizontal(|ui| {
            if button::primary(ui, "List A Pet", false) {
                *intent = Some(ProfileIntent::ListPet);
            }
            if button::secondary(ui, "Adopt A Pet") {
                *intent = Some(ProfileIntent::Adopt);
            }
        });
    });
}
