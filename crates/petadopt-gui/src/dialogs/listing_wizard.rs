//! Create-listing wizard: details, then images, then the success panel.

use egui::{Context, RichText, Ui};
use petadopt_core::{ListingWizard, WizardStep};
use petadopt_model::{
    AdoptionType, AgeGroup, Choice, FormField, Gender, IMAGE_SLOT_COUNT, ListingDraft,
    ListingField, PetCategory, Region, VaccinationStatus,
};

use super::shell;
use crate::components::{button, field_error, image_slot, select, text_area, text_input};
use crate::state::AppState;
use crate::theme::{palette, spacing};

enum Intent {
    Close,
    Proceed,
    Back,
    Submit,
    ViewListing,
}

/// Text detail. Writes back only when the user typed.
fn text_detail(
    ui: &mut Ui,
    wizard: &mut ListingWizard,
    field: ListingField,
    hint: &str,
    get: fn(&ListingDraft) -> &String,
    set: fn(&mut ListingDraft, String),
) {
    let mut current = get(wizard.draft()).clone();
    let error = wizard.errors().message(field);
    let changed = if field == ListingField::Description {
        text_area(ui, field.label(), &mut current, hint, error).changed()
    } else {
        text_input(ui, field.label(), &mut current, hint, error).changed()
    };
    if changed {
        wizard.edit(field, |draft| set(draft, current));
    }
}

/// Dropdown detail over any option set.
fn choice_detail<C: Choice>(
    ui: &mut Ui,
    wizard: &mut ListingWizard,
    field: ListingField,
    get: fn(&ListingDraft) -> Option<C>,
    set: fn(&mut ListingDraft, Option<C>),
) {
    let mut current = get(wizard.draft());
    let error = wizard.errors().message(field);
    if select(ui, field.key(), field.label(), &mut current, "Select", error) {
        wizard.edit(field, |draft| set(draft, current));
    }
}

fn details_step(ui: &mut Ui, wizard: &mut ListingWizard) {
    choice_detail::<AdoptionType>(
        ui,
        wizard,
        ListingField::AdoptionType,
        |d| d.adoption_type,
        |d, v| d.adoption_type = v,
    );
    text_detail(
        ui,
        wizard,
        ListingField::Description,
        "Type something",
        |d| &d.description,
        |d, v| d.description = v,
    );
    text_detail(
        ui,
        wizard,
        ListingField::Title,
        "Enter title",
        |d| &d.title,
        |d, v| d.title = v,
    );
    choice_detail::<PetCategory>(
        ui,
        wizard,
        ListingField::PetType,
        |d| d.pet_type,
        |d, v| d.pet_type = v,
    );
    text_detail(
        ui,
        wizard,
        ListingField::Breed,
        "Enter breed",
        |d| &d.breed,
        |d, v| d.breed = v,
    );
    choice_detail::<AgeGroup>(ui, wizard, ListingField::Age, |d| d.age, |d, v| d.age = v);
    choice_detail::<Gender>(
        ui,
        wizard,
        ListingField::Gender,
        |d| d.gender,
        |d, v| d.gender = v,
    );
    choice_detail::<VaccinationStatus>(
        ui,
        wizard,
        ListingField::Vaccination,
        |d| d.vaccination,
        |d, v| d.vaccination = v,
    );
    choice_detail::<Region>(ui, wizard, ListingField::State, |d| d.state, |d, v| d.state = v);
    text_detail(
        ui,
        wizard,
        ListingField::City,
        "Enter city",
        |d| &d.city,
        |d, v| d.city = v,
    );
}

fn images_step(ui: &mut Ui, wizard: &mut ListingWizard, required: usize, dark_mode: bool) {
    let theme = palette(dark_mode);
    let mut changes = Vec::new();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = spacing::MD;
        for index in 0..IMAGE_SLOT_COUNT {
            let label = if index < required {
                format!("Image {} (Required)", index + 1)
            } else {
                format!("Image {} (Optional)", index + 1)
            };
            let current = wizard.draft().images.get(index);
            if let Some(change) = image_slot(ui, index, &label, current, &theme) {
                changes.push((index, change));
            }
        }
    });

    for (index, change) in changes {
        if let Err(error) = wizard.set_image(index, change) {
            tracing::warn!(%error, "image slot update rejected");
        }
    }

    ui.add_space(spacing::SM);
    field_error(ui, wizard.errors().message(ListingField::Images));
    field_error(ui, wizard.submit_error());
}

pub fn show(ctx: &Context, state: &mut AppState) {
    if !state.is_wizard_open() {
        return;
    }
    let required = state.settings.validation.min_listing_images;
    let dark_mode = state.settings.general.dark_mode;
    let mut intent = None;

    shell::modal(ctx, "listing_wizard", 440.0, |ui| {
        let wizard = &mut state.wizard;
        let step = wizard.step();

        if step == WizardStep::Submitted {
            if shell::success_panel(
                ui,
                "Pet Listed Successfully!",
                "You have successfully listed a pet for adoption",
                "View Listing",
            ) {
                intent = Some(Intent::ViewListing);
            }
            return;
        }

        let (title, subtitle) = match step {
            WizardStep::Details => (
                "Adoption & Pet Information",
                "All fields are required".to_string(),
            ),
            _ => (
                "Add Images",
                format!("Add at least {required} different angle images of the pet"),
            ),
        };
        if shell::header(ui, title, Some(&subtitle)) {
            intent = Some(Intent::Close);
        }
        if let Some(number) = step.number() {
            ui.label(RichText::new(format!("Step {number} of 2")).small().weak());
            ui.add_space(spacing::SM);
        }

        egui::ScrollArea::vertical()
            .max_height(420.0)
            .auto_shrink([false, true])
            .show(ui, |ui| match step {
                WizardStep::Details => details_step(ui, wizard),
                _ => images_step(ui, wizard, required, dark_mode),
            });

        ui.add_space(spacing::MD);
        ui.horizontal(|ui| match step {
            WizardStep::Details => {
                if button::primary(ui, "Proceed", false) {
                    intent = Some(Intent::Proceed);
                }
            }
            _ => {
                let submitting = wizard.is_submitting();
                if ui.add_enabled(!submitting, egui::Button::new("Back")).clicked() {
                    intent = Some(Intent::Back);
                }
                let label = if submitting { "Submitting" } else { "Submit" };
                if button::primary(ui, label, submitting) {
                    intent = Some(Intent::Submit);
                }
            }
        });
    });

    match intent {
        Some(Intent::Close) => {
            state.close_wizard();
        }
        Some(Intent::Proceed) => {
            state.wizard.next();
        }
        Some(Intent::Back) => state.wizard.back(),
        Some(Intent::Submit) => {
            state
                .wizard
                .submit(&state.settings.validation, &state.backend);
        }
        Some(Intent::ViewListing) => state.view_listing(),
        None => {}
    }
}
