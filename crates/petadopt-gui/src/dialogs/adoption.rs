//! "Confirm pet received" completion form.

use egui::{Context, CornerRadius, RichText};
use egui_phosphor::regular as icons;
use petadopt_core::AdoptionPhase;
use petadopt_model::{CompletionField, FormField};

use super::shell;
use crate::components::{button, select, text_area, text_input};
use crate::state::AppState;
use crate::theme::{colors, spacing};

pub fn show(ctx: &Context, state: &mut AppState) {
    if !state.adoption.is_open() {
        return;
    }
    let mut close = false;
    let mut confirm = false;

    shell::modal(ctx, "adoption_dialog", 420.0, |ui| match state.adoption.phase() {
        AdoptionPhase::Input => {
            close = shell::header(ui, "Completion Form", Some("All fields are required"));
            egui::Frame::new()
                .fill(colors::MINT)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(spacing::SM)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} This information is required to confirm completion of the adoption process",
                            icons::INFO
                        ))
                        .small()
                        .color(colors::NAVY),
                    );
                });
            ui.add_space(spacing::MD);

            let form = &mut state.adoption.form;

            let mut date = form.values.date_received.clone();
            let field = CompletionField::DateReceived;
            if text_input(ui, field.label(), &mut date, "Enter", form.error(field)).changed() {
                form.values.date_received = date;
                form.edited(field);
            }

            let mut location = form.values.receipt_location.clone();
            let field = CompletionField::ReceiptLocation;
            if text_area(ui, field.label(), &mut location, "Type something", form.error(field))
                .changed()
            {
                form.values.receipt_location = location;
                form.edited(field);
            }

            let mut condition = form.values.condition;
            let field = CompletionField::Condition;
            if select(ui, "pet_condition", field.label(), &mut condition, "Select", form.error(field)) {
                form.values.condition = condition;
                form.edited(field);
            }

            ui.add_space(spacing::SM);
            ui.horizontal(|ui| {
                if button::secondary(ui, "Cancel") {
                    close = true;
                }
                if button::primary(ui, "Confirm", false) {
                    confirm = true;
                }
            });
        }
        AdoptionPhase::Confirmed => {
            if shell::success_panel(
                ui,
                "Confirmation Submitted!",
                "Your confirmation of the Pet Adoption completion has been received",
                "Close",
            ) {
                close = true;
            }
        }
    });

    if confirm {
        state.submit_adoption();
    }
    if close {
        state.adoption.close();
    }
}
