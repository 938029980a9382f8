//! Pet owner's contact card.

use egui::{Context, RichText, Ui};
use egui_phosphor::regular as icons;

use super::shell;
use crate::state::AppState;
use crate::theme::spacing;

const MASKED: &str = "*****";

fn info_row(ui: &mut Ui, label: &str, value: &str, masked: bool) {
    ui.label(RichText::new(label).small().weak());
    ui.horizontal(|ui| {
        ui.label(RichText::new(value).strong());
        if masked {
            ui.label(RichText::new("Masked").small().italics().weak());
        }
    });
    ui.add_space(spacing::SM);
}

pub fn show(ctx: &Context, state: &mut AppState) {
    let Some(owner) = state.owner.as_ref() else {
        return;
    };
    let mut close = false;

    shell::modal(ctx, "owner_dialog", 340.0, |ui| {
        close = shell::header(ui, "Pet Owner's Information", None);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(icons::USER_CIRCLE).size(64.0).weak());
        });
        ui.add_space(spacing::MD);

        let masked = owner.contact_masked;
        let contact = |real: &'static str| if masked { MASKED } else { real };
        info_row(ui, "Full Name", &owner.full_name, false);
        info_row(ui, "Email Address", contact("Angela@gmail.com"), masked);
        info_row(ui, "Phone Number", contact("+234 903 123 1233"), masked);
        info_row(ui, "Location", &owner.location, false);

        ui.add_space(spacing::SM);
        let report = egui::Button::new(
            RichText::new(format!("{} Report Account", icons::FLAG))
                .color(ui.visuals().error_fg_color),
        )
        .frame(false);
        if ui.add(report).clicked() {
            tracing::info!(owner = %owner.full_name, "owner account reported");
            close = true;
        }
    });

    if close {
        state.owner = None;
    }
}
