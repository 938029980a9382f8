//! Layout and field helpers shared by the account pages.

use egui::{CornerRadius, RichText, Stroke, Ui};
use egui_phosphor::regular as icons;
use petadopt_core::FormState;
use petadopt_model::FormField;
use petadopt_validate::Validate;

use crate::components::{password_input, text_input};
use crate::theme::{ThemeColors, colors, spacing};

const CARD_WIDTH: f32 = 380.0;

/// Brand header plus a centred card holding the form.
pub fn auth_card(ui: &mut Ui, theme: &ThemeColors, title: &str, add_form: impl FnOnce(&mut Ui)) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL);
            ui.label(
                RichText::new(format!("{} PETAD", icons::PAW_PRINT))
                    .size(28.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.label(RichText::new("Pet Lovers").color(theme.text_muted));
            ui.add_space(spacing::LG);

            egui::Frame::new()
                .fill(theme.bg_card)
                .stroke(Stroke::new(1.0, theme.border))
                .corner_radius(CornerRadius::same(16))
                .inner_margin(spacing::LG)
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.label(RichText::new(title).size(22.0).strong());
                        ui.add_space(spacing::MD);
                        add_form(ui);
                    });
                });
            ui.add_space(spacing::XL);
        });
    });
}

/// Text field bound to `form`; clears the field error when edited.
/// Returns whether Enter was pressed in the field.
pub fn form_text<V: Validate>(
    ui: &mut Ui,
    form: &mut FormState<V>,
    field: V::Field,
    label: &str,
    hint: &str,
    value: fn(&mut V) -> &mut String,
) -> bool {
    let mut current = value(&mut form.values).clone();
    let response = text_input(ui, label, &mut current, hint, form.error(field));
    if response.changed() {
        *value(&mut form.values) = current;
        form.edited(field);
    }
    entered(ui, &response)
}

/// Password variant of [`form_text`].
pub fn form_password<V: Validate>(
    ui: &mut Ui,
    form: &mut FormState<V>,
    show: &mut bool,
    field: V::Field,
    hint: &str,
    value: fn(&mut V) -> &mut String,
) -> bool {
    let mut current = value(&mut form.values).clone();
    let response = password_input(ui, field.label(), &mut current, show, hint, form.error(field));
    if response.changed() {
        *value(&mut form.values) = current;
        form.edited(field);
    }
    entered(ui, &response)
}

fn entered(ui: &Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Form-level failure line, if any.
pub fn submit_error(ui: &mut Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(
            RichText::new(format!("{} {message}", icons::WARNING_CIRCLE))
                .color(ui.visuals().error_fg_color),
        );
        ui.add_space(spacing::SM);
    }
}

/// Outlined "continue with Google" style button.
pub fn provider_button(ui: &mut Ui, label: &str, enabled: bool) -> egui::Response {
    let button = egui::Button::new(format!("{} {label}", icons::GOOGLE_LOGO))
        .min_size(egui::vec2(ui.available_width(), 36.0))
        .corner_radius(CornerRadius::same(8));
    ui.add_enabled(enabled, button)
}

/// "Prompt? Link" line under a form.
pub fn switch_line(ui: &mut Ui, prompt: &str, link: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(prompt).weak());
        clicked = crate::components::button::link(ui, link);
    });
    clicked
}
