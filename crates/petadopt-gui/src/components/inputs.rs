//! Labelled form inputs with an inline error line.
//!
//! Inputs only capture raw values; callers decide what a change means.

use egui::{Response, RichText, Ui};
use egui_phosphor::regular as icons;
use petadopt_model::Choice;

use crate::theme::spacing;

const INPUT_WIDTH: f32 = 320.0;

fn field_label(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).strong());
    ui.add_space(spacing::XS);
}

/// Red message under an input, or nothing.
pub fn field_error(ui: &mut Ui, error: Option<&str>) {
    if let Some(message) = error {
        ui.label(
            RichText::new(message)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }
}

pub fn text_input(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
) -> Response {
    field_label(ui, label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(INPUT_WIDTH),
    );
    field_error(ui, error);
    ui.add_space(spacing::SM);
    response
}

/// Multi-line variant used for descriptions.
pub fn text_area(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
) -> Response {
    field_label(ui, label);
    let response = ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(3)
            .desired_width(INPUT_WIDTH),
    );
    field_error(ui, error);
    ui.add_space(spacing::SM);
    response
}

/// Password field with an eye button that flips `show`.
pub fn password_input(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    show: &mut bool,
    hint: &str,
    error: Option<&str>,
) -> Response {
    field_label(ui, label);
    let response = ui
        .horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(value)
                    .password(!*show)
                    .hint_text(hint)
                    .desired_width(INPUT_WIDTH - 32.0),
            );
            let (icon, tooltip) = if *show {
                (icons::EYE_SLASH, "Hide password")
            } else {
                (icons::EYE, "Show password")
            };
            if ui.small_button(icon).on_hover_text(tooltip).clicked() {
                *show = !*show;
            }
            response
        })
        .inner;
    field_error(ui, error);
    ui.add_space(spacing::SM);
    response
}

/// Dropdown over a closed option set. Returns whether the value changed.
pub fn select<C: Choice>(
    ui: &mut Ui,
    id_salt: &str,
    label: &str,
    value: &mut Option<C>,
    placeholder: &str,
    error: Option<&str>,
) -> bool {
    field_label(ui, label);
    let mut changed = false;
    let selected = value.map_or(placeholder, |v| v.label());
    egui::ComboBox::from_id_salt(id_salt)
        .width(INPUT_WIDTH)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for option in C::all() {
                let is_selected = *value == Some(*option);
                if ui.selectable_label(is_selected, option.label()).clicked() && !is_selected {
                    *value = Some(*option);
                    changed = true;
                }
            }
        });
    field_error(ui, error);
    ui.add_space(spacing::SM);
    changed
}
