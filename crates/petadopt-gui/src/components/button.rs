//! Brand buttons.

use egui::{Button, Color32, CornerRadius, RichText, Ui, Vec2};

use crate::theme::colors;

fn filled(ui: &mut Ui, label: &str, fill: Color32, width: f32, busy: bool) -> bool {
    let text = if busy {
        RichText::new(format!("{label}...")).color(Color32::WHITE)
    } else {
        RichText::new(label).color(Color32::WHITE).strong()
    };
    let button = Button::new(text)
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .min_size(Vec2::new(width, 36.0));
    let clicked = ui.add_enabled(!busy, button).clicked();
    if busy {
        ui.spinner();
    }
    clicked
}

/// Orange call-to-action. Disabled with a spinner while `busy`.
pub fn primary(ui: &mut Ui, label: &str, busy: bool) -> bool {
    filled(ui, label, colors::ACCENT, 160.0, busy)
}

/// Navy secondary action.
pub fn secondary(ui: &mut Ui, label: &str) -> bool {
    filled(ui, label, colors::NAVY, 160.0, false)
}

/// Full-width primary, used at the bottom of forms and dialogs.
pub fn primary_wide(ui: &mut Ui, label: &str, busy: bool) -> bool {
    let width = ui.available_width().min(320.0);
    filled(ui, label, colors::ACCENT, width, busy)
}

/// Text-only button in the accent colour.
pub fn link(ui: &mut Ui, label: &str) -> bool {
    ui.add(Button::new(RichText::new(label).color(colors::ACCENT)).frame(false))
        .clicked()
}
