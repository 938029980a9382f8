//! Shared modal frame and success panel.

use egui::{Context, Id, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::components::button;
use crate::theme::{colors, spacing};

/// Draw `add_contents` in a centred modal over a dimmed backdrop.
pub fn modal<R>(
    ctx: &Context,
    id: &str,
    width: f32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    egui::Modal::new(Id::new(id))
        .show(ctx, |ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
}

/// Title row with a close button. Returns whether close was clicked.
pub fn header(ui: &mut Ui, title: &str, subtitle: Option<&str>) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).size(20.0).strong());
            if let Some(subtitle) = subtitle {
                ui.label(RichText::new(subtitle).weak());
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            close = ui
                .add(egui::Button::new(RichText::new(icons::X).size(18.0)).frame(false))
                .on_hover_text("Close")
                .clicked();
        });
    });
    ui.add_space(spacing::MD);
    close
}

/// Check mark, headline, message and one action. Returns whether the
/// action was clicked.
pub fn success_panel(ui: &mut Ui, title: &str, message: &str, action: &str) -> bool {
    status_panel(ui, icons::CHECK_CIRCLE, colors::SUCCESS, title, message);
    ui.vertical_centered(|ui| button::primary_wide(ui, action, false))
        .inner
}

/// Centred icon, headline and message.
pub fn status_panel(ui: &mut Ui, icon: &str, color: egui::Color32, title: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::SM);
        ui.label(RichText::new(icon).size(56.0).color(color));
        ui.add_space(spacing::SM);
        ui.label(RichText::new(title).size(20.0).strong());
        ui.add_space(spacing::XS);
        ui.label(RichText::new(message).weak());
        ui.add_space(spacing::LG);
    });
}
