use chrono::Utc;
use egui::text::LayoutJob;
use egui::{CornerRadius, FontId, RichText, Stroke, TextFormat, Ui};
use egui_phosphor::regular as icons;
use petadopt_core::notifications::EMPTY_FEED_MESSAGE;
use petadopt_model::{Notification, NotificationId, NotificationKind};

use crate::components::button;
use crate::state::AppState;
use crate::theme::{ThemeColors, colors, palette, spacing};

pub struct NotificationsView;

impl NotificationsView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let theme = palette(state.settings.general.dark_mode);
        let now = Utc::now();
        let mut dismiss: Option<NotificationId> = None;
        let mut clear = false;

        ui.add_space(spacing::MD);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Notifications").size(24.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(!state.notifications.is_empty(), |ui| {
                    clear = button::link(ui, "Clear all");
                });
            });
        });
        ui.add_space(spacing::MD);

        if state.notifications.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::XL);
                ui.label(RichText::new(icons::BELL_SIMPLE_SLASH).size(40.0).weak());
                ui.label(RichText::new(EMPTY_FEED_MESSAGE).size(18.0).strong());
            });
        } else {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for item in state.notifications.items() {
                        if entry(ui, item, &theme, now) {
                            dismiss = Some(item.id);
                        }
                        ui.add_space(spacing::SM);
                    }
                });
        }

        if clear {
            state.notifications.clear_all();
        } else if let Some(id) = dismiss {
            state.notifications.dismiss(id);
        }
    }
}

fn kind_icon(kind: NotificationKind) -> (&'static str, egui::Color32) {
    match kind {
        NotificationKind::Success => (icons::CHECK_CIRCLE, colors::SUCCESS),
        NotificationKind::Adoption => (icons::HEART, colors::ACCENT),
        NotificationKind::Reminder => (icons::CLOCK, colors::AMBER),
    }
}

/// One entry. Returns whether its dismiss button was clicked.
fn entry(ui: &mut Ui, item: &Notification, theme: &ThemeColors, now: chrono::DateTime<Utc>) -> bool {
    let mut dismissed = false;
    egui::Frame::new()
        .fill(theme.bg_card)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(spacing::MD)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (icon, color) = kind_icon(item.kind);
                ui.label(RichText::new(icon).size(24.0).color(color));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&item.title).strong());
                        ui.label(RichText::new(item.relative_age(now)).small().weak());
                    });
                    ui.label(body(item, theme));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismissed = ui
                        .add(egui::Button::new(icons::X).frame(false))
                        .on_hover_text("Dismiss")
                        .clicked();
                    if item.actionable {
                        ui.label(RichText::new(icons::CARET_RIGHT).weak());
                    }
                });
            });
        });
    dismissed
}

fn body(item: &Notification, theme: &ThemeColors) -> LayoutJob {
    let mut job = LayoutJob::default();
    for span in &item.body {
        let format = TextFormat {
            font_id: FontId::proportional(14.0),
            color: if span.strong {
                theme.text_primary
            } else {
                theme.text_muted
            },
            ..Default::default()
        };
        job.append(&span.text, 0.0, format);
    }
    job
}
