//! Settings window.
//!
//! Native viewport with a category sidebar:
//! - General (appearance, sign-in)
//! - Validation (identity number rules, password and image minimums)
//! - Backend (simulated latency and failures)

use super::{BackendSettings, GeneralSettings, MAX_LATENCY_MS, Settings};
use crate::theme::{ThemeColors, palette};
use eframe::egui::{self, Color32, CornerRadius, Stroke, Vec2};
use petadopt_model::IMAGE_SLOT_COUNT;
use petadopt_validate::{IdentityNumberRule, ValidationRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsCategory {
    #[default]
    General,
    Validation,
    Backend,
}

impl SettingsCategory {
    pub const fn all() -> &'static [SettingsCategory] {
        &[Self::General, Self::Validation, Self::Backend]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Validation => "Validation",
            Self::Backend => "Backend",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::General => egui_phosphor::regular::GEAR,
            Self::Validation => egui_phosphor::regular::CHECK_SQUARE,
            Self::Backend => egui_phosphor::regular::CLOUD,
        }
    }
}

/// Result of showing the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResult {
    /// Keep the window open.
    Open,
    /// Apply changes and close.
    Apply,
    /// Discard changes and close.
    Cancel,
}

#[derive(Debug, Default)]
pub struct SettingsWindow {
    category: SettingsCategory,
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> SettingsCategory {
        self.category
    }

    /// Show the settings as a separate native window.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        dark_mode: bool,
    ) -> SettingsResult {
        let theme = palette(dark_mode);
        let mut result = SettingsResult::Open;

        let viewport_id = egui::ViewportId::from_hash_of("settings_window");

        ctx.show_viewport_immediate(
            viewport_id,
            egui::ViewportBuilder::default()
                .with_title("Settings")
                .with_inner_size([680.0, 480.0])
                .with_min_inner_size([560.0, 380.0])
                .with_resizable(true),
            |ctx, _class| {
                apply_native_style(ctx, &theme);

                egui::CentralPanel::default()
                    .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(0.0))
                    .show(ctx, |ui| {
                        result = self.show_layout(ui, settings, &theme);
                    });

                if ctx.input(|i| i.viewport().close_requested()) {
                    result = SettingsResult::Cancel;
                }
            },
        );

        result
    }

    fn show_layout(
        &mut self,
        ui: &mut egui::Ui,
        settings: &mut Settings,
        theme: &ThemeColors,
    ) -> SettingsResult {
        let mut result = SettingsResult::Open;

        ui.horizontal(|ui| {
            self.show_sidebar(ui, theme);
            ui.add(egui::Separator::default().vertical());

            ui.vertical(|ui| {
                ui.set_min_width(ui.available_width());

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 56.0)
                    .show(ui, |ui| {
                        ui.add_space(20.0);
                        ui.horizontal(|ui| {
                            ui.add_space(24.0);
                            ui.vertical(|ui| {
                                ui.set_max_width(460.0);
                                match self.category {
                                    SettingsCategory::General => {
                                        show_general(ui, &mut settings.general, theme);
                                    }
                                    SettingsCategory::Validation => {
                                        show_validation(ui, &mut settings.validation, theme);
                                    }
                                    SettingsCategory::Backend => {
                                        show_backend(ui, &mut settings.backend, theme);
                                    }
                                }
                            });
                        });
                    });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.add_space(16.0);
                        if ui.button("Reset to Defaults").clicked() {
                            *settings = Settings::default();
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add_space(16.0);
                            let apply = egui::Button::new(
                                egui::RichText::new("Apply").color(Color32::WHITE),
                            )
                            .fill(theme.accent)
                            .min_size(Vec2::new(80.0, 28.0));
                            if ui.add(apply).clicked() {
                                result = SettingsResult::Apply;
                            }
                            ui.add_space(8.0);
                            if ui
                                .add(egui::Button::new("Cancel").min_size(Vec2::new(80.0, 28.0)))
                                .clicked()
                            {
                                result = SettingsResult::Cancel;
                            }
                        });
                    });
                    ui.add_space(8.0);
                    ui.separator();
                });
            });
        });

        result
    }

    fn show_sidebar(&mut self, ui: &mut egui::Ui, theme: &ThemeColors) {
        ui.vertical(|ui| {
            ui.set_min_width(170.0);
            ui.set_max_width(170.0);

            let rect = ui.available_rect_before_wrap();
            ui.painter()
                .rect_filled(rect, CornerRadius::ZERO, theme.bg_secondary);
            ui.add_space(16.0);

            for category in SettingsCategory::all() {
                let selected = self.category == *category;
                let response = ui.allocate_response(
                    Vec2::new(ui.available_width() - 16.0, 32.0),
                    egui::Sense::click(),
                );

                let bg_rect = response.rect.expand2(Vec2::new(8.0, 0.0));
                if selected {
                    ui.painter().rect_filled(
                        bg_rect,
                        CornerRadius::same(6),
                        theme.accent.linear_multiply(0.15),
                    );
                } else if response.hovered() {
                    ui.painter().rect_filled(
                        bg_rect,
                        CornerRadius::same(6),
                        Color32::from_white_alpha(10),
                    );
                }

                let text_color = if selected {
                    theme.accent
                } else {
                    theme.text_primary
                };
                ui.painter().text(
                    response.rect.left_center() + Vec2::new(12.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    format!("{} {}", category.icon(), category.name()),
                    egui::FontId::proportional(14.0),
                    text_color,
                );

                if response.clicked() {
                    self.category = *category;
                }
            }
        });
    }
}

fn apply_native_style(ctx: &egui::Context, theme: &ThemeColors) {
    let mut style = (*ctx.style()).clone();
    style.visuals.widgets.noninteractive.bg_fill = theme.bg_secondary;
    style.visuals.widgets.inactive.bg_fill = theme.bg_secondary;
    style.visuals.widgets.hovered.bg_fill = theme.accent.linear_multiply(0.1);
    style.visuals.widgets.active.bg_fill = theme.accent.linear_multiply(0.2);
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, theme.border);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent.linear_multiply(0.5));
    style.visuals.window_corner_radius = CornerRadius::same(8);
    style.visuals.menu_corner_radius = CornerRadius::same(6);
    ctx.set_style(style);
}

fn section_header(ui: &mut egui::Ui, title: &str, theme: &ThemeColors) {
    ui.label(
        egui::RichText::new(title)
            .size(20.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.add_space(16.0);
}

fn setting_row<R>(
    ui: &mut egui::Ui,
    label: &str,
    description: Option<&str>,
    theme: &ThemeColors,
    add_widget: impl FnOnce(&mut egui::Ui) -> R,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.set_min_width(200.0);
            ui.label(egui::RichText::new(label).color(theme.text_primary));
            if let Some(desc) = description {
                ui.label(egui::RichText::new(desc).small().color(theme.text_muted));
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            add_widget(ui);
        });
    });
    ui.add_space(12.0);
}

fn setting_group(
    ui: &mut egui::Ui,
    title: Option<&str>,
    theme: &ThemeColors,
    add_content: impl FnOnce(&mut egui::Ui),
) {
    if let Some(t) = title {
        ui.label(
            egui::RichText::new(t)
                .size(13.0)
                .strong()
                .color(theme.text_muted),
        );
        ui.add_space(8.0);
    }

    egui::Frame::new()
        .fill(theme.bg_secondary)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(16.0)
        .show(ui, |ui| {
            add_content(ui);
        });

    ui.add_space(20.0);
}

fn show_general(ui: &mut egui::Ui, general: &mut GeneralSettings, theme: &ThemeColors) {
    section_header(ui, "General", theme);

    setting_group(ui, Some("APPEARANCE"), theme, |ui| {
        setting_row(ui, "Dark Mode", Some("Use dark color scheme"), theme, |ui| {
            ui.add(toggle(&mut general.dark_mode));
        });
    });

    setting_group(ui, Some("SIGN IN"), theme, |ui| {
        setting_row(
            ui,
            "Remember Email",
            Some("Pre-fill the last signed-in email"),
            theme,
            |ui| {
                ui.add(toggle(&mut general.remember_email));
            },
        );
        if !general.remember_email {
            general.last_email = None;
        }
    });
}

fn show_validation(ui: &mut egui::Ui, rules: &mut ValidationRules, theme: &ThemeColors) {
    section_header(ui, "Validation", theme);

    setting_group(ui, Some("IDENTITY NUMBER"), theme, |ui| {
        setting_row(
            ui,
            "Registration",
            Some(&rules.registration_identity.describe()),
            theme,
            |ui| identity_rule_editor(ui, "registration_identity", &mut rules.registration_identity),
        );
        ui.separator();
        ui.add_space(8.0);
        setting_row(
            ui,
            "Verification",
            Some(&rules.verification_identity.describe()),
            theme,
            |ui| identity_rule_editor(ui, "verification_identity", &mut rules.verification_identity),
        );
    });

    setting_group(ui, Some("THRESHOLDS"), theme, |ui| {
        setting_row(
            ui,
            "Password Length",
            Some("Minimum characters for a new password"),
            theme,
            |ui| {
                ui.add(
                    egui::DragValue::new(&mut rules.min_password_len)
                        .range(1..=64)
                        .speed(0.1),
                );
            },
        );
        ui.separator();
        ui.add_space(8.0);
        setting_row(
            ui,
            "Listing Images",
            Some("Minimum photos before a listing can be submitted"),
            theme,
            |ui| {
                ui.add(
                    egui::DragValue::new(&mut rules.min_listing_images)
                        .range(1..=IMAGE_SLOT_COUNT)
                        .speed(0.1),
                );
            },
        );
    });
}

fn identity_rule_editor(ui: &mut egui::Ui, id: &str, rule: &mut IdentityNumberRule) {
    let (mut exact, mut length) = match *rule {
        IdentityNumberRule::ExactDigits(n) => (true, n),
        IdentityNumberRule::MinLength(n) => (false, n),
    };

    ui.add(egui::DragValue::new(&mut length).range(1..=32).speed(0.1));
    egui::ComboBox::from_id_salt(id)
        .width(120.0)
        .selected_text(if exact { "Exact digits" } else { "Min length" })
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut exact, true, "Exact digits");
            ui.selectable_value(&mut exact, false, "Min length");
        });

    *rule = if exact {
        IdentityNumberRule::ExactDigits(length)
    } else {
        IdentityNumberRule::MinLength(length)
    };
}

fn show_backend(ui: &mut egui::Ui, backend: &mut BackendSettings, theme: &ThemeColors) {
    section_header(ui, "Backend", theme);

    setting_group(ui, Some("LATENCY"), theme, |ui| {
        setting_row(
            ui,
            "Request Delay",
            Some("Sign in, registration, password reset and listing"),
            theme,
            |ui| {
                ui.add(
                    egui::DragValue::new(&mut backend.latency_ms)
                        .range(0..=MAX_LATENCY_MS)
                        .speed(10.0)
                        .suffix(" ms"),
                );
            },
        );
        ui.separator();
        ui.add_space(8.0);
        setting_row(
            ui,
            "Reset Link Delay",
            Some("Forgot password request"),
            theme,
            |ui| {
                ui.add(
                    egui::DragValue::new(&mut backend.reset_latency_ms)
                        .range(0..=MAX_LATENCY_MS)
                        .speed(10.0)
                        .suffix(" ms"),
                );
            },
        );
    });

    setting_group(ui, Some("FAILURES"), theme, |ui| {
        setting_row(
            ui,
            "Reject Requests",
            Some("Every request fails after the delay"),
            theme,
            |ui| {
                ui.add(toggle(&mut backend.reject_requests));
            },
        );
    });
}

/// Pill-shaped on/off switch.
fn toggle(value: &mut bool) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        let desired_size = Vec2::new(44.0, 24.0);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if response.clicked() {
            *value = !*value;
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(response.id, *value);
            let bg_color = if *value {
                crate::theme::colors::SUCCESS
            } else {
                Color32::from_gray(180)
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(12), bg_color);

            let knob_radius = 10.0;
            let knob_x = egui::lerp(
                (rect.left() + knob_radius + 2.0)..=(rect.right() - knob_radius - 2.0),
                how_on,
            );
            ui.painter().circle_filled(
                egui::pos2(knob_x, rect.center().y),
                knob_radius,
                Color32::WHITE,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_have_names_and_icons() {
        for category in SettingsCategory::all() {
            assert!(!category.name().is_empty());
            assert!(!category.icon().is_empty());
        }
        assert_eq!(SettingsWindow::new().category(), SettingsCategory::General);
    }
}
