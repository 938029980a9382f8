//! Identity verification dialog.

use egui::{Context, CornerRadius, RichText};
use egui_phosphor::regular as icons;
use petadopt_core::IdentityPhase;
use petadopt_model::Route;

use super::shell;
use crate::components::{button, text_input};
use crate::state::AppState;
use crate::theme::{colors, spacing};

enum Intent {
    Later,
    Verify,
    Home,
    Retry,
}

pub fn show(ctx: &Context, state: &mut AppState) {
    if !state.identity.is_open() {
        return;
    }
    let mut intent = None;

    shell::modal(ctx, "identity_dialog", 400.0, |ui| match state.identity.phase() {
        IdentityPhase::Input => {
            if shell::header(ui, "Verify Your Identity", Some("All fields are required")) {
                intent = Some(Intent::Later);
            }
            egui::Frame::new()
                .fill(colors::AMBER)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(spacing::SM)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} This is a required action due to the sensitivity of adoption, \
                             to further promote safety, trust, and responsible pet adoption",
                            icons::INFO
                        ))
                        .small()
                        .color(colors::NAVY),
                    );
                });
            ui.add_space(spacing::MD);

            let response = text_input(
                ui,
                "NIN (National Identity Number)",
                &mut state.identity.form.nin,
                "Enter your NIN",
                None,
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(spacing::SM);
            ui.horizontal(|ui| {
                if button::secondary(ui, "Verify Later") {
                    intent = Some(Intent::Later);
                }
                if button::primary(ui, "Verify Now", false) || submitted {
                    intent = Some(Intent::Verify);
                }
            });
        }
        IdentityPhase::Verified => {
            if shell::success_panel(
                ui,
                "Verification Successful!",
                "Your identity has been verified, you can proceed to List or Adopt.",
                "Back To Home",
            ) {
                intent = Some(Intent::Home);
            }
        }
        IdentityPhase::Failed => {
            let color = ui.visuals().error_fg_color;
            shell::status_panel(
                ui,
                icons::X_CIRCLE,
                color,
                "Verification Failed!",
                "We are unable to verify your identity due to incorrect identity number provided.",
            );
            ui.horizontal(|ui| {
                if button::secondary(ui, "Verify Later") {
                    intent = Some(Intent::Later);
                }
                if button::primary(ui, "Retry Verification", false) {
                    intent = Some(Intent::Retry);
                }
            });
        }
    });

    match intent {
        Some(Intent::Later) => state.close_identity(),
        Some(Intent::Verify) => {
            state.identity.verify(&state.settings.validation);
        }
        Some(Intent::Home) => {
            state.close_identity();
            state.navigate(Route::Home);
        }
        Some(Intent::Retry) => state.identity.retry(),
        None => {}
    }
}
