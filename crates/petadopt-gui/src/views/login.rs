//! Sign-in page.

use egui::Ui;
use petadopt_model::{Route, SignInField};

use super::auth_layout::{
    auth_card, form_password, form_text, provider_button, submit_error, switch_line,
};
use crate::components::button;
use crate::state::AppState;
use crate::theme::{palette, spacing};

pub struct LoginView;

impl LoginView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let theme = palette(state.settings.general.dark_mode);
        let mut go_to = None;
        let mut submit = false;

        auth_card(ui, &theme, "Welcome Pet Lover!", |ui| {
            provider_button(ui, "Continue with Google", false)
                .on_disabled_hover_text("Google sign-in is not available in this client");
            ui.add_space(spacing::MD);
            ui.separator();
            ui.add_space(spacing::MD);

            let flow = &mut state.auth.sign_in;
            submit |= form_text(
                ui,
                &mut flow.form,
                SignInField::Email,
                "Email Address",
                "Enter your email address",
                |v| &mut v.email,
            );
            submit |= form_password(
                ui,
                &mut flow.form,
                &mut flow.show_password,
                SignInField::Password,
                "Enter your password",
                |v| &mut v.password,
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if button::link(ui, "Forget Password?") {
                    go_to = Some(Route::ForgotPassword);
                }
            });
            ui.add_space(spacing::SM);

            submit_error(ui, flow.form.submit_error());
            let busy = flow.form.is_pending();
            if button::primary_wide(ui, "Sign In", busy) {
                submit = true;
            }
            ui.add_space(spacing::MD);
            if switch_line(ui, "Don't have an account?", "Create Account") {
                go_to = Some(Route::Register);
            }
        });

        if submit {
            state
                .auth
                .submit_sign_in(&state.settings.validation, &state.backend);
        }
        if let Some(route) = go_to {
            state.navigate(route);
        }
    }
}
