use egui::Ui;
use petadopt_model::{ForgotPasswordField, Route};

use super::auth_layout::{auth_card, form_text, submit_error, switch_line};
use crate::components::button;
use crate::state::AppState;
use crate::theme::{palette, spacing};

pub struct ForgotPasswordView;

impl ForgotPasswordView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let theme = palette(state.settings.general.dark_mode);
        let mut submit = false;
        let mut to_login = false;

        auth_card(ui, &theme, "Forget Password?", |ui| {
            let flow = &mut state.auth.forgot;
            submit |= form_text(
                ui,
                &mut flow.form,
                ForgotPasswordField::Email,
                "Email Address",
                "Enter your email address",
                |v| &mut v.email,
            );

            submit_error(ui, flow.form.submit_error());
            let busy = flow.form.is_pending();
            let label = if busy {
                "Sending reset link"
            } else {
                "Send Me Reset Link"
            };
            if button::primary_wide(ui, label, busy) {
                submit = true;
            }
            ui.add_space(spacing::MD);
            if switch_line(ui, "Remember your password?", "Sign In") {
                to_login = true;
            }
        });

        if submit {
            state
                .auth
                .submit_forgot(&state.settings.validation, &state.backend);
        }
        if to_login {
            state.navigate(Route::Login);
        }
    }
}
