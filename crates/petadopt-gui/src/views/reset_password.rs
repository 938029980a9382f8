use egui::Ui;
use petadopt_model::ResetPasswordField;

use super::auth_layout::{auth_card, form_password, submit_error};
use crate::components::button;
use crate::state::AppState;
use crate::theme::palette;

pub struct ResetPasswordView;

impl ResetPasswordView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let theme = palette(state.settings.general.dark_mode);
        let mut submit = false;

        auth_card(ui, &theme, "Reset Password?", |ui| {
            let auth = &mut state.auth;
            let flow = &mut auth.reset;
            submit |= form_password(
                ui,
                &mut flow.form,
                &mut flow.show_password,
                ResetPasswordField::Password,
                "Enter your password",
                |v| &mut v.password,
            );
            submit |= form_password(
                ui,
                &mut flow.form,
                &mut auth.show_confirm_password,
                ResetPasswordField::ConfirmPassword,
                "Confirm your password",
                |v| &mut v.confirm_password,
            );

            submit_error(ui, flow.form.submit_error());
            let busy = flow.form.is_pending();
            let label = if busy {
                "Saving New Password"
            } else {
                "Save New Password"
            };
            if button::primary_wide(ui, label, busy) {
                submit = true;
            }
        });

        if submit {
            state
                .auth
                .submit_reset(&state.settings.validation, &state.backend);
        }
    }
}
