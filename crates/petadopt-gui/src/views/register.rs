//! Account creation page.

use egui::Ui;
use petadopt_model::{RegisterField, Route};

use super::auth_layout::{
    auth_card, form_password, form_text, provider_button, submit_error, switch_line,
};
use crate::components::button;
use crate::state::AppState;
use crate::theme::{palette, spacing};

pub struct RegisterView;

impl RegisterView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let theme = palette(state.settings.general.dark_mode);
        let mut submit = false;
        let mut to_login = false;
        let mut verify_identity = false;

        auth_card(ui, &theme, "Create an account", |ui| {
            let flow = &mut state.auth.register;
            submit |= form_text(
                ui,
                &mut flow.form,
                RegisterField::Email,
                "Email Address",
                "Enter your email address",
                |v| &mut v.email,
            );
            submit |= form_text(
                ui,
                &mut flow.form,
                RegisterField::FullName,
                "Full Name",
                "Enter your full name",
                |v| &mut v.full_name,
            );
            submit |= form_text(
                ui,
                &mut flow.form,
                RegisterField::Nin,
                "NIN (National Identity Number)",
                "Enter your NIN",
                |v| &mut v.nin,
            );
            submit |= form_password(
                ui,
                &mut flow.form,
                &mut flow.show_password,
                RegisterField::Password,
                "Enter your password",
                |v| &mut v.password,
            );

            submit_error(ui, flow.form.submit_error());
            let busy = flow.form.is_pending();
            let label = if busy { "Creating account" } else { "Create an account" };
            if button::primary_wide(ui, label, busy) {
                submit = true;
            }
            ui.add_space(spacing::SM);
            if provider_button(ui, "Create account with Google", !busy).clicked() {
                verify_identity = true;
            }
            ui.add_space(spacing::MD);
            if switch_line(ui, "Already have an account?", "Login") {
                to_login = true;
            }
        });

        if submit {
            state
                .auth
                .submit_register(&state.settings.validation, &state.backend);
        }
        if verify_identity {
            state.open_identity();
        }
        if to_login {
            state.navigate(Route::Login);
        }
    }
}
