//! Main application struct and eframe::App implementation

use std::time::Duration;

use eframe::egui;
use petadopt_model::Route;

use crate::dialogs;
use crate::settings::{save_settings, ui::SettingsResult};
use crate::state::AppState;
use crate::theme;
use crate::views::{
    FavouritesView, ForgotPasswordView, HomeView, InterestsView, ListingsView, LoginView, NavBar,
    NotificationsView, ProfileView, RegisterView, ResetPasswordView,
};

/// Repaint interval while a backend request is running.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct PetAdoptApp {
    state: AppState,
}

impl PetAdoptApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        tracing::info!(
            dark_mode = state.settings.general.dark_mode,
            route = %state.route(),
            "application started"
        );
        Self { state }
    }

    fn persist(&self) {
        if let Err(e) = save_settings(&self.state.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for PetAdoptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply(ctx, self.state.settings.general.dark_mode);

        self.handle_shortcuts(ctx);
        self.show_settings(ctx);

        let outcome = self.state.poll_requests();
        if outcome.settings_changed {
            self.persist();
        }
        if outcome.pending {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        let route = self.state.route();
        if !route.is_auth() {
            egui::TopBottomPanel::top("nav")
                .exact_height(52.0)
                .show(ctx, |ui| {
                    ui.add_space(theme::spacing::SM);
                    NavBar::show(ui, &mut self.state);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Login => LoginView::show(ui, &mut self.state),
            Route::Register => RegisterView::show(ui, &mut self.state),
            Route::ForgotPassword => ForgotPasswordView::show(ui, &mut self.state),
            Route::ResetPassword => ResetPasswordView::show(ui, &mut self.state),
            Route::Home => HomeView::show(ui, &mut self.state),
            Route::Favourites => FavouritesView::show(ui, &mut self.state),
            Route::Interests => InterestsView::show(ui, &mut self.state),
            Route::Listings => ListingsView::show(ui, &mut self.state),
            Route::Notifications => NotificationsView::show(ui, &mut self.state),
            Route::Profile => ProfileView::show(ui, &mut self.state),
        });

        dialogs::show_all(ctx, &mut self.state);
    }
}

impl PetAdoptApp {
    fn show_settings(&mut self, ctx: &egui::Context) {
        if !self.state.settings_open {
            return;
        }
        let Some(pending) = self.state.settings_pending.as_mut() else {
            return;
        };
        let dark_mode = pending.general.dark_mode;
        match self.state.settings_window.show(ctx, pending, dark_mode) {
            SettingsResult::Open => {}
            SettingsResult::Apply => {
                self.state.close_settings(true);
                self.persist();
            }
            SettingsResult::Cancel => self.state.close_settings(false),
        }
    }

    /// Escape closes the topmost dialog; Cmd/Ctrl+, opens settings.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (escape, comma, command) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Comma),
                i.modifiers.command,
            )
        });

        if escape && self.state.close_topmost_dialog() {
            tracing::debug!("dialog closed via escape");
        }
        if command && comma && !self.state.settings_open && !self.state.route().is_auth() {
            self.state.open_settings();
        }
    }
}
