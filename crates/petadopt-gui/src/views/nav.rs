//! Top navigation bar shown on marketplace pages.

use egui::{RichText, Ui};
use egui_phosphor::regular as icons;
use petadopt_model::Route;

use crate::state::AppState;
use crate::theme::{colors, spacing};

enum NavIntent {
    Go(Route),
    Settings,
    SignOut,
}

fn route_icon(route: Route) -> &'static str {
    match route {
        Route::Home => icons::HOUSE,
        Route::Favourites => icons::HEART,
        Route::Interests => icons::STAR,
        Route::Listings => icons::LIST_BULLETS,
        Route::Notifications => icons::BELL,
        Route::Profile => icons::USER,
        _ => icons::DOT,
    }
}

pub struct NavBar;

impl NavBar {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let current = state.route();
        let unread = state.notifications.len();
        let mut intent = None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} PETAD", icons::PAW_PRINT))
                    .size(22.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.add_space(spacing::LG);

            for route in Route::MARKETPLACE {
                let mut text = format!("{} {}", route_icon(route), route.title());
                if route == Route::Notifications && unread > 0 {
                    text.push_str(&format!(" ({unread})"));
                }
                if ui.selectable_label(current == route, text).clicked() {
                    intent = Some(NavIntent::Go(route));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new(icons::SIGN_OUT))
                    .on_hover_text("Sign out")
                    .clicked()
                {
                    intent = Some(NavIntent::SignOut);
                }
                if ui
                    .button(RichText::new(icons::GEAR))
                    .on_hover_text("Settings")
                    .clicked()
                {
                    intent = Some(NavIntent::Settings);
                }
                if let Some(session) = &state.session {
                    ui.label(RichText::new(&session.display_name).weak());
                }
            });
        });

        match intent {
            Some(NavIntent::Go(route)) => state.navigate(route),
            Some(NavIntent::Settings) => state.open_settings(),
            Some(NavIntent::SignOut) => state.sign_out(),
            None => {}
        }
    }
}
