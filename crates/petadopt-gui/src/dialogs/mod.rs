//! Modal dialogs. Each one is drawn only while its state says it is open.

mod adoption;
mod identity;
mod listing_wizard;
mod owner;
mod shell;
mod success;

use egui::Context;

use crate::state::AppState;

/// Draw every open dialog, bottom-most first.
///
/// The order matches [`AppState::close_topmost_dialog`] in reverse, so
/// Escape always closes the one the user sees on top.
pub fn show_all(ctx: &Context, state: &mut AppState) {
    listing_wizard::show(ctx, state);
    identity::show(ctx, state);
    adoption::show(ctx, state);
    owner::show(ctx, state);
    success::show(ctx, state);
}
