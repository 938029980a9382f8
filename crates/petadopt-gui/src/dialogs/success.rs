use egui::Context;

use super::shell;
use crate::state::AppState;

pub fn show(ctx: &Context, state: &mut AppState) {
    let Some(notice) = state.success else {
        return;
    };
    let proceed = shell::modal(ctx, "success_dialog", 360.0, |ui| {
        shell::success_panel(ui, notice.title(), notice.message(), notice.action_label())
    });
    if proceed {
        state.dismiss_success();
    }
}
