//! Category and location filters above a pet grid.

use egui::Ui;
use egui_phosphor::regular as icons;
use petadopt_core::{CategoryFilter, PetFilter};

/// Returns whether either filter changed.
pub fn filter_bar(ui: &mut Ui, id_salt: &str, filter: &mut PetFilter) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(icons::FUNNEL);
        egui::ComboBox::from_id_salt(id_salt)
            .width(160.0)
            .selected_text(filter.category.label())
            .show_ui(ui, |ui| {
                for option in CategoryFilter::OPTIONS {
                    changed |= ui
                        .selectable_value(&mut filter.category, option, option.label())
                        .changed();
                }
            });

        ui.label(icons::MAP_PIN);
        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut filter.location)
                    .hint_text("Location")
                    .desired_width(180.0),
            )
            .changed();

        let reset = egui::Button::new(format!("{} Reset", icons::ARROW_COUNTER_CLOCKWISE));
        if ui.add_enabled(filter.is_active(), reset).clicked() {
            filter.reset();
            changed = true;
        }
    });

    if changed {
        tracing::debug!(
            category = filter.category.label(),
            location = %filter.location,
            "filter changed"
        );
    }
    changed
}
