//! One of the listing wizard's photo slots.

use std::path::PathBuf;

use egui::{CornerRadius, RichText, Sense, Stroke, Ui, Vec2};
use egui_phosphor::regular as icons;
use petadopt_model::ImageAttachment;

use crate::theme::ThemeColors;

const SLOT_SIZE: Vec2 = Vec2::new(96.0, 96.0);
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Ask the user for an image file.
pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Pet Photo")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Draw the slot. Returns the new slot content when the user picked or
/// removed a file.
pub fn image_slot(
    ui: &mut Ui,
    index: usize,
    label: &str,
    current: Option<&ImageAttachment>,
    theme: &ThemeColors,
) -> Option<Option<ImageAttachment>> {
    let mut change = None;

    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(theme.text_muted));
        let (rect, response) = ui.allocate_exact_size(SLOT_SIZE, Sense::click());
        let stroke = if response.hovered() {
            Stroke::new(1.5, theme.accent)
        } else {
            Stroke::new(1.0, theme.border)
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(8), theme.bg_secondary);
        ui.painter()
            .rect_stroke(rect, CornerRadius::same(8), stroke, egui::StrokeKind::Inside);

        let (icon, color) = match current {
            Some(_) => (icons::IMAGE, theme.accent),
            None => (icons::UPLOAD_SIMPLE, theme.text_muted),
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(28.0),
            color,
        );

        let hover = match current {
            Some(image) => image.path.display().to_string(),
            None => format!("Add photo {}", index + 1),
        };
        if response.on_hover_text(hover).clicked()
            && let Some(path) = pick_image()
        {
            tracing::debug!(slot = index, path = %path.display(), "image selected");
            change = Some(Some(ImageAttachment::from_path(path)));
        }

        if let Some(image) = current {
            ui.horizontal(|ui| {
                ui.set_max_width(SLOT_SIZE.x);
                ui.add(
                    egui::Label::new(RichText::new(&image.file_name).small())
                        .truncate(),
                );
                if ui.small_button(icons::X).on_hover_text("Remove").clicked() {
                    change = Some(None);
                }
            });
        }
    });

    change
}
