//! Theme and styling constants

use egui::{Color32, Context, CornerRadius, Visuals};

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Brand colors not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Primary call-to-action (orange)
    pub const ACCENT: Color32 = Color32::from_rgb(232, 77, 42);
    /// Secondary action / headings (navy)
    pub const NAVY: Color32 = Color32::from_rgb(13, 27, 42);
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    /// Banner background for granted consent
    pub const MINT: Color32 = Color32::from_rgb(242, 250, 246);
    /// Banner background for pending consent
    pub const AMBER: Color32 = Color32::from_rgb(255, 247, 230);
}

/// Palette derived from the current light/dark mode.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg_card: Color32,
    pub bg_secondary: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub accent: Color32,
}

pub fn palette(dark_mode: bool) -> ThemeColors {
    if dark_mode {
        ThemeColors {
            bg_card: Color32::from_gray(32),
            bg_secondary: Color32::from_gray(40),
            text_primary: Color32::from_gray(235),
            text_muted: Color32::from_gray(150),
            border: Color32::from_gray(60),
            accent: colors::ACCENT,
        }
    } else {
        ThemeColors {
            bg_card: Color32::WHITE,
            bg_secondary: Color32::from_gray(246),
            text_primary: colors::NAVY,
            text_muted: Color32::from_gray(120),
            border: Color32::from_gray(225),
            accent: colors::ACCENT,
        }
    }
}

/// Install light or dark visuals with the brand accent.
pub fn apply(ctx: &Context, dark_mode: bool) {
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.selection.bg_fill = colors::ACCENT.linear_multiply(0.8);
    visuals.hyperlink_color = colors::ACCENT;
    visuals.window_corner_radius = CornerRadius::same(12);
    ctx.set_visuals(visuals);
}
