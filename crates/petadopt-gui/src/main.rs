//! Petad - Pet Adoption Marketplace desktop client.

use anyhow::{Context, anyhow};
use eframe::egui;
use petadopt_gui::PetAdoptApp;
use petadopt_gui::logging::{LogConfig, init_logging};
use petadopt_gui::settings::load_settings;
use petadopt_gui::state::AppState;

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env()).context("failed to initialise logging")?;

    let settings = load_settings();
    let state = AppState::seeded(settings).context("failed to load the pet catalogue")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Petad - Pet Adoption")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Petad - Pet Adoption",
        options,
        Box::new(|cc| Ok(Box::new(PetAdoptApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("failed to run the application: {e}"))
}
