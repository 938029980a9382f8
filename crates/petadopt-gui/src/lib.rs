//! Pet adoption marketplace desktop client.

pub mod app;
pub mod components;
pub mod dialogs;
pub mod logging;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;

pub use app::PetAdoptApp;
