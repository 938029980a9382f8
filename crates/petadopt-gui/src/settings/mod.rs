//! User-configurable settings for the marketplace client.
//!
//! - General preferences (dark mode, remembered email)
//! - Validation rules (identity number lengths, password and image minimums)
//! - Simulated backend (latency, forced rejection)

mod persistence;
pub mod ui;

pub use persistence::{SettingsError, load_settings, save_settings, settings_path};

use std::sync::Arc;
use std::time::Duration;

use petadopt_core::{MarketplaceBackend, MockBackend};
use petadopt_validate::ValidationRules;
use serde::{Deserialize, Serialize};

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub validation: ValidationRules,
    pub backend: BackendSettings,
}

impl Settings {
    /// Parse a settings file, resetting out-of-range thresholds to defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut settings: Self = toml::from_str(content)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Keep every value within what the app can honour. Returns whether
    /// anything was reset.
    pub fn sanitize(&mut self) -> bool {
        let mut reset = self.validation.sanitize();
        if self.backend.latency_ms > MAX_LATENCY_MS {
            tracing::warn!(value = self.backend.latency_ms, "latency_ms capped");
            self.backend.latency_ms = MAX_LATENCY_MS;
            reset = true;
        }
        if self.backend.reset_latency_ms > MAX_LATENCY_MS {
            tracing::warn!(value = self.backend.reset_latency_ms, "reset_latency_ms capped");
            self.backend.reset_latency_ms = MAX_LATENCY_MS;
            reset = true;
        }
        reset
    }

    /// Build the simulated backend these settings describe.
    pub fn backend(&self) -> Arc<dyn MarketplaceBackend> {
        let mut backend = MockBackend::new()
            .with_latency(Duration::from_millis(self.backend.latency_ms))
            .with_reset_latency(Duration::from_millis(self.backend.reset_latency_ms));
        if self.backend.reject_requests {
            backend = backend.rejecting(REJECTION_REASON);
        }
        Arc::new(backend)
    }
}

const REJECTION_REASON: &str = "Simulated backend rejection";

// ============================================================================
// General Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// Remember the signed-in email on the login page.
    pub remember_email: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_email: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            remember_email: true,
            last_email: None,
        }
    }
}

// ============================================================================
// Backend Settings
// ============================================================================

/// Timing and behaviour of the simulated marketplace backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Delay for sign-in, registration, password reset and listing.
    pub latency_ms: u64,
    /// Delay for the forgot-password request.
    pub reset_latency_ms: u64,
    /// Fail every request after the delay.
    pub reject_requests: bool,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            reset_latency_ms: 1000,
            reject_requests: false,
        }
    }
}

pub const MAX_LATENCY_MS: u64 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_validate::IdentityNumberRule;

    #[test]
    fn test_default_settings_serializable() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[validation]"));
        assert!(toml.contains("latency_ms = 1500"));
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::default();
        settings.general.dark_mode = true;
        settings.general.last_email = Some("ada@example.com".to_string());
        settings.validation.verification_identity = IdentityNumberRule::ExactDigits(11);
        settings.backend.reject_requests = true;

        let toml = toml::to_string_pretty(&settings).unwrap();
        let loaded: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let loaded: Settings = toml::from_str("[general]\ndark_mode = true\n").unwrap();
        assert!(loaded.general.dark_mode);
        assert_eq!(loaded.backend, BackendSettings::default());
        assert_eq!(loaded.validation, ValidationRules::default());
    }

    #[test]
    fn test_image_minimum_above_slot_count_falls_back() {
        let loaded = Settings::from_toml("[validation]\nmin_listing_images = 7\n").unwrap();
        assert_eq!(loaded.validation.min_listing_images, 3);
    }

    #[test]
    fn test_image_minimum_of_zero_falls_back() {
        let loaded = Settings::from_toml(
            "[validation]\nmin_listing_images = 0\nmin_password_len = 0\n",
        )
        .unwrap();
        assert_eq!(loaded.validation, ValidationRules::default());
    }

    #[test]
    fn test_in_range_values_are_kept() {
        let loaded = Settings::from_toml(
            "[validation]\nmin_listing_images = 5\n\n[backend]\nlatency_ms = 99999\n",
        )
        .unwrap();
        assert_eq!(loaded.validation.min_listing_images, 5);
        assert_eq!(loaded.backend.latency_ms, MAX_LATENCY_MS);
    }

    #[test]
    fn test_backend_honours_latency() {
        let mut settings = Settings::default();
        settings.backend.latency_ms = 0;
        settings.backend.reject_requests = true;
        let backend = settings.backend();
        let err = backend
            .sign_in(&petadopt_model::SignInForm::default())
            .unwrap_err();
        assert_eq!(err.to_string(), REJECTION_REASON);
    }
}
