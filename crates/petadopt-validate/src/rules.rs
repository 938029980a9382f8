//! Configurable thresholds and shared field checks.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use petadopt_model::{FieldError, IMAGE_SLOT_COUNT};

/// Something@something.something, no whitespace and a single `@` per part.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Whether `value` looks like an email address. The raw value is matched.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// How a national identity number is accepted.
///
/// Registration and identity verification disagree on the format, so each
/// carries its own instance in [`ValidationRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "length", rename_all = "snake_case")]
pub enum IdentityNumberRule {
    /// Exactly `n` ASCII digits, compared on the raw input.
    ExactDigits(usize),
    /// At least `n` characters once surrounding whitespace is removed.
    MinLength(usize),
}

impl IdentityNumberRule {
    pub fn accepts(&self, raw: &str) -> bool {
        match *self {
            Self::ExactDigits(n) => {
                n > 0 && raw.len() == n && raw.bytes().all(|b| b.is_ascii_digit())
            }
            Self::MinLength(n) => raw.trim().chars().count() >= n,
        }
    }

    pub fn failure_message(&self) -> String {
        match *self {
            Self::ExactDigits(n) => format!("NIN must be exactly {n} digits"),
            Self::MinLength(n) => format!("NIN must be at least {n} characters"),
        }
    }

    pub fn length(&self) -> usize {
        match *self {
            Self::ExactDigits(n) | Self::MinLength(n) => n,
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            Self::ExactDigits(n) => format!("exactly {n} digits"),
            Self::MinLength(n) => format!("at least {n} characters"),
        }
    }
}

/// Thresholds applied by every validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub registration_identity: IdentityNumberRule,
    pub verification_identity: IdentityNumberRule,
    pub min_password_len: usize,
    pub min_listing_images: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            registration_identity: IdentityNumberRule::MinLength(11),
            verification_identity: IdentityNumberRule::ExactDigits(10),
            min_password_len: 8,
            min_listing_images: 3,
        }
    }
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registration_identity(mut self, rule: IdentityNumberRule) -> Self {
        self.registration_identity = rule;
        self
    }

    pub fn with_verification_identity(mut self, rule: IdentityNumberRule) -> Self {
        self.verification_identity = rule;
        self
    }

    pub fn with_min_password_len(mut self, len: usize) -> Self {
        self.min_password_len = len;
        self
    }

    pub fn with_min_listing_images(mut self, count: usize) -> Self {
        self.min_listing_images = count;
        self
    }

    /// Reset every out-of-range threshold to its default.
    ///
    /// The image minimum must fit the wizard's slots (`1..=IMAGE_SLOT_COUNT`);
    /// password and identity lengths must be at least 1. Returns whether
    /// anything was reset.
    pub fn sanitize(&mut self) -> bool {
        let defaults = Self::default();
        let mut reset = false;

        if !(1..=IMAGE_SLOT_COUNT).contains(&self.min_listing_images) {
            tracing::warn!(
                value = self.min_listing_images,
                max = IMAGE_SLOT_COUNT,
                "min_listing_images out of range, using default"
            );
            self.min_listing_images = defaults.min_listing_images;
            reset = true;
        }
        if self.min_password_len == 0 {
            tracing::warn!("min_password_len is 0, using default");
            self.min_password_len = defaults.min_password_len;
            reset = true;
        }
        if self.registration_identity.length() == 0 {
            tracing::warn!("registration_identity length is 0, using default");
            self.registration_identity = defaults.registration_identity;
            reset = true;
        }
        if self.verification_identity.length() == 0 {
            tracing::warn!("verification_identity length is 0, using default");
            self.verification_identity = defaults.verification_identity;
            reset = true;
        }
        reset
    }
}

/// Email check shared by sign-in, registration and password recovery.
pub(crate) fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::required("Email address is required"))
    } else if !is_valid_email(value) {
        Some(FieldError::invalid_format(
            "Please enter a valid email address",
        ))
    } else {
        None
    }
}

/// Password check for forms that set a new password.
pub(crate) fn check_new_password(value: &str, rules: &ValidationRules) -> Option<FieldError> {
    let min = rules.min_password_len;
    if value.is_empty() {
        Some(FieldError::required("Password is required"))
    } else if value.chars().count() < min {
        Some(FieldError::too_short(
            min,
            format!("Password must be at least {min} characters"),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@mail.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email(" ada@example.com"));
    }

    #[test]
    fn test_exact_digits_rule() {
        let rule = IdentityNumberRule::ExactDigits(10);
        assert!(rule.accepts("1234567890"));
        assert!(!rule.accepts("123456789"));
        assert!(!rule.accepts("12345678901"));
        assert!(!rule.accepts("abc"));
        assert!(!rule.accepts(" 123456789"));
        assert!(!rule.accepts(""));
    }

    #[test]
    fn test_min_length_rule_trims() {
        let rule = IdentityNumberRule::MinLength(11);
        assert!(rule.accepts("12345678901"));
        assert!(rule.accepts("  abcdefghijk "));
        assert!(!rule.accepts("  1234567890  "));
        assert_eq!(rule.failure_message(), "NIN must be at least 11 characters");
    }

    #[test]
    fn test_defaults_keep_both_identity_rules() {
        let rules = ValidationRules::default();
        assert_eq!(rules.registration_identity, IdentityNumberRule::MinLength(11));
        assert_eq!(rules.verification_identity, IdentityNumberRule::ExactDigits(10));

        let custom = ValidationRules::new()
            .with_verification_identity(IdentityNumberRule::ExactDigits(11))
            .with_min_password_len(12);
        assert_eq!(custom.min_password_len, 12);
        assert_eq!(custom.registration_identity, IdentityNumberRule::MinLength(11));
    }

    #[test]
    fn test_sanitize_resets_out_of_range_thresholds() {
        let mut rules = ValidationRules::new()
            .with_min_listing_images(7)
            .with_min_password_len(0)
            .with_verification_identity(IdentityNumberRule::ExactDigits(0));
        assert!(rules.sanitize());
        assert_eq!(rules, ValidationRules::default());

        let mut none = ValidationRules::new().with_min_listing_images(0);
        assert!(none.sanitize());
        assert_eq!(none.min_listing_images, 3);

        let mut valid = ValidationRules::new()
            .with_min_listing_images(IMAGE_SLOT_COUNT)
            .with_min_password_len(1);
        let before = valid.clone();
        assert!(!valid.sanitize());
        assert_eq!(valid, before);
    }

    #[test]
    fn test_new_password_counts_chars() {
        let rules = ValidationRules::default();
        assert!(check_new_password("ééééééé", &rules).is_some());
        assert!(check_new_password("éééééééé", &rules).is_none());
    }
}
