//! Pure form validators.
//!
//! Each validator maps a form's values and the active [`ValidationRules`] to
//! a [`FieldErrors`] map; an empty map means the form may be submitted.

mod account;
mod adoption;
pub mod listing;
pub mod rules;

use serde::Serialize;

use petadopt_model::{FieldErrors, FormField};

pub use listing::{validate_details, validate_images};
pub use rules::{IdentityNumberRule, ValidationRules, is_valid_email};

/// A form whose values can be checked field by field.
pub trait Validate {
    type Field: FormField + Serialize;

    /// Recompute all field errors from scratch.
    fn validate(&self, rules: &ValidationRules) -> FieldErrors<Self::Field>;

    /// Validate and log the outcome.
    fn check(&self, rules: &ValidationRules, form: &str) -> FieldErrors<Self::Field> {
        let errors = self.validate(rules);
        if errors.is_empty() {
            tracing::debug!(form, "validation passed");
        } else {
            let fields: Vec<&str> = errors.fields().map(|f| f.key()).collect();
            tracing::debug!(form, ?fields, "validation failed");
        }
        errors
    }
}
