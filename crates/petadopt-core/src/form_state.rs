//! Editable form values plus their validation and submission state.

use petadopt_model::FieldErrors;
use petadopt_validate::{Validate, ValidationRules};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
}

#[derive(Debug, Clone)]
pub struct FormState<V: Validate> {
    pub values: V,
    errors: FieldErrors<V::Field>,
    submit_error: Option<String>,
    status: SubmitStatus,
}

impl<V: Validate + Default> Default for FormState<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: Validate> FormState<V> {
    pub fn new(values: V) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            submit_error: None,
            status: SubmitStatus::Idle,
        }
    }

    /// The user changed `field`: drop its error and any form-level error.
    pub fn edited(&mut self, field: V::Field) {
        self.errors.clear(field);
        self.submit_error = None;
    }

    /// Re-run every check; returns whether the form is clean.
    pub fn validate(&mut self, rules: &ValidationRules) -> bool {
        self.errors = self.values.validate(rules);
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors<V::Field> {
        &self.errors
    }

    pub fn error(&self, field: V::Field) -> Option<&str> {
        self.errors.message(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    /// Validate and, when clean, move to `Pending`. Returns whether the
    /// caller should start the request.
    pub fn begin_submit(&mut self, rules: &ValidationRules) -> bool {
        if self.is_pending() || !self.validate(rules) {
            return false;
        }
        self.submit_error = None;
        self.status = SubmitStatus::Pending;
        true
    }

    pub fn succeed(&mut self) {
        self.status = SubmitStatus::Succeeded;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = SubmitStatus::Idle;
        self.submit_error = Some(message.into());
    }

    /// Clear everything, values included.
    pub fn reset(&mut self)
    where
        V: Default,
    {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_model::{SignInField, SignInForm};

    #[test]
    fn test_edit_clears_field_and_submit_error() {
        let mut form: FormState<SignInForm> = FormState::default();
        assert!(!form.validate(&ValidationRules::default()));
        form.fail("Failed to sign in. Please try again.");
        form.edited(SignInField::Email);
        assert!(form.error(SignInField::Email).is_none());
        assert_eq!(form.error(SignInField::Password), Some("Password is required"));
        assert!(form.submit_error().is_none());
    }

    #[test]
    fn test_submit_lifecycle() {
        let rules = ValidationRules::default();
        let mut form = FormState::new(SignInForm {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        });
        assert!(form.begin_submit(&rules));
        assert!(form.is_pending());
        assert!(!form.begin_submit(&rules));
        form.succeed();
        assert_eq!(form.status(), SubmitStatus::Succeeded);
        form.reset();
        assert_eq!(form.values, SignInForm::default());
        assert_eq!(form.status(), SubmitStatus::Idle);
    }
}
