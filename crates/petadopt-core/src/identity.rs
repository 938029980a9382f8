//! Identity verification dialog controller.

use petadopt_model::IdentityForm;
use petadopt_validate::{Validate, ValidationRules};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentityPhase {
    #[default]
    Input,
    Verified,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct IdentityVerification {
    open: bool,
    phase: IdentityPhase,
    pub form: IdentityForm,
}

impl IdentityVerification {
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> IdentityPhase {
        self.phase
    }

    /// Check the entered number against the verification rule.
    pub fn verify(&mut self, rules: &ValidationRules) -> IdentityPhase {
        self.phase = if self.form.validate(rules).is_empty() {
            IdentityPhase::Verified
        } else {
            IdentityPhase::Failed
        };
        info!(phase = ?self.phase, "identity verification attempted");
        self.phase
    }

    /// Back to input with an empty value.
    pub fn retry(&mut self) {
        self.phase = IdentityPhase::Input;
        self.form = IdentityForm::default();
    }

    /// Close and reset. Returns whether the user was verified.
    pub fn close(&mut self) -> bool {
        let verified = self.phase == IdentityPhase::Verified;
        *self = Self::default();
        verified
    }
}
