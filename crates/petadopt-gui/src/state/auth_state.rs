//! State of the four account pages.

use std::sync::Arc;

use petadopt_core::error::BackendResult;
use petadopt_core::{FormState, MarketplaceBackend, Pending, dispatch};
use petadopt_model::{
    ForgotPasswordForm, RegisterForm, ResetPasswordForm, Session, SignInForm,
};
use petadopt_validate::{Validate, ValidationRules};
use tracing::warn;

pub const SIGN_IN_FAILED: &str = "Failed to sign in. Please try again.";
pub const REGISTER_FAILED: &str = "Failed to create account. Please try again.";
pub const RESET_LINK_FAILED: &str = "Failed to send reset link. Please try again.";
pub const RESET_FAILED: &str = "Failed to reset password. Please try again.";

/// A form plus the backend request it submits.
#[derive(Debug)]
pub struct AuthFlow<V: Validate, T> {
    pub form: FormState<V>,
    /// Password characters shown in clear text.
    pub show_password: bool,
    failure: &'static str,
    pending: Option<Pending<T>>,
}

impl<V, T> AuthFlow<V, T>
where
    V: Validate + Default + Clone + Send + 'static,
    T: Send + 'static,
{
    pub fn new(failure: &'static str) -> Self {
        Self {
            form: FormState::default(),
            show_password: false,
            failure,
            pending: None,
        }
    }

    /// Validate and, when clean, start `call` on the backend.
    pub fn submit(
        &mut self,
        rules: &ValidationRules,
        backend: &Arc<dyn MarketplaceBackend>,
        label: &'static str,
        call: fn(&dyn MarketplaceBackend, &V) -> BackendResult<T>,
    ) -> bool {
        if !self.form.begin_submit(rules) {
            return false;
        }
        let values = self.form.values.clone();
        self.pending = Some(dispatch(backend, label, move |b| call(b, &values)));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Collect the result once it arrives.
    pub fn poll(&mut self) -> Option<BackendResult<T>> {
        let result = self.pending.as_mut()?.poll()?;
        self.pending = None;
        Some(self.settle(result))
    }

    /// Block until the request finishes.
    pub fn wait(&mut self) -> Option<BackendResult<T>> {
        let pending = self.pending.take()?;
        Some(self.settle(pending.wait()))
    }

    fn settle(&mut self, result: BackendResult<T>) -> BackendResult<T> {
        match &result {
            Ok(_) => self.form.succeed(),
            Err(error) => {
                warn!(%error, "account request failed");
                self.form.fail(self.failure);
            }
        }
        result
    }

    /// Clear values, errors and visibility.
    pub fn reset(&mut self) {
        self.form.reset();
        self.show_password = false;
    }
}

#[derive(Debug)]
pub struct AuthState {
    pub sign_in: AuthFlow<SignInForm, Session>,
    pub register: AuthFlow<RegisterForm, Session>,
    pub forgot: AuthFlow<ForgotPasswordForm, ()>,
    pub reset: AuthFlow<ResetPasswordForm, ()>,
    /// Visibility of the reset page's confirmation field.
    pub show_confirm_password: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            sign_in: AuthFlow::new(SIGN_IN_FAILED),
            register: AuthFlow::new(REGISTER_FAILED),
            forgot: AuthFlow::new(RESET_LINK_FAILED),
            reset: AuthFlow::new(RESET_FAILED),
            show_confirm_password: false,
        }
    }
}

impl AuthState {
    pub fn submit_sign_in(
        &mut self,
        rules: &ValidationRules,
        backend: &Arc<dyn MarketplaceBackend>,
    ) -> bool {
        self.sign_in
            .submit(rules, backend, "sign_in", |b, form| b.sign_in(form))
    }

    pub fn submit_register(
        &mut self,
        rules: &ValidationRules,
        backend: &Arc<dyn MarketplaceBackend>,
    ) -> bool {
        self.register
            .submit(rules, backend, "register", |b, form| b.register(form))
    }

    pub fn submit_forgot(
        &mut self,
        rules: &ValidationRules,
        backend: &Arc<dyn MarketplaceBackend>,
    ) -> bool {
        self.forgot.submit(rules, backend, "password_reset_link", |b, form| {
            b.request_password_reset(form)
        })
    }

    pub fn submit_reset(
        &mut self,
        rules: &ValidationRules,
        backend: &Arc<dyn MarketplaceBackend>,
    ) -> bool {
        self.reset
            .submit(rules, backend, "reset_password", |b, form| b.reset_password(form))
    }

    pub fn is_pending(&self) -> bool {
        self.sign_in.is_pending()
            || self.register.is_pending()
            || self.forgot.is_pending()
            || self.reset.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_core::MockBackend;
    use petadopt_model::SignInField;
    use std::time::Duration;

    fn backend(reject: bool) -> Arc<dyn MarketplaceBackend> {
        let mock = MockBackend::new().with_latency(Duration::ZERO);
        if reject {
            Arc::new(mock.rejecting("down"))
        } else {
            Arc::new(mock)
        }
    }

    #[test]
    fn test_invalid_form_never_dispatches() {
        let mut auth = AuthState::default();
        auth.sign_in.form.values.email = "not-an-email".to_string();
        assert!(!auth.submit_sign_in(&ValidationRules::default(), &backend(false)));
        assert!(!auth.is_pending());
        assert_eq!(
            auth.sign_in.form.error(SignInField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_failure_sets_form_error() {
        let mut auth = AuthState::default();
        auth.sign_in.form.values = SignInForm {
            email: "ada@example.com".to_string(),
            password: "whatever".to_string(),
        };
        assert!(auth.submit_sign_in(&ValidationRules::default(), &backend(true)));
        assert!(auth.sign_in.wait().is_some_and(|r| r.is_err()));
        assert_eq!(auth.sign_in.form.submit_error(), Some(SIGN_IN_FAILED));
        assert!(!auth.sign_in.form.is_pending());
    }

    #[test]
    fn test_reset_clears_visibility() {
        let mut flow: AuthFlow<SignInForm, Session> = AuthFlow::new(SIGN_IN_FAILED);
        flow.show_password = true;
        flow.form.values.email = "x".to_string();
        flow.reset();
        assert!(!flow.show_password);
        assert!(flow.form.values.email.is_empty());
    }
}
