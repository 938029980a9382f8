//! Validators for the account forms.

use petadopt_model::{
    FieldError, FieldErrors, ForgotPasswordField, ForgotPasswordForm, IdentityField,
    IdentityForm, RegisterField, RegisterForm, ResetPasswordField, ResetPasswordForm,
    SignInField, SignInForm,
};

use crate::Validate;
use crate::rules::{ValidationRules, check_email, check_new_password};

impl Validate for SignInForm {
    type Field = SignInField;

    /// Only presence of the password is checked when signing in.
    fn validate(&self, _rules: &ValidationRules) -> FieldErrors<SignInField> {
        let mut errors = FieldErrors::new();
        if let Some(error) = check_email(&self.email) {
            errors.insert(SignInField::Email, error);
        }
        if self.password.is_empty() {
            errors.insert(
                SignInField::Password,
                FieldError::required("Password is required"),
            );
        }
        errors
    }
}

impl Validate for RegisterForm {
    type Field = RegisterField;

    fn validate(&self, rules: &ValidationRules) -> FieldErrors<RegisterField> {
        let mut errors = FieldErrors::new();
        if let Some(error) = check_email(&self.email) {
            errors.insert(RegisterField::Email, error);
        }

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.insert(
                RegisterField::FullName,
                FieldError::required("Full name is required"),
            );
        } else if full_name.chars().count() < 2 {
            errors.insert(
                RegisterField::FullName,
                FieldError::too_short(2, "Please enter your full name"),
            );
        }

        if self.nin.trim().is_empty() {
            errors.insert(RegisterField::Nin, FieldError::required("NIN is required"));
        } else if !rules.registration_identity.accepts(&self.nin) {
            errors.insert(
                RegisterField::Nin,
                FieldError::invalid_format(rules.registration_identity.failure_message()),
            );
        }

        if let Some(error) = check_new_password(&self.password, rules) {
            errors.insert(RegisterField::Password, error);
        }
        errors
    }
}

impl Validate for ForgotPasswordForm {
    type Field = ForgotPasswordField;

    fn validate(&self, _rules: &ValidationRules) -> FieldErrors<ForgotPasswordField> {
        let mut errors = FieldErrors::new();
        if let Some(error) = check_email(&self.email) {
            errors.insert(ForgotPasswordField::Email, error);
        }
        errors
    }
}

impl Validate for ResetPasswordForm {
    type Field = ResetPasswordField;

    fn validate(&self, rules: &ValidationRules) -> FieldErrors<ResetPasswordField> {
        let mut errors = FieldErrors::new();
        if let Some(error) = check_new_password(&self.password, rules) {
            errors.insert(ResetPasswordField::Password, error);
        }
        if self.confirm_password.is_empty() {
            errors.insert(
                ResetPasswordField::ConfirmPassword,
                FieldError::required("Confirm Password is required"),
            );
        } else if self.confirm_password != self.password {
            errors.insert(
                ResetPasswordField::ConfirmPassword,
                FieldError::mismatch("Passwords do not match"),
            );
        }
        errors
    }
}

impl Validate for IdentityForm {
    type Field = IdentityField;

    /// Verification has no separate "required" state; an empty value simply
    /// fails the rule.
    fn validate(&self, rules: &ValidationRules) -> FieldErrors<IdentityField> {
        let mut errors = FieldErrors::new();
        let rule = rules.verification_identity;
        if !rule.accepts(&self.nin) {
            errors.insert(
                IdentityField::Nin,
                FieldError::invalid_format(rule.failure_message()),
            );
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_model::ErrorKind;

    fn register(email: &str, full_name: &str, nin: &str, password: &str) -> RegisterForm {
        RegisterForm {
            email: email.to_string(),
            full_name: full_name.to_string(),
            nin: nin.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_sign_in_blank_fields() {
        let errors = SignInForm::default().validate(&ValidationRules::default());
        assert_eq!(
            errors.message(SignInField::Email),
            Some("Email address is required")
        );
        assert_eq!(
            errors.message(SignInField::Password),
            Some("Password is required")
        );
    }

    #[test]
    fn test_sign_in_accepts_short_password() {
        let form = SignInForm {
            email: "ada@example.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(form.validate(&ValidationRules::default()).is_empty());
    }

    #[test]
    fn test_whitespace_email_is_required_not_invalid() {
        let form = ForgotPasswordForm {
            email: "   ".to_string(),
        };
        let errors = form.validate(&ValidationRules::default());
        assert_eq!(
            errors.get(ForgotPasswordField::Email).map(|e| &e.kind),
            Some(&ErrorKind::Required)
        );
    }

    #[test]
    fn test_register_valid() {
        let form = register("ada@example.com", "Ada Obi", "12345678901", "password1");
        assert!(form.validate(&ValidationRules::default()).is_empty());
    }

    #[test]
    fn test_register_field_rules() {
        let form = register("ada@example", "A", "1234567890", "short");
        let errors = form.validate(&ValidationRules::default());
        assert_eq!(
            errors.message(RegisterField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message(RegisterField::FullName),
            Some("Please enter your full name")
        );
        assert_eq!(
            errors.message(RegisterField::Nin),
            Some("NIN must be at least 11 characters")
        );
        assert_eq!(
            errors.message(RegisterField::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_register_blank_nin() {
        let form = register("ada@example.com", "Ada Obi", "  ", "password1");
        let errors = form.validate(&ValidationRules::default());
        assert_eq!(errors.message(RegisterField::Nin), Some("NIN is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_reset_password_mismatch() {
        let form = ResetPasswordForm {
            password: "password1".to_string(),
            confirm_password: "password2".to_string(),
        };
        let errors = form.validate(&ValidationRules::default());
        assert_eq!(
            errors.message(ResetPasswordField::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert!(!errors.contains(ResetPasswordField::Password));
    }

    #[test]
    fn test_reset_password_blank_confirm() {
        let form = ResetPasswordForm {
            password: "password1".to_string(),
            confirm_password: String::new(),
        };
        let errors = form.validate(&ValidationRules::default());
        assert_eq!(
            errors.message(ResetPasswordField::ConfirmPassword),
            Some("Confirm Password is required")
        );
    }

    #[test]
    fn test_identity_form() {
        let rules = ValidationRules::default();
        let ok = IdentityForm {
            nin: "1234567890".to_string(),
        };
        assert!(ok.validate(&rules).is_empty());
        for bad in ["abc", "123456789", "", "12345 67890"] {
            let form = IdentityForm {
                nin: bad.to_string(),
            };
            assert!(form.validate(&rules).contains(IdentityField::Nin), "{bad}");
        }
    }
}
