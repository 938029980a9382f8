//! Account forms: sign-in, registration, password recovery, identity.

use serde::{Deserialize, Serialize};

use crate::form::FormField;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInField {
    Email,
    Password,
}

impl FormField for SignInField {
    fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::Password => "Password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub full_name: String,
    /// National Identity Number.
    pub nin: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterField {
    Email,
    FullName,
    Nin,
    Password,
}

impl FormField for RegisterField {
    fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FullName => "full_name",
            Self::Nin => "nin",
            Self::Password => "password",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::FullName => "Full Name",
            Self::Nin => "NIN",
            Self::Password => "Password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForgotPasswordField {
    Email,
}

impl FormField for ForgotPasswordField {
    fn key(&self) -> &'static str {
        "email"
    }

    fn label(&self) -> &'static str {
        "Email Address"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPasswordField {
    Password,
    ConfirmPassword,
}

impl FormField for ResetPasswordField {
    fn key(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Password => "Enter Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }
}

/// Input of the identity verification dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityForm {
    pub nin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityField {
    Nin,
}

impl FormField for IdentityField {
    fn key(&self) -> &'static str {
        "nin"
    }

    fn label(&self) -> &'static str {
        "NIN (National Identity Number)"
    }
}

/// Signed-in user returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
}
