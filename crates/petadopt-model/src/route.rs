//! Navigation targets of the application.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Login,
    Register,
    ResetPassword,
    ForgotPassword,
    Home,
    Profile,
    Favourites,
    Interests,
    Listings,
    Notifications,
}

impl Route {
    /// Marketplace routes shown in the navigation bar, in order.
    pub const MARKETPLACE: [Route; 6] = [
        Self::Home,
        Self::Favourites,
        Self::Interests,
        Self::Listings,
        Self::Notifications,
        Self::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ResetPassword => "/reset",
            Self::ForgotPassword => "/forgot-password",
            Self::Home => "/home",
            Self::Profile => "/profile",
            Self::Favourites => "/favourites",
            Self::Interests => "/interests",
            Self::Listings => "/listings",
            Self::Notifications => "/notifications",
        }
    }

    /// Resolve a path. The root and unknown paths redirect to `/login`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/register" => Self::Register,
            "/reset" => Self::ResetPassword,
            "/forgot-password" => Self::ForgotPassword,
            "/home" => Self::Home,
            "/profile" => Self::Profile,
            "/favourites" => Self::Favourites,
            "/interests" => Self::Interests,
            "/listings" => Self::Listings,
            "/notifications" => Self::Notifications,
            _ => Self::Login,
        }
    }

    /// Whether this route belongs to the signed-out account flows.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Login | Self::Register | Self::ResetPassword | Self::ForgotPassword
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::ResetPassword => "Reset Password",
            Self::ForgotPassword => "Forgot Password",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Favourites => "Favourites",
            Self::Interests => "Interests",
            Self::Listings => "Listings",
            Self::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [
            Route::Login,
            Route::Register,
            Route::ResetPassword,
            Route::ForgotPassword,
            Route::Home,
            Route::Profile,
            Route::Favourites,
            Route::Interests,
            Route::Listings,
            Route::Notifications,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_root_and_unknown_redirect_to_login() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path("/nope"), Route::Login);
        assert_eq!(Route::from_path("/home/"), Route::Home);
    }

    #[test]
    fn test_auth_routes() {
        assert!(Route::ForgotPassword.is_auth());
        assert!(!Route::Listings.is_auth());
        assert!(Route::MARKETPLACE.iter().all(|r| !r.is_auth()));
    }
}
