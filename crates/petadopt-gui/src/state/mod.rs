//! Application state management

mod app_state;
mod auth_state;

pub use app_state::{AppState, PollOutcome, ProfileTab, SuccessNotice};
pub use auth_state::{
    AuthFlow, AuthState, REGISTER_FAILED, RESET_FAILED, RESET_LINK_FAILED, SIGN_IN_FAILED,
};
