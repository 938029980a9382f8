//! One view per route, plus the navigation bar.

mod auth_layout;
mod favourites;
mod forgot_password;
mod home;
mod interests;
mod listings;
mod login;
mod nav;
mod notifications;
mod pet_grid;
mod profile;
mod register;
mod reset_password;

pub use favourites::FavouritesView;
pub use forgot_password::ForgotPasswordView;
pub use home::HomeView;
pub use interests::InterestsView;
pub use listings::ListingsView;
pub use login::LoginView;
pub use nav::NavBar;
pub use notifications::NotificationsView;
pub use profile::ProfileView;
pub use register::RegisterView;
pub use reset_password::ResetPasswordView;
