//! Application-level state

use std::sync::Arc;

use chrono::Utc;
use petadopt_core::error::RepositoryResult;
use petadopt_core::mock_data::{self, PetOwner};
use petadopt_core::{
    AdoptionProgress, IdentityVerification, InMemoryPetRepository, ListingWizard,
    MarketplaceBackend, NotificationFeed, PetFilter, PetRepository, PetView,
};
use petadopt_model::{CompletionRecord, ListingReceipt, PetFlag, PetId, Route, Session};
use tracing::{debug, info, warn};

use super::AuthState;
use crate::settings::Settings;
use crate::settings::ui::SettingsWindow;

/// Modal confirmation shown after an account request succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessNotice {
    AccountCreated,
    PasswordUpdated,
}

impl SuccessNotice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AccountCreated => "Account Created!",
            Self::PasswordUpdated => "Password Updated!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AccountCreated => "Your Petad account has been created successfully",
            Self::PasswordUpdated => "You have successfully updated your password",
        }
    }

    pub fn action_label(&self) -> &'static str {
        "Proceed To Sign In"
    }

    /// Where the action button leads.
    pub fn target(&self) -> Route {
        Route::Login
    }
}

/// Tabs on the profile page
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    AdoptionRecord,
    ListingRecord,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdoptionRecord => "Adoption Record",
            Self::ListingRecord => "Listing Record",
        }
    }

    pub fn all() -> &'static [ProfileTab] {
        &[Self::AdoptionRecord, Self::ListingRecord]
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::AdoptionRecord => "You currently have no adoption record",
            Self::ListingRecord => "You currently have no listing record",
        }
    }
}

/// What happened during one [`AppState::poll_requests`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// A request is still running; the UI should repaint soon.
    pub pending: bool,
    /// Settings changed and should be saved.
    pub settings_changed: bool,
}

/// Top-level application state
pub struct AppState {
    route: Route,
    pub settings: Settings,
    /// Settings window is showing.
    pub settings_open: bool,
    /// Edited copy while the settings window is open.
    pub settings_pending: Option<Settings>,
    pub settings_window: SettingsWindow,
    pub backend: Arc<dyn MarketplaceBackend>,
    pub session: Option<Session>,
    pub auth: AuthState,
    pub repo: Box<dyn PetRepository>,

    pub feed_filter: PetFilter,
    pub favourites_filter: PetFilter,
    pub interests_filter: PetFilter,

    pub wizard: ListingWizard,
    wizard_open: bool,
    pub identity: IdentityVerification,
    /// Set once an identity verification succeeds.
    pub verified: bool,
    pub adoption: AdoptionProgress,
    pub owner: Option<PetOwner>,
    pub success: Option<SuccessNotice>,

    pub notifications: NotificationFeed,
    pub adoption_records: Vec<CompletionRecord>,
    pub listing_records: Vec<ListingReceipt>,
    pub profile_tab: ProfileTab,
}

impl AppState {
    pub fn new(settings: Settings, repo: Box<dyn PetRepository>) -> Self {
        let backend = settings.backend();
        let mut auth = AuthState::default();
        if let Some(email) = &settings.general.last_email {
            auth.sign_in.form.values.email.clone_from(email);
        }
        Self {
            route: Route::default(),
            settings,
            settings_open: false,
            settings_pending: None,
            settings_window: SettingsWindow::new(),
            backend,
            session: None,
            auth,
            repo,
            feed_filter: PetFilter::default(),
            favourites_filter: PetFilter::default(),
            interests_filter: PetFilter::default(),
            wizard: ListingWizard::new(),
            wizard_open: false,
            identity: IdentityVerification::default(),
            verified: false,
            adoption: AdoptionProgress::default(),
            owner: None,
            success: None,
            notifications: NotificationFeed::seeded(Utc::now()),
            adoption_records: Vec::new(),
            listing_records: Vec::new(),
            profile_tab: ProfileTab::default(),
        }
    }

    /// State backed by the built-in mock pet list.
    pub fn seeded(settings: Settings) -> RepositoryResult<Self> {
        let repo = InMemoryPetRepository::seeded()?;
        Ok(Self::new(settings, Box::new(repo)))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            info!(from = %self.route, to = %route, "navigate");
            self.route = route;
        }
    }

    /// Navigate by path; unknown paths land on the login page.
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            info!(email = %session.email, "signed out");
        }
        self.navigate(Route::Login);
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn open_settings(&mut self) {
        self.settings_pending = Some(self.settings.clone());
        self.settings_open = true;
    }

    /// Close the window, keeping the edits when `apply` is set.
    pub fn close_settings(&mut self, apply: bool) {
        if let Some(pending) = self.settings_pending.take()
            && apply
        {
            self.apply_settings(pending);
        }
        self.settings_open = false;
    }

    /// Replace the settings and rebuild the backend from them.
    pub fn apply_settings(&mut self, mut settings: Settings) {
        settings.sanitize();
        self.backend = settings.backend();
        self.settings = settings;
        info!("settings applied");
    }

    // ------------------------------------------------------------------
    // Pets
    // ------------------------------------------------------------------

    pub fn filter(&self, view: PetView) -> &PetFilter {
        match view {
            PetView::Feed => &self.feed_filter,
            PetView::Favourites => &self.favourites_filter,
            PetView::Interests => &self.interests_filter,
        }
    }

    pub fn filter_mut(&mut self, view: PetView) -> &mut PetFilter {
        match view {
            PetView::Feed => &mut self.feed_filter,
            PetView::Favourites => &mut self.favourites_filter,
            PetView::Interests => &mut self.interests_filter,
        }
    }

    pub fn toggle_flag(&mut self, id: &PetId, flag: PetFlag) {
        match self.repo.toggle_flag(id, flag) {
            Some(value) => debug!(pet = %id, flag = flag.as_str(), value, "flag toggled"),
            None => warn!(pet = %id, "toggle on unknown pet ignored"),
        }
    }

    pub fn start_adoption(&mut self, id: &PetId) {
        if let Err(error) = self.repo.start_adoption(id) {
            warn!(%error, "could not start adoption");
        }
    }

    /// Open the "confirm pet received" dialog for `id`.
    pub fn open_adoption(&mut self, id: &PetId) {
        match self.repo.get(id) {
            Some(pet) => self.adoption.open(pet),
            None => warn!(pet = %id, "adoption dialog for unknown pet"),
        }
    }

    /// Submit the adoption dialog; a confirmed record replaces any earlier
    /// record for the same pet.
    pub fn submit_adoption(&mut self) -> bool {
        let Some(record) = self.adoption.submit(&self.settings.validation) else {
            return false;
        };
        self.adoption_records
            .retain(|existing| existing.pet_id != record.pet_id);
        self.adoption_records.push(record);
        true
    }

    pub fn show_owner(&mut self) {
        self.owner = Some(mock_data::pet_owner());
    }

    // ------------------------------------------------------------------
    // Listing wizard
    // ------------------------------------------------------------------

    pub fn is_wizard_open(&self) -> bool {
        self.wizard_open
    }

    pub fn open_wizard(&mut self) {
        self.wizard.close();
        self.wizard_open = true;
        info!("listing wizard opened");
    }

    /// Close and discard the draft. A running submission keeps it open.
    pub fn close_wizard(&mut self) -> bool {
        if self.wizard.is_submitting() {
            return false;
        }
        self.wizard.close();
        self.wizard_open = false;
        true
    }

    /// "View Listing" on the success panel.
    pub fn view_listing(&mut self) {
        self.close_wizard();
        self.profile_tab = ProfileTab::ListingRecord;
        self.navigate(Route::Profile);
    }

    // ------------------------------------------------------------------
    // Identity verification
    // ------------------------------------------------------------------

    pub fn open_identity(&mut self) {
        self.identity.open();
    }

    pub fn close_identity(&mut self) {
        if self.identity.close() {
            self.verified = true;
            info!("identity verified");
        }
    }

    // ------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------

    /// Acknowledge the success notice and follow its action.
    pub fn dismiss_success(&mut self) {
        if let Some(notice) = self.success.take() {
            self.navigate(notice.target());
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.success.is_some()
            || self.owner.is_some()
            || self.adoption.is_open()
            || self.identity.is_open()
            || self.wizard_open
    }

    /// Close the dialog drawn on top. Returns whether one was closed.
    pub fn close_topmost_dialog(&mut self) -> bool {
        if self.success.is_some() {
            self.dismiss_success();
        } else if self.owner.is_some() {
            self.owner = None;
        } else if self.adoption.is_open() {
            self.adoption.close();
        } else if self.identity.is_open() {
            self.close_identity();
        } else if self.wizard_open {
            return self.close_wizard();
        } else {
            return false;
        }
        true
    }

    // ------------------------------------------------------------------
    // Background requests
    // ------------------------------------------------------------------

    /// Collect finished backend requests and apply their effects.
    pub fn poll_requests(&mut self) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        if let Some(Ok(session)) = self.auth.sign_in.poll() {
            outcome.settings_changed = self.remember(&session);
            self.complete_sign_in(session);
        }
        if let Some(Ok(_)) = self.auth.register.poll() {
            self.auth.register.reset();
            self.success = Some(SuccessNotice::AccountCreated);
        }
        if let Some(Ok(())) = self.auth.forgot.poll() {
            self.auth.forgot.reset();
            self.navigate(Route::ResetPassword);
        }
        if let Some(Ok(())) = self.auth.reset.poll() {
            self.auth.reset.reset();
            self.auth.show_confirm_password = false;
            self.success = Some(SuccessNotice::PasswordUpdated);
        }
        if let Some(receipt) = self.wizard.poll() {
            self.listing_records.push(receipt);
        }

        outcome.pending = self.auth.is_pending() || self.wizard.is_submitting();
        outcome
    }

    fn complete_sign_in(&mut self, session: Session) {
        info!(email = %session.email, "signed in");
        self.session = Some(session);
        let email = self.auth.sign_in.form.values.email.clone();
        self.auth.sign_in.reset();
        if self.settings.general.remember_email {
            self.auth.sign_in.form.values.email = email;
        }
        self.navigate(Route::Home);
    }

    /// Store the signed-in email if enabled. Returns whether settings changed.
    fn remember(&mut self, session: &Session) -> bool {
        let general = &mut self.settings.general;
        if !general.remember_email || general.last_email.as_deref() == Some(&session.email) {
            return false;
        }
        general.last_email = Some(session.email.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_validate::ValidationRules;

    fn state() -> AppState {
        AppState::seeded(Settings::default()).unwrap()
    }

    #[test]
    fn test_starts_on_login() {
        let state = state();
        assert_eq!(state.route(), Route::Login);
        assert!(!state.has_dialog());
    }

    #[test]
    fn test_navigate_path() {
        let mut state = state();
        state.navigate_path("/favourites/");
        assert_eq!(state.route(), Route::Favourites);
        state.navigate_path("/nowhere");
        assert_eq!(state.route(), Route::Login);
    }

    #[test]
    fn test_filters_are_per_page() {
        let mut state = state();
        state.filter_mut(PetView::Favourites).location = "lagos".to_string();
        assert!(state.filter(PetView::Favourites).is_active());
        assert!(!state.filter(PetView::Feed).is_active());
        assert!(!state.filter(PetView::Interests).is_active());
    }

    #[test]
    fn test_escape_order() {
        let mut state = state();
        state.open_wizard();
        state.show_owner();
        state.success = Some(SuccessNotice::AccountCreated);

        assert!(state.close_topmost_dialog());
        assert!(state.success.is_none());
        assert_eq!(state.route(), Route::Login);
        assert!(state.close_topmost_dialog());
        assert!(state.owner.is_none());
        assert!(state.close_topmost_dialog());
        assert!(!state.is_wizard_open());
        assert!(!state.close_topmost_dialog());
    }

    #[test]
    fn test_adoption_record_replaces_previous() {
        use petadopt_model::PetCondition;

        let mut state = state();
        let id = PetId::new("3");
        for location in ["Ikeja", "Yaba"] {
            state.open_adoption(&id);
            let form = &mut state.adoption.form.values;
            form.date_received = "2024-06-01".to_string();
            form.receipt_location = location.to_string();
            form.condition = Some(PetCondition::Good);
            assert!(state.submit_adoption());
            state.adoption.close();
        }
        assert_eq!(state.adoption_records.len(), 1);
        assert_eq!(state.adoption_records[0].form.receipt_location, "Yaba");
    }

    #[test]
    fn test_settings_cancel_discards_edits() {
        let mut state = state();
        state.open_settings();
        if let Some(pending) = state.settings_pending.as_mut() {
            pending.general.dark_mode = true;
        }
        state.close_settings(false);
        assert!(!state.settings.general.dark_mode);

        state.open_settings();
        if let Some(pending) = state.settings_pending.as_mut() {
            pending.validation.min_listing_images = 5;
        }
        state.close_settings(true);
        assert_eq!(state.settings.validation.min_listing_images, 5);
        assert!(!state.settings_open);
    }

    #[test]
    fn test_applied_image_minimum_stays_in_slot_range() {
        let mut state = state();
        let mut settings = Settings::default();
        settings.validation.min_listing_images = 0;
        state.apply_settings(settings);
        assert_eq!(
            state.settings.validation.min_listing_images,
            ValidationRules::default().min_listing_images
        );

        state.open_settings();
        if let Some(pending) = state.settings_pending.as_mut() {
            pending.validation.min_listing_images = 9;
        }
        state.close_settings(true);
        assert_eq!(
            state.settings.validation.min_listing_images,
            ValidationRules::default().min_listing_images
        );
    }

    #[test]
    fn test_identity_success_marks_verified() {
        let mut state = state();
        state.open_identity();
        state.identity.form.nin = "1234567890".to_string();
        state.identity.verify(&state.settings.validation);
        state.close_identity();
        assert!(state.verified);
    }
}
