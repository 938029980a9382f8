//! End-to-end state flows driven the way the event loop drives them.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use petadopt_core::{PetView, visible};
use petadopt_gui::settings::Settings;
use petadopt_gui::state::{AppState, ProfileTab, REGISTER_FAILED, SuccessNotice};
use petadopt_model::{
    AdoptionType, AgeGroup, Gender, ImageAttachment, ListingField, PetCategory, PetFlag, Region,
    Route, VaccinationStatus,
};

fn instant_settings() -> Settings {
    let mut settings = Settings::default();
    settings.backend.latency_ms = 0;
    settings.backend.reset_latency_ms = 0;
    settings
}

fn state_with(settings: Settings) -> AppState {
    AppState::seeded(settings).unwrap()
}

/// Poll like the frame loop until nothing is pending.
fn settle(state: &mut AppState) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut settings_changed = false;
    loop {
        let outcome = state.poll_requests();
        settings_changed |= outcome.settings_changed;
        if !outcome.pending {
            return settings_changed;
        }
        assert!(Instant::now() < deadline, "request never finished");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn sign_in_opens_home_and_remembers_email() {
    let mut state = state_with(instant_settings());
    state.auth.sign_in.form.values.email = "ada@example.com".to_string();
    state.auth.sign_in.form.values.password = "x".to_string();

    assert!(
        state
            .auth
            .submit_sign_in(&state.settings.validation, &state.backend)
    );
    assert!(settle(&mut state));

    assert_eq!(state.route(), Route::Home);
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(
        state.settings.general.last_email.as_deref(),
        Some("ada@example.com")
    );
    assert_eq!(state.auth.sign_in.form.values.email, "ada@example.com");
    assert!(state.auth.sign_in.form.values.password.is_empty());
}

#[test]
fn invalid_sign_in_never_reaches_backend() {
    let mut state = state_with(instant_settings());
    assert!(
        !state
            .auth
            .submit_sign_in(&state.settings.validation, &state.backend)
    );
    assert!(!state.auth.is_pending());
    assert_eq!(state.route(), Route::Login);
}

#[test]
fn register_shows_account_created_then_login() {
    let mut state = state_with(instant_settings());
    state.navigate(Route::Register);
    let values = &mut state.auth.register.form.values;
    values.email = "ada@example.com".to_string();
    values.full_name = "Ada Obi".to_string();
    values.nin = "12345678901".to_string();
    values.password = "password1".to_string();

    assert!(
        state
            .auth
            .submit_register(&state.settings.validation, &state.backend)
    );
    settle(&mut state);

    assert_eq!(state.success, Some(SuccessNotice::AccountCreated));
    assert!(state.auth.register.form.values.email.is_empty());
    state.dismiss_success();
    assert_eq!(state.route(), Route::Login);
}

#[test]
fn rejected_register_keeps_values_and_shows_failure() {
    let mut settings = instant_settings();
    settings.backend.reject_requests = true;
    let mut state = state_with(settings);
    let values = &mut state.auth.register.form.values;
    values.email = "ada@example.com".to_string();
    values.full_name = "Ada Obi".to_string();
    values.nin = "12345678901".to_string();
    values.password = "password1".to_string();

    state
        .auth
        .submit_register(&state.settings.validation, &state.backend);
    settle(&mut state);

    assert!(state.success.is_none());
    assert_eq!(state.auth.register.form.submit_error(), Some(REGISTER_FAILED));
    assert_eq!(state.auth.register.form.values.full_name, "Ada Obi");
}

#[test]
fn forgot_then_reset_password() {
    let mut state = state_with(instant_settings());
    state.navigate(Route::ForgotPassword);
    state.auth.forgot.form.values.email = "ada@example.com".to_string();
    state
        .auth
        .submit_forgot(&state.settings.validation, &state.backend);
    settle(&mut state);
    assert_eq!(state.route(), Route::ResetPassword);

    state.auth.reset.form.values.password = "password1".to_string();
    state.auth.reset.form.values.confirm_password = "password1".to_string();
    state
        .auth
        .submit_reset(&state.settings.validation, &state.backend);
    settle(&mut state);
    assert_eq!(state.success, Some(SuccessNotice::PasswordUpdated));
}

#[test]
fn listing_receipt_lands_on_profile() {
    let mut state = state_with(instant_settings());
    state.open_wizard();
    let wizard = &mut state.wizard;
    wizard.edit(ListingField::AdoptionType, |d| {
        d.adoption_type = Some(AdoptionType::Absolute);
    });
    wizard.edit(ListingField::Description, |d| d.description = "Playful".into());
    wizard.edit(ListingField::Title, |d| d.title = "Rex".into());
    wizard.edit(ListingField::PetType, |d| d.pet_type = Some(PetCategory::Dog));
    wizard.edit(ListingField::Breed, |d| d.breed = "Boerboel".into());
    wizard.edit(ListingField::Age, |d| d.age = Some(AgeGroup::Adult));
    wizard.edit(ListingField::Gender, |d| d.gender = Some(Gender::Male));
    wizard.edit(ListingField::Vaccination, |d| {
        d.vaccination = Some(VaccinationStatus::Full);
    });
    wizard.edit(ListingField::State, |d| d.state = Some(Region::Lagos));
    wizard.edit(ListingField::City, |d| d.city = "Ikeja".into());
    assert!(wizard.next());
    for idx in 0..3 {
        let path = PathBuf::from(format!("rex-{idx}.png"));
        wizard
            .set_image(idx, Some(ImageAttachment::from_path(path)))
            .unwrap();
    }
    assert!(
        state
            .wizard
            .submit(&state.settings.validation, &state.backend)
    );
    assert!(!state.close_wizard());
    settle(&mut state);

    assert_eq!(state.listing_records.len(), 1);
    assert_eq!(state.listing_records[0].title, "Rex");

    state.view_listing();
    assert!(!state.is_wizard_open());
    assert_eq!(state.route(), Route::Profile);
    assert_eq!(state.profile_tab, ProfileTab::ListingRecord);
}

#[test]
fn interest_toggle_moves_pet_between_views() {
    let mut state = state_with(instant_settings());
    let target = state
        .repo
        .list()
        .iter()
        .find(|p| !p.interested)
        .map(|p| p.id.clone())
        .unwrap();
    let interests = |state: &AppState| {
        visible(state.repo.list(), PetView::Interests, state.filter(PetView::Interests)).len()
    };
    let before = interests(&state);

    state.toggle_flag(&target, PetFlag::Interested);
    assert_eq!(interests(&state), before + 1);
}
