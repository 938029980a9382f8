//! End-to-end behaviour of the marketplace controllers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use petadopt_core::{
    CategoryFilter, EmptyState, IdentityPhase, IdentityVerification, InMemoryPetRepository,
    ListingWizard, MarketplaceBackend, MockBackend, PetFilter, PetRepository, PetView,
    WizardStep, visible,
};
use petadopt_model::{
    AdoptionStage, AdoptionType, AgeGroup, Gender, ImageAttachment, ListingField, PetCategory,
    PetFlag, PetId, Region, VaccinationStatus,
};
use petadopt_validate::ValidationRules;
use proptest::prelude::*;

fn instant_backend() -> Arc<dyn MarketplaceBackend> {
    Arc::new(MockBackend::new().with_latency(Duration::ZERO))
}

/// Fill every detail field except those whose bit is set in `skip`.
fn fill_details_except(wizard: &mut ListingWizard, skip: u16) {
    for (bit, field) in ListingField::DETAILS.into_iter().enumerate() {
        if skip & (1 << bit) != 0 {
            continue;
        }
        wizard.edit(field, |d| match field {
            ListingField::AdoptionType => d.adoption_type = Some(AdoptionType::Absolute),
            ListingField::Description => d.description = "Playful".to_string(),
            ListingField::Title => d.title = "Snow".to_string(),
            ListingField::PetType => d.pet_type = Some(PetCategory::Cat),
            ListingField::Breed => d.breed = "Persian".to_string(),
            ListingField::Age => d.age = Some(AgeGroup::Baby),
            ListingField::Gender => d.gender = Some(Gender::Unknown),
            ListingField::Vaccination => d.vaccination = Some(VaccinationStatus::Full),
            ListingField::State => d.state = Some(Region::Lagos),
            ListingField::City => d.city = "Yaba".to_string(),
            ListingField::Images => {}
        });
    }
}

proptest! {
    #[test]
    fn details_step_reports_exactly_missing_fields(skip in 0u16..(1 << 10)) {
        let mut wizard = ListingWizard::new();
        fill_details_except(&mut wizard, skip);
        let advanced = wizard.next();

        let expected: Vec<ListingField> = ListingField::DETAILS
            .into_iter()
            .enumerate()
            .filter(|(bit, _)| skip & (1 << bit) != 0)
            .map(|(_, field)| field)
            .collect();
        prop_assert_eq!(advanced, expected.is_empty());
        prop_assert_eq!(wizard.errors().fields().collect::<Vec<_>>(), expected.clone());
        if !expected.is_empty() {
            prop_assert_eq!(wizard.step(), WizardStep::Details);
        }
    }

    #[test]
    fn double_toggle_restores_flag(idx in 0usize..15, favourite in any::<bool>()) {
        let mut repo = InMemoryPetRepository::seeded().unwrap();
        let flag = if favourite { PetFlag::Favourite } else { PetFlag::Interested };
        let id = repo.list()[idx].id.clone();
        let before = repo.list().to_vec();
        repo.toggle_flag(&id, flag);
        repo.toggle_flag(&id, flag);
        prop_assert_eq!(repo.list(), before.as_slice());
    }
}

#[test]
fn images_step_needs_three_of_five() {
    let rules = ValidationRules::default();
    for count in 0..=5 {
        let mut wizard = ListingWizard::new();
        fill_details_except(&mut wizard, 0);
        assert!(wizard.next());
        for idx in 0..count {
            let image = ImageAttachment::from_path(PathBuf::from(format!("{idx}.png")));
            wizard.set_image(idx, Some(image)).unwrap();
        }
        let accepted = wizard.submit(&rules, &instant_backend());
        assert_eq!(accepted, count >= 3, "count {count}");
        if accepted {
            assert!(wizard.wait().is_some());
            assert_eq!(wizard.step(), WizardStep::Submitted);
        } else {
            assert_eq!(
                wizard.errors().message(ListingField::Images),
                Some("Please add at least 3 different angle images")
            );
        }
    }
}

#[test]
fn location_filter_matches_lagos_only() {
    let repo = InMemoryPetRepository::seeded().unwrap();
    let filter = PetFilter {
        category: CategoryFilter::All,
        location: "lagos".to_string(),
    };
    let shown = visible(repo.list(), PetView::Feed, &filter);
    assert!(shown.iter().all(|p| p.location.contains("Lagos")));
    assert!(shown.iter().any(|p| p.location == "Mainland, Lagos Nigeria"));
    assert!(!shown.iter().any(|p| p.location == "Abuja, Nigeria"));
}

#[test]
fn filters_and_flags_are_independent() {
    let mut repo = InMemoryPetRepository::seeded().unwrap();
    let mut filter = PetFilter {
        category: CategoryFilter::Only(PetCategory::Dog),
        location: "ikeja".to_string(),
    };
    repo.toggle_flag(&PetId::new("h5"), PetFlag::Favourite);
    let favourites = visible(repo.list(), PetView::Favourites, &filter);
    assert_eq!(favourites.len(), 1);
    assert_eq!(favourites[0].id, PetId::new("h5"));

    filter.location = "abuja".to_string();
    assert_eq!(
        EmptyState::classify(repo.list(), PetView::Favourites, &filter),
        Some(EmptyState::NoMatches)
    );
    filter.reset();
    assert_eq!(repo.count_flagged(PetFlag::Favourite), 4);
    assert_eq!(
        visible(repo.list(), PetView::Favourites, &filter).len(),
        4
    );
}

#[test]
fn interest_page_progression() {
    let mut repo = InMemoryPetRepository::seeded().unwrap();
    let ready = repo.in_stage(AdoptionStage::ReadyToStart);
    assert_eq!(ready.len(), 1);
    let id = ready[0].id.clone();
    repo.start_adoption(&id).unwrap();
    assert_eq!(repo.in_stage(AdoptionStage::InProgress).len(), 2);
    assert!(repo.in_stage(AdoptionStage::ReadyToStart).is_empty());
}

#[test]
fn identity_verification_outcomes() {
    let rules = ValidationRules::default();
    for (input, expected) in [
        ("1234567890", IdentityPhase::Verified),
        ("abc", IdentityPhase::Failed),
        ("123456789", IdentityPhase::Failed),
    ] {
        let mut dialog = IdentityVerification::default();
        dialog.open();
        dialog.form.nin = input.to_string();
        assert_eq!(dialog.verify(&rules), expected, "{input}");
    }
}
