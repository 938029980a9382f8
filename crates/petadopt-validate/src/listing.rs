//! Per-step validation of the listing wizard.

use petadopt_model::{ErrorKind, FieldError, FieldErrors, ListingDraft, ListingField};

use crate::rules::ValidationRules;

/// Message shown under each missing detail field.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Check the ten detail fields. Text fields are trimmed first.
pub fn validate_details(draft: &ListingDraft) -> FieldErrors<ListingField> {
    let mut errors = FieldErrors::new();
    for field in ListingField::DETAILS {
        if !detail_present(draft, field) {
            errors.insert(field, FieldError::required(REQUIRED_MESSAGE));
        }
    }
    errors
}

fn detail_present(draft: &ListingDraft, field: ListingField) -> bool {
    match field {
        ListingField::AdoptionType => draft.adoption_type.is_some(),
        ListingField::Description => !draft.description.trim().is_empty(),
        ListingField::Title => !draft.title.trim().is_empty(),
        ListingField::PetType => draft.pet_type.is_some(),
        ListingField::Breed => !draft.breed.trim().is_empty(),
        ListingField::Age => draft.age.is_some(),
        ListingField::Gender => draft.gender.is_some(),
        ListingField::Vaccination => draft.vaccination.is_some(),
        ListingField::State => draft.state.is_some(),
        ListingField::City => !draft.city.trim().is_empty(),
        ListingField::Images => true,
    }
}

/// Check that enough image slots are filled.
pub fn validate_images(draft: &ListingDraft, rules: &ValidationRules) -> FieldErrors<ListingField> {
    let mut errors = FieldErrors::new();
    let required = rules.min_listing_images;
    let provided = draft.images.filled_count();
    if provided < required {
        errors.insert(
            ListingField::Images,
            FieldError::new(
                ErrorKind::InsufficientImages { required, provided },
                format!("Please add at least {required} different angle images"),
            ),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_model::{
        AdoptionType, AgeGroup, Gender, ImageAttachment, PetCategory, Region, VaccinationStatus,
    };
    use std::path::PathBuf;

    fn complete_draft() -> ListingDraft {
        ListingDraft {
            adoption_type: Some(AdoptionType::Absolute),
            description: "Friendly and house trained".to_string(),
            title: "Bingo".to_string(),
            pet_type: Some(PetCategory::Dog),
            breed: "German Shepherd".to_string(),
            age: Some(AgeGroup::Young),
            gender: Some(Gender::Male),
            vaccination: Some(VaccinationStatus::Full),
            state: Some(Region::Lagos),
            city: "Ikeja".to_string(),
            ..ListingDraft::default()
        }
    }

    #[test]
    fn test_complete_details_pass() {
        assert!(validate_details(&complete_draft()).is_empty());
    }

    #[test]
    fn test_whitespace_text_is_missing() {
        let mut draft = complete_draft();
        draft.breed = "   ".to_string();
        draft.state = None;
        let errors = validate_details(&draft);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ListingField::Breed, ListingField::State]
        );
        assert_eq!(errors.message(ListingField::Breed), Some("Required"));
    }

    #[test]
    fn test_image_threshold() {
        let rules = ValidationRules::default();
        let mut draft = complete_draft();
        for idx in 0..2 {
            draft
                .images
                .set(
                    idx,
                    Some(ImageAttachment::from_path(PathBuf::from(format!("{idx}.png")))),
                )
                .unwrap();
        }
        let errors = validate_images(&draft, &rules);
        assert_eq!(
            errors.message(ListingField::Images),
            Some("Please add at least 3 different angle images")
        );

        draft
            .images
            .set(4, Some(ImageAttachment::from_path(PathBuf::from("4.png"))))
            .unwrap();
        assert!(validate_images(&draft, &rules).is_empty());
    }
}
