//! Tests for petadopt-model types.

use petadopt_model::{
    Choice, CompletionForm, ErrorKind, FieldError, FieldErrors, ImageRef, InterestStatus,
    ListingDraft, ListingField, Pet, PetCategory, PetCondition, PetId,
};

fn tracked_pet() -> Pet {
    Pet {
        id: PetId::new("2"),
        name: "Pet For Adoption".to_string(),
        breed: "Parrot".to_string(),
        category: PetCategory::Bird,
        age: "4yrs old".to_string(),
        location: "Mainland, Lagos Nigeria".to_string(),
        image: ImageRef::new("parrot"),
        favourite: true,
        interested: true,
        interest: Some(InterestStatus::granted()),
    }
}

#[test]
fn pet_serializes() {
    let pet = tracked_pet();
    let json = serde_json::to_string(&pet).expect("serialize pet");
    let round: Pet = serde_json::from_str(&json).expect("deserialize pet");
    assert_eq!(round, pet);
    assert!(json.contains("\"category\":\"bird\""));
    assert!(json.contains("\"consent\":\"granted\""));
}

#[test]
fn untracked_pet_omits_interest() {
    let mut pet = tracked_pet();
    pet.interest = None;
    let json = serde_json::to_value(&pet).expect("serialize pet");
    assert!(json.get("interest").is_none());
}

#[test]
fn empty_draft_has_no_selections() {
    let draft = ListingDraft::new();
    assert!(draft.adoption_type.is_none());
    assert!(draft.pet_type.is_none());
    assert_eq!(draft.images.filled_count(), 0);
    assert_eq!(draft.images.capacity(), 5);
}

#[test]
fn listing_errors_serialize_with_kind_tags() {
    let mut errors = FieldErrors::new();
    errors.insert(
        ListingField::Images,
        FieldError::new(
            ErrorKind::InsufficientImages {
                required: 3,
                provided: 1,
            },
            "Please add at least 3 different angle images",
        ),
    );
    let json = serde_json::to_value(&errors).expect("serialize errors");
    assert_eq!(json["images"]["kind"], "insufficient_images");
    assert_eq!(json["images"]["required"], 3);
    assert_eq!(json["images"]["provided"], 1);
}

#[test]
fn choice_options_are_ordered() {
    let labels: Vec<&str> = PetCondition::all().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Excellent", "Good", "Fair", "Poor"]);
    assert_eq!(CompletionForm::default().condition, None);
}
