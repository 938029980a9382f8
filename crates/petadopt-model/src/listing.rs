//! Listing draft assembled by the "create listing" wizard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::choice::Choice;
use crate::error::{ModelError, Result};
use crate::form::FormField;
use crate::pet::PetCategory;

/// Number of image slots offered by the wizard.
pub const IMAGE_SLOT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionType {
    Temporary,
    Absolute,
}

impl Choice for AdoptionType {
    const KIND: &'static str = "adoption type";

    fn all() -> &'static [Self] {
        &[Self::Temporary, Self::Absolute]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Temporary => "temporary",
            Self::Absolute => "absolute",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Temporary => "Temporary Adoption",
            Self::Absolute => "Absolute Adoption",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Baby,
    Young,
    Adult,
    Senior,
}

impl Choice for AgeGroup {
    const KIND: &'static str = "age group";

    fn all() -> &'static [Self] {
        &[Self::Baby, Self::Young, Self::Adult, Self::Senior]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Baby => "baby",
            Self::Young => "young",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Baby => "Baby (0-6 months)",
            Self::Young => "Young (6-12 months)",
            Self::Adult => "Adult (1-5 years)",
            Self::Senior => "Senior (5+ years)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Choice for Gender {
    const KIND: &'static str = "gender";

    fn all() -> &'static [Self] {
        &[Self::Male, Self::Female, Self::Unknown]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaccinationStatus {
    Full,
    NoneOrUnknown,
    Partial,
}

impl Choice for VaccinationStatus {
    const KIND: &'static str = "vaccination status";

    fn all() -> &'static [Self] {
        &[Self::Full, Self::NoneOrUnknown, Self::Partial]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Full => "yes",
            Self::NoneOrUnknown => "no",
            Self::Partial => "partial",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Full => "Yes, fully vaccinated",
            Self::NoneOrUnknown => "No / Unknown",
            Self::Partial => "Partially vaccinated",
        }
    }
}

/// State the pet is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Lagos,
    Abuja,
    Rivers,
    Other,
}

impl Choice for Region {
    const KIND: &'static str = "state";

    fn all() -> &'static [Self] {
        &[Self::Lagos, Self::Abuja, Self::Rivers, Self::Other]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Lagos => "lagos",
            Self::Abuja => "abuja",
            Self::Rivers => "rivers",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Lagos => "Lagos",
            Self::Abuja => "Abuja",
            Self::Rivers => "Rivers",
            Self::Other => "Other",
        }
    }
}

/// A picture picked from disk for one wizard slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageAttachment {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        Self { path, file_name }
    }
}

/// Fixed, ordered image slots. Empty slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSlots {
    slots: [Option<ImageAttachment>; IMAGE_SLOT_COUNT],
}

impl ImageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or clear, with `None`) the attachment in slot `index`.
    pub fn set(&mut self, index: usize, image: Option<ImageAttachment>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ModelError::SlotOutOfRange {
                index,
                capacity: IMAGE_SLOT_COUNT,
            })?;
        *slot = image;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ImageAttachment> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn capacity(&self) -> usize {
        IMAGE_SLOT_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&ImageAttachment>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }
}

/// The in-progress, unsaved listing.
///
/// Choice fields are `None` until the user selects a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub adoption_type: Option<AdoptionType>,
    pub description: String,
    pub title: String,
    pub pet_type: Option<PetCategory>,
    pub breed: String,
    pub age: Option<AgeGroup>,
    pub gender: Option<Gender>,
    pub vaccination: Option<VaccinationStatus>,
    pub state: Option<Region>,
    pub city: String,
    pub images: ImageSlots,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fields of the listing wizard, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingField {
    AdoptionType,
    Description,
    Title,
    PetType,
    Breed,
    Age,
    Gender,
    Vaccination,
    State,
    City,
    Images,
}

impl ListingField {
    /// The ten fields validated before leaving the details step.
    pub const DETAILS: [ListingField; 10] = [
        Self::AdoptionType,
        Self::Description,
        Self::Title,
        Self::PetType,
        Self::Breed,
        Self::Age,
        Self::Gender,
        Self::Vaccination,
        Self::State,
        Self::City,
    ];
}

impl FormField for ListingField {
    fn key(&self) -> &'static str {
        match self {
            Self::AdoptionType => "adoption_type",
            Self::Description => "description",
            Self::Title => "title",
            Self::PetType => "pet_type",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Vaccination => "vaccination",
            Self::State => "state",
            Self::City => "city",
            Self::Images => "images",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::AdoptionType => "Adoption Type",
            Self::Description => "Description",
            Self::Title => "Listing Title / Pet Name",
            Self::PetType => "Pet Type",
            Self::Breed => "Breed",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Vaccination => "Vaccination Status",
            Self::State => "State",
            Self::City => "City",
            Self::Images => "Images",
        }
    }
}

/// Acknowledgement returned once a listing is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingReceipt {
    pub reference: String,
    pub title: String,
    pub pet_type: Option<PetCategory>,
    pub city: String,
    pub image_count: usize,
    pub submitted_at: DateTime<Utc>,
}
