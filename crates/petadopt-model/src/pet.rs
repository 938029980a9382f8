//! Pet records shown on the home feed, favourites and interest pages.
//!
//! A [`Pet`] carries two user-controlled flags (favourite, interested) and,
//! for pets the user has expressed interest in, an [`InterestStatus`]
//! describing how far the adoption has progressed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::choice::Choice;
use crate::error::ModelError;

/// Unique identifier of a pet record within the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(String);

impl PetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Species category. Listings and filters only ever use these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetCategory {
    Dog,
    Cat,
    Bird,
    Other,
}

impl Choice for PetCategory {
    const KIND: &'static str = "pet category";

    fn all() -> &'static [Self] {
        &[Self::Dog, Self::Cat, Self::Bird, Self::Other]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PetCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_value(s)
    }
}

/// Whether the owner approved the user's interest in their pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    Awaiting,
    Granted,
}

/// Interest-tracking state attached to pets on the interest page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestStatus {
    pub consent: ConsentState,
    pub adoption_in_progress: bool,
}

impl InterestStatus {
    pub fn awaiting() -> Self {
        Self {
            consent: ConsentState::Awaiting,
            adoption_in_progress: false,
        }
    }

    pub fn granted() -> Self {
        Self {
            consent: ConsentState::Granted,
            adoption_in_progress: false,
        }
    }
}

/// Where a tracked pet stands in the adoption flow.
///
/// Derived from [`InterestStatus`]; drives which banner and action the
/// interest card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptionStage {
    /// No interest tracking for this pet.
    NotTracked,
    /// Owner has not yet granted consent.
    AwaitingConsent,
    /// Consent granted; the adopter may start the adoption process.
    ReadyToStart,
    /// Adoption started; waiting for the adopter to confirm receipt.
    InProgress,
}

impl AdoptionStage {
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::NotTracked => None,
            Self::AwaitingConsent => Some("Awaiting owner's consent"),
            Self::ReadyToStart => Some("Owner's consent granted"),
            Self::InProgress => Some("Adoption in progress"),
        }
    }

    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Self::ReadyToStart => Some("Start Adoption Process"),
            Self::InProgress => Some("Confirm Pet Received"),
            Self::NotTracked | Self::AwaitingConsent => None,
        }
    }
}

/// The two boolean flags a user can toggle on a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetFlag {
    Favourite,
    Interested,
}

impl PetFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favourite => "favourite",
            Self::Interested => "interested",
        }
    }
}

/// Key of a bundled pet picture (resolved to an image by the UI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A pet available for adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub breed: String,
    pub category: PetCategory,
    /// Display label such as "4yrs old".
    pub age: String,
    pub location: String,
    pub image: ImageRef,
    pub favourite: bool,
    pub interested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<InterestStatus>,
}

impl Pet {
    pub fn flag(&self, flag: PetFlag) -> bool {
        match flag {
            PetFlag::Favourite => self.favourite,
            PetFlag::Interested => self.interested,
        }
    }

    pub fn set_flag(&mut self, flag: PetFlag, value: bool) {
        match flag {
            PetFlag::Favourite => self.favourite = value,
            PetFlag::Interested => self.interested = value,
        }
    }

    pub fn adoption_stage(&self) -> AdoptionStage {
        match self.interest {
            None => AdoptionStage::NotTracked,
            Some(InterestStatus {
                consent: ConsentState::Awaiting,
                ..
            }) => AdoptionStage::AwaitingConsent,
            Some(InterestStatus {
                consent: ConsentState::Granted,
                adoption_in_progress: false,
            }) => AdoptionStage::ReadyToStart,
            Some(InterestStatus {
                consent: ConsentState::Granted,
                adoption_in_progress: true,
            }) => AdoptionStage::InProgress,
        }
    }

    /// Copy of this record with the adoption marked as started.
    ///
    /// Returns `None` unless the pet is [`AdoptionStage::ReadyToStart`].
    pub fn with_adoption_started(&self) -> Option<Pet> {
        if self.adoption_stage() != AdoptionStage::ReadyToStart {
            return None;
        }
        let mut next = self.clone();
        if let Some(status) = next.interest.as_mut() {
            status.adoption_in_progress = true;
        }
        Some(next)
    }

    /// Subtitle line shown under the card title ("Dog, German Shepard, 4yrs old").
    pub fn subtitle(&self) -> String {
        format!("{}, {}", self.breed, self.age)
    }
}
