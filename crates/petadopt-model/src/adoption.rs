//! Data collected when an adopter confirms they received a pet.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::form::FormField;
use crate::pet::PetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Choice for PetCondition {
    const KIND: &'static str = "pet condition";

    fn all() -> &'static [Self] {
        &[Self::Excellent, Self::Good, Self::Fair, Self::Poor]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionForm {
    pub date_received: String,
    pub receipt_location: String,
    pub condition: Option<PetCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionField {
    DateReceived,
    ReceiptLocation,
    Condition,
}

impl FormField for CompletionField {
    fn key(&self) -> &'static str {
        match self {
            Self::DateReceived => "date_received",
            Self::ReceiptLocation => "receipt_location",
            Self::Condition => "condition",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::DateReceived => "Date Pet Was Received",
            Self::ReceiptLocation => "Receipt Location / Address",
            Self::Condition => "Pet Condition",
        }
    }
}

/// A confirmed adoption, shown on the profile's adoption record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub pet_id: PetId,
    pub pet_name: String,
    pub form: CompletionForm,
}
