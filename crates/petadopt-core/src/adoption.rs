//! "Confirm pet received" dialog controller.

use petadopt_model::{CompletionForm, CompletionRecord, Pet, PetId};
use petadopt_validate::ValidationRules;
use tracing::info;

use crate::form_state::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptionPhase {
    Input,
    Confirmed,
}

#[derive(Debug, Clone)]
struct Subject {
    id: PetId,
    name: String,
}

#[derive(Debug, Clone)]
pub struct AdoptionProgress {
    subject: Option<Subject>,
    phase: AdoptionPhase,
    pub form: FormState<CompletionForm>,
}

impl Default for AdoptionProgress {
    fn default() -> Self {
        Self {
            subject: None,
            phase: AdoptionPhase::Input,
            form: FormState::default(),
        }
    }
}

impl AdoptionProgress {
    /// Open the dialog for `pet` with an empty form.
    pub fn open(&mut self, pet: &Pet) {
        *self = Self {
            subject: Some(Subject {
                id: pet.id.clone(),
                name: pet.name.clone(),
            }),
            ..Self::default()
        };
    }

    pub fn is_open(&self) -> bool {
        self.subject.is_some()
    }

    pub fn pet_id(&self) -> Option<&PetId> {
        self.subject.as_ref().map(|s| &s.id)
    }

    pub fn phase(&self) -> AdoptionPhase {
        self.phase
    }

    /// Validate; on success switch to `Confirmed` and hand back the record.
    pub fn submit(&mut self, rules: &ValidationRules) -> Option<CompletionRecord> {
        if self.phase != AdoptionPhase::Input {
            return None;
        }
        let subject = self.subject.as_ref()?;
        if !self.form.validate(rules) {
            return None;
        }
        self.phase = AdoptionPhase::Confirmed;
        self.form.succeed();
        info!(pet = %subject.id, "adoption completion confirmed");
        Some(CompletionRecord {
            pet_id: subject.id.clone(),
            pet_name: subject.name.clone(),
            form: self.form.values.clone(),
        })
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
