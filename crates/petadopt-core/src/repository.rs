//! In-memory store of pet records.
//!
//! Records are never deleted; user actions either toggle one of the two
//! boolean flags or swap a record for an updated copy.

use std::collections::HashSet;

use petadopt_model::{AdoptionStage, Pet, PetFlag, PetId};
use tracing::debug;

use crate::error::{RepositoryError, RepositoryResult};
use crate::mock_data;

/// Source of the pet records shown on the marketplace pages.
pub trait PetRepository {
    /// All records in seed order.
    fn list(&self) -> &[Pet];

    fn get(&self, id: &PetId) -> Option<&Pet>;

    /// Negate `flag` on the matching record and return its new value.
    ///
    /// Unknown identifiers are ignored and yield `None`.
    fn toggle_flag(&mut self, id: &PetId, flag: PetFlag) -> Option<bool>;

    /// Swap the record stored under `id` for `record`.
    fn replace(&mut self, id: &PetId, record: Pet) -> RepositoryResult<()>;

    /// Mark a consented adoption as in progress.
    fn start_adoption(&mut self, id: &PetId) -> RepositoryResult<()> {
        let pet = self
            .get(id)
            .ok_or_else(|| RepositoryError::NotFound { id: id.clone() })?;
        let Some(next) = pet.with_adoption_started() else {
            return Err(RepositoryError::AdoptionNotReady {
                id: id.clone(),
                stage: pet.adoption_stage(),
            });
        };
        self.replace(id, next)?;
        debug!(pet = %id, "adoption started");
        Ok(())
    }

    /// Number of records with `flag` set.
    fn count_flagged(&self, flag: PetFlag) -> usize {
        self.list().iter().filter(|pet| pet.flag(flag)).count()
    }

    /// Records currently in the given adoption stage.
    fn in_stage(&self, stage: AdoptionStage) -> Vec<&Pet> {
        self.list()
            .iter()
            .filter(|pet| pet.adoption_stage() == stage)
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPetRepository {
    pets: Vec<Pet>,
}

impl InMemoryPetRepository {
    /// Build a repository, rejecting duplicate identifiers.
    pub fn new(pets: Vec<Pet>) -> RepositoryResult<Self> {
        let mut seen = HashSet::with_capacity(pets.len());
        for pet in &pets {
            if !seen.insert(&pet.id) {
                return Err(RepositoryError::DuplicateId { id: pet.id.clone() });
            }
        }
        Ok(Self { pets })
    }

    /// Repository holding the bundled marketplace records.
    pub fn seeded() -> RepositoryResult<Self> {
        Self::new(mock_data::pets())
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    fn position(&self, id: &PetId) -> Option<usize> {
        self.pets.iter().position(|pet| &pet.id == id)
    }
}

impl PetRepository for InMemoryPetRepository {
    fn list(&self) -> &[Pet] {
        &self.pets
    }

    fn get(&self, id: &PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| &pet.id == id)
    }

    fn toggle_flag(&mut self, id: &PetId, flag: PetFlag) -> Option<bool> {
        let idx = self.position(id)?;
        let pet = &mut self.pets[idx];
        let value = !pet.flag(flag);
        pet.set_flag(flag, value);
        debug!(pet = %id, flag = flag.as_str(), value, "toggled pet flag");
        Some(value)
    }

    fn replace(&mut self, id: &PetId, record: Pet) -> RepositoryResult<()> {
        if &record.id != id {
            return Err(RepositoryError::IdMismatch {
                expected: id.clone(),
                found: record.id,
            });
        }
        let idx = self
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound { id: id.clone() })?;
        self.pets[idx] = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_model::InterestStatus;

    #[test]
    fn test_seeded_ids_unique() {
        let repo = InMemoryPetRepository::seeded().unwrap();
        assert_eq!(repo.len(), 15);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut pets = mock_data::pets();
        pets.push(pets[0].clone());
        let err = InMemoryPetRepository::new(pets).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::DuplicateId {
                id: PetId::new("h1")
            }
        );
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut repo = InMemoryPetRepository::seeded().unwrap();
        let before = repo.list().to_vec();
        assert_eq!(repo.toggle_flag(&PetId::new("zzz"), PetFlag::Favourite), None);
        assert_eq!(repo.list(), before.as_slice());
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut repo = InMemoryPetRepository::seeded().unwrap();
        let id = PetId::new("h3");
        assert_eq!(repo.toggle_flag(&id, PetFlag::Interested), Some(true));
        let changed: Vec<&PetId> = repo
            .list()
            .iter()
            .filter(|p| p.interested && p.interest.is_none())
            .map(|p| &p.id)
            .collect();
        assert_eq!(changed, vec![&id]);
        assert!(!repo.get(&id).unwrap().favourite);
    }

    #[test]
    fn test_replace_checks_ids() {
        let mut repo = InMemoryPetRepository::seeded().unwrap();
        let mut record = repo.get(&PetId::new("h1")).unwrap().clone();
        record.id = PetId::new("h2");
        assert!(matches!(
            repo.replace(&PetId::new("h1"), record.clone()),
            Err(RepositoryError::IdMismatch { .. })
        ));
        record.id = PetId::new("missing");
        assert!(matches!(
            repo.replace(&PetId::new("missing"), record),
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_start_adoption_requires_consent() {
        let mut repo = InMemoryPetRepository::seeded().unwrap();
        let granted = PetId::new("2");
        repo.start_adoption(&granted).unwrap();
        assert_eq!(
            repo.get(&granted).unwrap().adoption_stage(),
            AdoptionStage::InProgress
        );

        let awaiting = PetId::new("1");
        assert_eq!(
            repo.get(&awaiting).unwrap().interest,
            Some(InterestStatus::awaiting())
        );
        assert!(matches!(
            repo.start_adoption(&awaiting),
            Err(RepositoryError::AdoptionNotReady { .. })
        ));
    }
}
