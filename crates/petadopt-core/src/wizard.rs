//! Two-step "create listing" wizard.
//!
//! ```text
//! Details --next (10 fields present)--> Images --submit (>= N images)--> Submitting --> Submitted
//!    ^------------------back----------------|                               |
//!                                           ^-----------backend error-------'
//! ```
//!
//! Closing from any step discards the draft.

use std::sync::Arc;

use tracing::{debug, info, warn};

use petadopt_model::{FieldErrors, ImageAttachment, ListingDraft, ListingField, ListingReceipt};
use petadopt_validate::{ValidationRules, validate_details, validate_images};

use crate::backend::{MarketplaceBackend, Pending, dispatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Images,
    Submitting,
    Submitted,
}

impl WizardStep {
    /// 1-based step number shown in the header, if the step has one.
    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Details => Some(1),
            Self::Images | Self::Submitting => Some(2),
            Self::Submitted => None,
        }
    }
}

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to list pet. Please try again.";

#[derive(Debug)]
pub struct ListingWizard {
    step: WizardStep,
    draft: ListingDraft,
    errors: FieldErrors<ListingField>,
    submit_error: Option<String>,
    pending: Option<Pending<ListingReceipt>>,
    receipt: Option<ListingReceipt>,
}

impl Default for ListingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Details,
            draft: ListingDraft::new(),
            errors: FieldErrors::new(),
            submit_error: None,
            pending: None,
            receipt: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors<ListingField> {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn receipt(&self) -> Option<&ListingReceipt> {
        self.receipt.as_ref()
    }

    /// Mutate the draft on behalf of `field`, clearing that field's error and
    /// any submit failure. The draft is frozen once a submit is in flight.
    pub fn edit(&mut self, field: ListingField, f: impl FnOnce(&mut ListingDraft)) -> bool {
        if !matches!(self.step, WizardStep::Details | WizardStep::Images) {
            debug!(step = ?self.step, field = ?field, "ignored listing edit");
            return false;
        }
        self.errors.clear(field);
        self.submit_error = None;
        f(&mut self.draft);
        true
    }

    /// Fill or empty one image slot. Any slot change clears the images error.
    pub fn set_image(
        &mut self,
        index: usize,
        image: Option<ImageAttachment>,
    ) -> petadopt_model::Result<()> {
        self.draft.images.set(index, image)?;
        self.errors.clear(ListingField::Images);
        self.submit_error = None;
        Ok(())
    }

    /// Advance from Details to Images if every detail field is filled.
    pub fn next(&mut self) -> bool {
        if self.step != WizardStep::Details {
            return false;
        }
        self.errors = validate_details(&self.draft);
        if self.errors.is_empty() {
            self.step = WizardStep::Images;
            true
        } else {
            info!(missing = self.errors.len(), "listing details incomplete");
            false
        }
    }

    /// Return to Details, keeping the draft.
    pub fn back(&mut self) {
        if self.step == WizardStep::Images {
            self.step = WizardStep::Details;
        }
    }

    /// Hand the draft to `backend` if enough images are attached.
    pub fn submit(
        &mut self,
        rules: &ValidationRules,
        backend: &Arc<dyn MarketplaceBackend>,
    ) -> bool {
        if self.step != WizardStep::Images {
            return false;
        }
        self.errors = validate_images(&self.draft, rules);
        if !self.errors.is_empty() {
            info!(
                images = self.draft.images.filled_count(),
                required = rules.min_listing_images,
                "listing images insufficient"
            );
            return false;
        }
        self.submit_error = None;
        let draft = self.draft.clone();
        self.pending = Some(dispatch(backend, "submit_listing", move |b| {
            b.submit_listing(&draft)
        }));
        self.step = WizardStep::Submitting;
        true
    }

    /// Collect the backend result once it arrives. Returns the receipt on
    /// the frame the listing is accepted.
    pub fn poll(&mut self) -> Option<ListingReceipt> {
        let result = self.pending.as_mut()?.poll()?;
        self.pending = None;
        self.settle(result)
    }

    /// Block until the pending submission settles.
    pub fn wait(&mut self) -> Option<ListingReceipt> {
        let pending = self.pending.take()?;
        self.settle(pending.wait())
    }

    fn settle(
        &mut self,
        result: crate::error::BackendResult<ListingReceipt>,
    ) -> Option<ListingReceipt> {
        match result {
            Ok(receipt) => {
                info!(reference = %receipt.reference, title = %receipt.title, "pet listed");
                self.step = WizardStep::Submitted;
                self.receipt = Some(receipt.clone());
                Some(receipt)
            }
            Err(error) => {
                warn!(%error, "listing submission failed");
                self.step = WizardStep::Images;
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.step == WizardStep::Submitting
    }

    /// Discard everything and start over at Details.
    pub fn close(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use petadopt_model::{
        AdoptionType, AgeGroup, Gender, PetCategory, Region, VaccinationStatus,
    };
    use std::path::PathBuf;
    use std::time::Duration;

    fn fill_details(wizard: &mut ListingWizard) {
        wizard.edit(ListingField::AdoptionType, |d| {
            d.adoption_type = Some(AdoptionType::Temporary);
        });
        wizard.edit(ListingField::Description, |d| d.description = "Calm".into());
        wizard.edit(ListingField::Title, |d| d.title = "Bingo".into());
        wizard.edit(ListingField::PetType, |d| d.pet_type = Some(PetCategory::Dog));
        wizard.edit(ListingField::Breed, |d| d.breed = "Poodle".into());
        wizard.edit(ListingField::Age, |d| d.age = Some(AgeGroup::Adult));
        wizard.edit(ListingField::Gender, |d| d.gender = Some(Gender::Female));
        wizard.edit(ListingField::Vaccination, |d| {
            d.vaccination = Some(VaccinationStatus::Partial);
        });
        wizard.edit(ListingField::State, |d| d.state = Some(Region::Abuja));
        wizard.edit(ListingField::City, |d| d.city = "Garki".into());
    }

    fn attach(wizard: &mut ListingWizard, count: usize) {
        for idx in 0..count {
            let path = PathBuf::from(format!("angle-{idx}.jpg"));
            wizard
                .set_image(idx, Some(ImageAttachment::from_path(path)))
                .unwrap();
        }
    }

    fn backend() -> Arc<dyn MarketplaceBackend> {
        Arc::new(MockBackend::new().with_latency(Duration::ZERO))
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut wizard = ListingWizard::new();
        assert!(!wizard.next());
        assert_eq!(wizard.errors().len(), 10);
        wizard.edit(ListingField::Title, |d| d.title = "x".into());
        assert_eq!(wizard.errors().len(), 9);
        assert!(!wizard.errors().contains(ListingField::Title));
    }

    #[test]
    fn test_back_preserves_draft() {
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        assert!(wizard.next());
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.draft().city, "Garki");
    }

    #[test]
    fn test_submit_blocked_without_images() {
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        wizard.next();
        attach(&mut wizard, 2);
        assert!(!wizard.submit(&ValidationRules::default(), &backend()));
        assert_eq!(wizard.step(), WizardStep::Images);
        assert!(wizard.errors().contains(ListingField::Images));

        wizard.set_image(2, None).unwrap();
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_submit_reaches_submitted() {
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        wizard.next();
        attach(&mut wizard, 3);
        assert!(wizard.submit(&ValidationRules::default(), &backend()));
        assert!(wizard.is_submitting());
        let receipt = wizard.wait().unwrap();
        assert_eq!(receipt.image_count, 3);
        assert_eq!(wizard.step(), WizardStep::Submitted);
    }

    #[test]
    fn test_backend_failure_returns_to_images() {
        let failing: Arc<dyn MarketplaceBackend> = Arc::new(
            MockBackend::new()
                .with_latency(Duration::ZERO)
                .rejecting("offline"),
        );
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        wizard.next();
        attach(&mut wizard, 5);
        wizard.submit(&ValidationRules::default(), &failing);
        assert!(wizard.wait().is_none());
        assert_eq!(wizard.step(), WizardStep::Images);
        assert_eq!(wizard.submit_error(), Some(SUBMIT_FAILED_MESSAGE));
    }

    #[test]
    fn test_edit_after_failure_clears_submit_error() {
        let failing: Arc<dyn MarketplaceBackend> = Arc::new(
            MockBackend::new()
                .with_latency(Duration::ZERO)
                .rejecting("offline"),
        );
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        wizard.next();
        attach(&mut wizard, 3);
        wizard.submit(&ValidationRules::default(), &failing);
        assert!(wizard.wait().is_none());
        assert!(wizard.submit_error().is_some());

        assert!(wizard.edit(ListingField::Title, |d| d.title = "Bingo II".into()));
        assert!(wizard.submit_error().is_none());
    }

    #[test]
    fn test_edit_ignored_once_submitted() {
        let slow: Arc<dyn MarketplaceBackend> =
            Arc::new(MockBackend::new().with_latency(Duration::from_millis(200)));
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        wizard.next();
        attach(&mut wizard, 3);
        assert!(wizard.submit(&ValidationRules::default(), &slow));
        assert!(wizard.is_submitting());
        assert!(!wizard.edit(ListingField::Title, |d| d.title = "changed".into()));
        assert_eq!(wizard.draft().title, "Bingo");

        assert!(wizard.wait().is_some());
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert!(!wizard.edit(ListingField::City, |d| d.city = "changed".into()));
        assert_eq!(wizard.draft().city, "Garki");
    }

    #[test]
    fn test_close_resets() {
        let mut wizard = ListingWizard::new();
        fill_details(&mut wizard);
        wizard.next();
        wizard.close();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.draft(), &ListingDraft::default());
        assert!(wizard.errors().is_empty());
    }
}
