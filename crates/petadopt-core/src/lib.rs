//! Controllers behind the marketplace screens.
//!
//! Everything here is UI-toolkit agnostic: the GUI crate owns one instance
//! of each controller, forwards user events to it and renders its state.

pub mod adoption;
pub mod backend;
pub mod error;
pub mod filter;
pub mod form_state;
pub mod identity;
pub mod mock_data;
pub mod notifications;
pub mod repository;
pub mod wizard;

pub use adoption::{AdoptionPhase, AdoptionProgress};
pub use backend::{MarketplaceBackend, MockBackend, Pending, dispatch};
pub use error::{BackendError, RepositoryError};
pub use filter::{CategoryFilter, EmptyState, PetFilter, PetView, visible};
pub use form_state::{FormState, SubmitStatus};
pub use identity::{IdentityPhase, IdentityVerification};
pub use notifications::NotificationFeed;
pub use repository::{InMemoryPetRepository, PetRepository};
pub use wizard::{ListingWizard, WizardStep};
