pub mod adoption;
pub mod auth;
pub mod choice;
pub mod error;
pub mod form;
pub mod listing;
pub mod notification;
pub mod pet;
pub mod route;

pub use adoption::{CompletionField, CompletionForm, CompletionRecord, PetCondition};
pub use auth::{
    ForgotPasswordField, ForgotPasswordForm, IdentityField, IdentityForm, RegisterField,
    RegisterForm, ResetPasswordField, ResetPasswordForm, Session, SignInField, SignInForm,
};
pub use choice::Choice;
pub use error::{ModelError, Result};
pub use form::{ErrorKind, FieldError, FieldErrors, FormField};
pub use listing::{
    AdoptionType, AgeGroup, Gender, IMAGE_SLOT_COUNT, ImageAttachment, ImageSlots, ListingDraft,
    ListingField, ListingReceipt, Region, VaccinationStatus,
};
pub use notification::{MessageSpan, Notification, NotificationId, NotificationKind};
pub use pet::{
    AdoptionStage, ConsentState, ImageRef, InterestStatus, Pet, PetCategory, PetFlag, PetId,
};
pub use route::Route;
