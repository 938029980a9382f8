//! Bundled records standing in for a marketplace backend.

use chrono::{DateTime, Duration, Utc};
use petadopt_model::{
    ImageRef, InterestStatus, MessageSpan, Notification, NotificationId, NotificationKind, Pet,
    PetCategory, PetId,
};

const MAINLAND: &str = "Mainland, Lagos Nigeria";
const IKEJA: &str = "Ikeja, Lagos Nigeria";
const ABUJA: &str = "Abuja, Nigeria";

fn feed_pet(
    id: &str,
    breed: &str,
    category: PetCategory,
    age: &str,
    location: &str,
    image: &str,
) -> Pet {
    Pet {
        id: PetId::new(id),
        name: "Pet For Adoption".to_string(),
        breed: breed.to_string(),
        category,
        age: age.to_string(),
        location: location.to_string(),
        image: ImageRef::new(image),
        favourite: false,
        interested: false,
        interest: None,
    }
}

fn tracked_pet(
    id: &str,
    breed: &str,
    category: PetCategory,
    image: &str,
    interest: InterestStatus,
) -> Pet {
    Pet {
        favourite: true,
        interested: true,
        interest: Some(interest),
        ..feed_pet(id, breed, category, "4yrs old", MAINLAND, image)
    }
}

/// The twelve home-feed pets followed by the three tracked interests.
pub fn pets() -> Vec<Pet> {
    use PetCategory::{Bird, Cat, Dog};

    vec![
        feed_pet("h1", "Dog, German Shepard", Dog, "4yrs old", MAINLAND, "dog"),
        feed_pet("h2", "Cat, Tabby", Cat, "4yrs old", MAINLAND, "cat_1"),
        feed_pet("h3", "Parrot", Bird, "4yrs old", MAINLAND, "parrot"),
        feed_pet("h4", "Cat, Persian", Cat, "4yrs old", MAINLAND, "cat"),
        feed_pet("h5", "Dog, Golden Retriever", Dog, "4yrs old", IKEJA, "dog_1"),
        feed_pet("h6", "Cat, Siamense", Cat, "4yrs old", IKEJA, "cat_2"),
        feed_pet("h7", "Parrot, macaw", Bird, "1yr old", MAINLAND, "parrot_1"),
        feed_pet("h8", "Parrot", Bird, "4yrs old", ABUJA, "parrot"),
        feed_pet("h9", "Dog, German Shepard", Dog, "4yrs old", ABUJA, "dog_1"),
        feed_pet("h10", "Cat, Persian", Cat, "4yrs old", MAINLAND, "cat_1"),
        feed_pet("h11", "Cat, Tabby", Cat, "3yrs old", IKEJA, "cat_2"),
        feed_pet("h12", "Dog, Puppy", Dog, "6mos old", MAINLAND, "dog"),
        tracked_pet(
            "1",
            "Dog, German Shepard",
            Dog,
            "dog",
            InterestStatus::awaiting(),
        ),
        tracked_pet("2", "Parrot", Bird, "parrot", InterestStatus::granted()),
        tracked_pet(
            "3",
            "Cat, Persian",
            Cat,
            "cat",
            InterestStatus {
                adoption_in_progress: true,
                ..InterestStatus::granted()
            },
        ),
    ]
}

/// Contact card shown in the pet owner dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetOwner {
    pub full_name: String,
    /// Email and phone stay masked until an adoption is approved.
    pub contact_masked: bool,
    pub location: String,
}

pub fn pet_owner() -> PetOwner {
    PetOwner {
        full_name: "Angela Christoper".to_string(),
        contact_masked: true,
        location: "Lagos, Nigeria".to_string(),
    }
}

/// The five seeded notifications, each received two minutes before `now`.
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let received_at = now - Duration::minutes(2);
    let entry = |id, kind, title: &str, body: Vec<MessageSpan>, actionable| Notification {
        id: NotificationId(id),
        kind,
        title: title.to_string(),
        body,
        received_at,
        actionable,
    };

    vec![
        entry(
            1,
            NotificationKind::Success,
            "Verification Status",
            vec![MessageSpan::plain(
                "Your NIN verification is confirmed & successful. You can proceed with to list or show interest to adopt a pet",
            )],
            false,
        ),
        entry(
            2,
            NotificationKind::Adoption,
            "New Adoption Interest",
            vec![MessageSpan::plain(
                "A user has indicated interest on your listed open adoption",
            )],
            true,
        ),
        entry(
            3,
            NotificationKind::Success,
            "Payment Successful",
            vec![
                MessageSpan::plain(
                    "Your payment for the system management service has been confirmed. ",
                ),
                MessageSpan::strong("Amount: 5000 Naira, Ref ID: 1092751375"),
                MessageSpan::plain(". You can now contact the Pet Owner for receive the pet"),
            ],
            false,
        ),
        entry(
            4,
            NotificationKind::Success,
            "Adoption Request Approved",
            vec![MessageSpan::plain(
                "The pet owner has approved your request to adopt their pet. You can proceed to the next step",
            )],
            true,
        ),
        entry(
            5,
            NotificationKind::Reminder,
            "Reminder",
            vec![
                MessageSpan::plain("This is a reminder to confirm completion of adoption with "),
                MessageSpan::strong("ID: 10927"),
            ],
            true,
        ),
    ]
}
