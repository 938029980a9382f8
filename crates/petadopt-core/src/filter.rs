//! Category/location filtering for the home, favourites and interest pages.

use petadopt_model::{Choice, Pet, PetCategory, PetFlag};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PetCategory),
}

impl CategoryFilter {
    /// Options offered by the category dropdown.
    pub const OPTIONS: [CategoryFilter; 4] = [
        Self::All,
        Self::Only(PetCategory::Dog),
        Self::Only(PetCategory::Cat),
        Self::Only(PetCategory::Bird),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Category: All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: PetCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

/// The two filters shown above every pet grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub category: CategoryFilter,
    /// Case-insensitive substring of the location; empty disables it.
    pub location: String,
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        self.category.matches(pet.category) && self.matches_location(&pet.location)
    }

    fn matches_location(&self, location: &str) -> bool {
        self.location.is_empty()
            || location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.location.is_empty()
    }

    /// Restore both filters to their defaults. Pet flags are untouched.
    pub fn reset(&mut self) {
        tracing::debug!("filters reset");
        *self = Self::default();
    }
}

/// Which subset of the pet list a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetView {
    Feed,
    Favourites,
    Interests,
}

impl PetView {
    /// Flag a record must carry to appear on this page.
    pub fn required_flag(&self) -> Option<PetFlag> {
        match self {
            Self::Feed => None,
            Self::Favourites => Some(PetFlag::Favourite),
            Self::Interests => Some(PetFlag::Interested),
        }
    }

    fn includes(&self, pet: &Pet) -> bool {
        self.required_flag().is_none_or(|flag| pet.flag(flag))
    }
}

/// Records visible on `view` under `filter`, in list order.
pub fn visible<'a>(pets: &'a [Pet], view: PetView, filter: &PetFilter) -> Vec<&'a Pet> {
    pets.iter()
        .filter(|pet| view.includes(pet) && filter.matches(pet))
        .collect()
}

/// Why a page has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No record carries the page's flag at all.
    NothingFlagged,
    /// Records exist but the filters hide all of them.
    NoMatches,
}

impl EmptyState {
    pub fn classify(pets: &[Pet], view: PetView, filter: &PetFilter) -> Option<Self> {
        if !visible(pets, view, filter).is_empty() {
            return None;
        }
        if pets.iter().any(|pet| view.includes(pet)) {
            Some(Self::NoMatches)
        } else {
            Some(Self::NothingFlagged)
        }
    }

    pub fn headline(&self, view: PetView) -> &'static str {
        match view {
            PetView::Feed => "No pets found",
            PetView::Favourites | PetView::Interests => "No favourites found",
        }
    }

    pub fn message(&self, view: PetView) -> &'static str {
        match (self, view) {
            (_, PetView::Feed) => {
                "No pets match your current filter criteria. Try adjusting the filters."
            }
            (Self::NoMatches, _) => {
                "No pets match your current filter criteria. Try resetting the filters."
            }
            (Self::NothingFlagged, _) => "You haven't added any pets to your favourites list yet!",
        }
    }

    /// Whether a "clear filters" action would change the result.
    pub fn offers_reset(&self) -> bool {
        matches!(self, Self::NoMatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_location_filter_case_insensitive() {
        let pets = mock_data::pets();
        let feed: Vec<Pet> = pets
            .into_iter()
            .filter(|p| p.id.as_str() == "h1" || p.id.as_str() == "h8")
            .collect();
        for needle in ["lagos", "LAGOS", "LaGoS"] {
            let filter = PetFilter {
                location: needle.to_string(),
                ..PetFilter::default()
            };
            let shown: Vec<&str> = visible(&feed, PetView::Feed, &filter)
                .iter()
                .map(|p| p.location.as_str())
                .collect();
            assert_eq!(shown, vec!["Mainland, Lagos Nigeria"]);
        }
    }

    #[test]
    fn test_category_filter() {
        let pets = mock_data::pets();
        let filter = PetFilter {
            category: CategoryFilter::Only(PetCategory::Bird),
            ..PetFilter::default()
        };
        let shown = visible(&pets, PetView::Feed, &filter);
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|p| p.category == PetCategory::Bird));
    }

    #[test]
    fn test_flag_pages_require_flag() {
        let mut pets = mock_data::pets();
        assert_eq!(visible(&pets, PetView::Favourites, &PetFilter::default()).len(), 3);
        pets[0].favourite = true;
        assert_eq!(visible(&pets, PetView::Favourites, &PetFilter::default()).len(), 4);
        assert_eq!(visible(&pets, PetView::Interests, &PetFilter::default()).len(), 3);
    }

    #[test]
    fn test_empty_state_classification() {
        let mut pets = mock_data::pets();
        let filter = PetFilter {
            location: "Kano".to_string(),
            ..PetFilter::default()
        };
        assert_eq!(
            EmptyState::classify(&pets, PetView::Favourites, &filter),
            Some(EmptyState::NoMatches)
        );

        for pet in &mut pets {
            pet.favourite = false;
        }
        let state = EmptyState::classify(&pets, PetView::Favourites, &PetFilter::default());
        assert_eq!(state, Some(EmptyState::NothingFlagged));
        assert_eq!(
            state.map(|s| s.message(PetView::Favourites)),
            Some("You haven't added any pets to your favourites list yet!")
        );
        assert_eq!(
            EmptyState::classify(&pets, PetView::Feed, &PetFilter::default()),
            None
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filter = PetFilter {
            category: CategoryFilter::Only(PetCategory::Cat),
            location: "ikeja".to_string(),
        };
        assert!(filter.is_active());
        filter.reset();
        assert_eq!(filter, PetFilter::default());
        assert!(!filter.is_active());
    }
}
