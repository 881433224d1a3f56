//! Gazetteer lookups over free text.

use ridelog_core::Place;

use crate::gazetteer::Gazetteer;
use crate::normalize::normalize;

/// Distinct places in the order they were first found.
///
/// Insertion order is what the category stage falls back on when a message
/// names places without a directional cue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundPlaces(Vec<Place>);

impl FoundPlaces {
    /// Add a place unless already present. Returns whether it was new.
    pub fn insert(&mut self, place: Place) -> bool {
        if self.0.contains(&place) {
            return false;
        }
        self.0.push(place);
        true
    }

    #[must_use]
    pub fn contains(&self, place: &Place) -> bool {
        self.0.contains(place)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.0.iter()
    }

    /// First two members, positionally.
    #[must_use]
    pub fn first_two(&self) -> (Option<Place>, Option<Place>) {
        (self.0.first().cloned(), self.0.get(1).cloned())
    }
}

/// Every canonical place mentioned anywhere in `text`.
#[must_use]
pub fn find_places(text: &str, gazetteer: &Gazetteer) -> FoundPlaces {
    let text = normalize(text);
    let mut found = FoundPlaces::default();
    for synonym in gazetteer.synonyms() {
        if synonym.occurs_in(&text) {
            found.insert(Place::canonical(synonym.canonical()));
        }
    }
    found
}

/// Canonical place of the first listed spelling occurring in `candidate`.
#[must_use]
pub fn match_place(candidate: &str, gazetteer: &Gazetteer) -> Option<Place> {
    gazetteer
        .synonyms()
        .find(|s| s.occurs_in(candidate))
        .map(|s| Place::canonical(s.canonical()))
}
