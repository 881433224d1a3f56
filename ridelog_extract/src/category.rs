//! Ride vs general classification.
//!
//! Rules run top to bottom and the first one that decides wins. When a rule
//! says `ride` without binding a directional pair, origin and destination are
//! taken positionally from the found-places set. That fallback is best-effort:
//! the order reflects the gazetteer listing, not the direction of travel.

use ridelog_core::{Category, Place};

use crate::gazetteer::Gazetteer;
use crate::normalize::{has_word, normalize};
use crate::pair::{DirectionalPair, extract_pair};
use crate::places::{FoundPlaces, find_places};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub origin: Option<Place>,
    pub destination: Option<Place>,
}

impl Classification {
    const fn general() -> Self {
        Self {
            category: Category::General,
            origin: None,
            destination: None,
        }
    }
}

/// What the rules look at.
#[derive(Debug)]
pub struct Evidence {
    pub pair: Option<DirectionalPair>,
    pub found: FoundPlaces,
    pub has_to: bool,
    pub has_from: bool,
}

impl Evidence {
    #[must_use]
    pub fn gather(text: &str, gazetteer: &Gazetteer) -> Self {
        let normalized = normalize(text);
        Self {
            pair: extract_pair(text, gazetteer),
            found: find_places(&normalized, gazetteer),
            has_to: has_word(&normalized, "to"),
            has_from: has_word(&normalized, "from"),
        }
    }
}

/// Outcome of a rule that fired.
#[derive(Debug, PartialEq, Eq)]
enum Decision {
    Pair(Place, Place),
    Positional(FoundPlaces),
    General,
}

type Rule = fn(&Evidence) -> Option<Decision>;

const RULES: &[(&str, Rule)] = &[
    ("directional_pair", directional_pair),
    ("to_and_from", to_and_from),
    ("destination_only", destination_only),
];

fn directional_pair(evidence: &Evidence) -> Option<Decision> {
    evidence
        .pair
        .as_ref()
        .map(|p| Decision::Pair(p.origin.clone(), p.destination.clone()))
}

fn to_and_from(evidence: &Evidence) -> Option<Decision> {
    (evidence.has_to && evidence.has_from && evidence.found.len() >= 2)
        .then(|| Decision::Positional(evidence.found.clone()))
}

fn destination_only(evidence: &Evidence) -> Option<Decision> {
    if !evidence.has_to || evidence.has_from || evidence.found.is_empty() {
        return None;
    }
    let mut found = evidence.found.clone();
    found.insert(Place::HomeBase);
    if found.len() >= 2 {
        Some(Decision::Positional(found))
    } else {
        Some(Decision::General)
    }
}

/// Apply the rule table to gathered evidence.
#[must_use]
pub fn decide(evidence: &Evidence) -> Classification {
    let decision = RULES
        .iter()
        .find_map(|(name, rule)| {
            rule(evidence).inspect(|d| tracing::trace!(rule = name, ?d, "category rule fired"))
        })
        .unwrap_or(Decision::General);

    match decision {
        Decision::Pair(origin, destination) => Classification {
            category: Category::Ride,
            origin: Some(origin),
            destination: Some(destination),
        },
        Decision::Positional(found) => {
            let (origin, destination) = found.first_two();
            Classification {
                category: Category::Ride,
                origin,
                destination,
            }
        }
        Decision::General => Classification::general(),
    }
}

/// Classify a message and bind origin/destination where possible.
#[must_use]
pub fn classify(text: &str, gazetteer: &Gazetteer) -> Classification {
    decide(&Evidence::gather(text, gazetteer))
}
