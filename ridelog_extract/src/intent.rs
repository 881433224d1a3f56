//! Offering vs seeking classification by phrase priority.

use ridelog_core::RideType;

pub const DEFAULT_OFFERING: &[&str] = &[
    "offering",
    "available",
    "can give",
    "have space",
    "driving to",
    "driving from",
    "ride from",
];

pub const DEFAULT_SEEKING: &[&str] = &[
    "anyone going",
    "looking for",
    "need a ride",
    "anyone driving",
    "want to join",
    "ride to",
];

fn fold_phrases<I>(phrases: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    phrases
        .into_iter()
        .map(|p| p.as_ref().trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Ordered phrase tables. Offering phrases are always checked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentClassifier {
    offering: Vec<String>,
    seeking: Vec<String>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_OFFERING, DEFAULT_SEEKING)
    }
}

impl IntentClassifier {
    pub fn new<O, S>(offering: O, seeking: S) -> Self
    where
        O: IntoIterator,
        O::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            offering: fold_phrases(offering),
            seeking: fold_phrases(seeking),
        }
    }

    #[must_use]
    pub fn offering(&self) -> &[String] {
        &self.offering
    }

    #[must_use]
    pub fn seeking(&self) -> &[String] {
        &self.seeking
    }

    /// Case-insensitive substring match against the phrase tables.
    #[must_use]
    pub fn classify(&self, text: &str) -> RideType {
        let lowered = text.to_lowercase();
        if self.offering.iter().any(|p| lowered.contains(p.as_str())) {
            RideType::Offering
        } else if self.seeking.iter().any(|p| lowered.contains(p.as_str())) {
            RideType::Seeking
        } else {
            RideType::Unknown
        }
    }
}
