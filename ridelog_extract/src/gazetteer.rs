//! Synonym table mapping alternate place spellings to one canonical name.
//!
//! Source format is one place per line, `=`-separated, canonical name first:
//!
//! ```text
//! state college = sc = happy valley
//! pittsburgh = pgh
//! wilkes-barre = wb
//! ```
//!
//! Spellings are stored in the same normalized form as message text, so
//! punctuation inside a name is dropped (`wilkes-barre` is matched as
//! `wilkesbarre`). The canonical name is reported as written.

use regex::Regex;
use ridelog_core::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::normalize::{normalize, tokens};

/// Places list shipped with the crate.
pub const BUNDLED_PLACES: &str = include_str!("../assets/places.txt");

/// Lowercase with runs of whitespace collapsed.
fn fold(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A spelling in the form it takes inside normalized message text.
fn spelling_key(text: &str) -> String {
    tokens(&normalize(text)).join(" ")
}

/// A single spelling and the canonical name it resolves to.
#[derive(Debug, Clone)]
pub struct Synonym {
    text: String,
    canonical: String,
    word: Regex,
}

impl Synonym {
    fn new(text: String, canonical: String) -> Result<Self> {
        let word = Regex::new(&format!(r"\b{}\b", regex::escape(&text)))?;
        Ok(Self {
            text,
            canonical,
            word,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Whole-word occurrence of this spelling inside `haystack`.
    #[must_use]
    pub fn occurs_in(&self, haystack: &str) -> bool {
        self.word.is_match(haystack)
    }
}

/// Read-only after construction; share it by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    synonyms: Vec<Synonym>,
    index: HashMap<String, usize>,
}

impl Gazetteer {
    /// Parse a places list. Blank, comment and canonical-less lines are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut gazetteer = Self::default();

        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split('=').map(fold);
            let Some(canonical) = parts
                .next()
                .filter(|c| !spelling_key(c).is_empty())
            else {
                debug!("Skipping places line {}: no canonical name", line_no + 1);
                continue;
            };

            gazetteer.register(spelling_key(&canonical), canonical.clone())?;
            for synonym in parts.map(|p| spelling_key(&p)).filter(|k| !k.is_empty()) {
                gazetteer.register(synonym, canonical.clone())?;
            }
        }

        if gazetteer.is_empty() {
            warn!("Gazetteer has no places; every message will be classified as general");
        }
        Ok(gazetteer)
    }

    /// Load a places file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Gazetteer {
            path: path.to_path_buf(),
            source,
        })?;
        let gazetteer = Self::parse(&source)?;
        debug!(
            "Loaded {} synonyms for {} places from {}",
            gazetteer.len(),
            gazetteer.place_count(),
            path.display()
        );
        Ok(gazetteer)
    }

    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_PLACES)
    }

    // A repeated spelling keeps its first position but takes the latest canonical.
    fn register(&mut self, synonym: String, canonical: String) -> Result<()> {
        if let Some(&slot) = self.index.get(&synonym) {
            if self.synonyms[slot].canonical != canonical {
                debug!(
                    "Synonym '{}' remapped from '{}' to '{}'",
                    synonym, self.synonyms[slot].canonical, canonical
                );
                self.synonyms[slot].canonical = canonical;
            }
            return Ok(());
        }

        self.index.insert(synonym.clone(), self.synonyms.len());
        self.synonyms.push(Synonym::new(synonym, canonical)?);
        Ok(())
    }

    /// Canonical name for a spelling, ignoring case, whitespace and punctuation.
    #[must_use]
    pub fn canonical(&self, synonym: &str) -> Option<&str> {
        let key = spelling_key(synonym);
        self.index
            .get(&key)
            .map(|&slot| self.synonyms[slot].canonical.as_str())
    }

    /// Spellings in the order they were first listed.
    pub fn synonyms(&self) -> impl Iterator<Item = &Synonym> {
        self.synonyms.iter()
    }

    /// Number of registered spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Number of distinct canonical places.
    #[must_use]
    pub fn place_count(&self) -> usize {
        let mut seen: Vec<&str> = self.synonyms.iter().map(Synonym::canonical).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}
