//! Directional (origin, destination) extraction from token cues.
//!
//! Each token position is tried against an ordered table of cue shapes. The
//! first shape that fits a position supplies origin and destination windows
//! of one to three tokens; the first window pair resolving to two distinct
//! places wins. A bare `to` is tried last at the same position and pairs the
//! destination with the implicit home base.

use ridelog_core::Place;
use tracing::debug;

use crate::gazetteer::Gazetteer;
use crate::normalize::{normalize, tokens};
use crate::places::match_place;

/// Longest multi-word place name considered, in tokens.
pub const MAX_WINDOW: usize = 3;

/// Tokens that join two place mentions, as in `sc to pgh`.
pub const CONNECTORS: &[&str] = &["to", "-", "→"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// `from X to Y`
    FromTo,
    /// `from X` with no `to` right after the origin
    FromOnly,
    /// `X to Y`, `X - Y`
    Connector,
    /// `to Y` with the origin implied
    BareTo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalPair {
    pub origin: Place,
    pub destination: Place,
    pub cue: Cue,
}

/// Candidate spans produced by a cue at one position.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Windows {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
}

type CueRule = fn(&[&str], usize) -> Option<Windows>;

/// Paired cues in priority order; at most one applies per position.
const PAIRED_CUES: &[(Cue, CueRule)] = &[
    (Cue::FromTo, from_to),
    (Cue::FromOnly, from_only),
    (Cue::Connector, connector),
];

/// Spans of 1..=MAX_WINDOW tokens starting at `start`, shortest first.
fn forward(tokens: &[&str], start: usize) -> Vec<String> {
    (1..=MAX_WINDOW)
        .filter(|k| start + k <= tokens.len())
        .map(|k| tokens[start..start + k].join(" "))
        .collect()
}

/// Spans of 1..=MAX_WINDOW tokens ending at `end` (inclusive), shortest first.
fn backward(tokens: &[&str], end: usize) -> Vec<String> {
    (1..=MAX_WINDOW)
        .filter(|&k| k <= end + 1)
        .map(|k| tokens[end + 1 - k..=end].join(" "))
        .collect()
}

fn from_to(tokens: &[&str], i: usize) -> Option<Windows> {
    if tokens[i] != "from" || tokens.get(i + 2) != Some(&"to") {
        return None;
    }
    Some(Windows {
        origins: forward(tokens, i + 1),
        destinations: forward(tokens, i + 3),
    })
}

fn from_only(tokens: &[&str], i: usize) -> Option<Windows> {
    if tokens[i] != "from" {
        return None;
    }
    let origins = forward(tokens, i + 1);
    let shortest = origins
        .first()
        .map_or(0, |o| o.split_whitespace().count());
    let to_idx = i + 1 + shortest;
    let destinations = if shortest > 0 && tokens.get(to_idx) == Some(&"to") {
        forward(tokens, to_idx + 1)
    } else {
        Vec::new()
    };
    Some(Windows {
        origins,
        destinations,
    })
}

fn connector(tokens: &[&str], i: usize) -> Option<Windows> {
    let next = tokens.get(i + 1)?;
    if !CONNECTORS.contains(next) {
        return None;
    }
    Some(Windows {
        origins: backward(tokens, i),
        destinations: forward(tokens, i + 2),
    })
}

/// First origin/destination window pair naming two distinct places.
fn resolve(windows: &Windows, gazetteer: &Gazetteer) -> Option<(Place, Place)> {
    let origins: Vec<Option<Place>> = windows
        .origins
        .iter()
        .map(|w| match_place(w, gazetteer))
        .collect();
    let destinations: Vec<Option<Place>> = windows
        .destinations
        .iter()
        .map(|w| match_place(w, gazetteer))
        .collect();

    origins.iter().flatten().find_map(|origin| {
        destinations
            .iter()
            .flatten()
            .find(|destination| *destination != origin)
            .map(|destination| (origin.clone(), destination.clone()))
    })
}

fn bare_to(tokens: &[&str], i: usize, gazetteer: &Gazetteer) -> Option<Place> {
    if tokens[i] != "to" {
        return None;
    }
    forward(tokens, i + 1)
        .iter()
        .find_map(|w| match_place(w, gazetteer))
}

/// Find the first directional place pair in a message.
///
/// Returns `None` when no cue yields two distinct places. Origin and
/// destination never resolve to the same place.
#[must_use]
pub fn extract_pair(text: &str, gazetteer: &Gazetteer) -> Option<DirectionalPair> {
    let normalized = normalize(text);
    let words = tokens(&normalized);

    for i in 0..words.len() {
        let paired = PAIRED_CUES
            .iter()
            .find_map(|&(cue, rule)| rule(&words, i).map(|w| (cue, w)));

        if let Some((cue, windows)) = paired {
            if let Some((origin, destination)) = resolve(&windows, gazetteer) {
                debug!(?cue, position = i, %origin, %destination, "directional pair");
                return Some(DirectionalPair {
                    origin,
                    destination,
                    cue,
                });
            }
        }

        if let Some(destination) = bare_to(&words, i, gazetteer) {
            debug!(position = i, %destination, "destination-only pair");
            return Some(DirectionalPair {
                origin: Place::HomeBase,
                destination,
                cue: Cue::BareTo,
            });
        }
    }

    None
}
