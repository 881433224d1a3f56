#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Rule-based extraction of ride facts from chat messages.
//!
//! Stages, leaves first: [`gazetteer`], [`normalize`], [`places`], [`pair`],
//! [`category`], [`datetime`], [`intent`]. [`Pipeline`] composes them per
//! message and over batches.

pub mod batch;
pub mod category;
pub mod datetime;
mod dedup;
pub mod gazetteer;
pub mod intent;
pub mod normalize;
pub mod pair;
pub mod pipeline;
pub mod places;

pub use batch::{BatchFormat, read_batch, write_batch};
pub use category::{Classification, classify};
pub use datetime::{DateTimeExtractor, RideDateTime, reference_date};
pub use dedup::{dedup, dedup_key};
pub use gazetteer::{BUNDLED_PLACES, Gazetteer};
pub use intent::IntentClassifier;
pub use normalize::normalize;
pub use pair::{Cue, DirectionalPair, extract_pair};
pub use pipeline::{BatchOptions, Pipeline};
pub use places::{FoundPlaces, find_places};
