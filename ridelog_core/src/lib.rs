#![deny(
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

mod error;
mod message;
mod place;

pub use error::{Error, Result};
pub use message::{Category, EnrichedRecord, ExtractionResult, RawMessage, RideType};
pub use place::{HOME_BASE_NAME, Place};
