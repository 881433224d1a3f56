//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch in `main` is resolved at compile time.

use anyhow::Context;
use ridelog_config::Config;
use ridelog_extract::{Gazetteer, IntentClassifier, Pipeline};
use std::path::Path;
use tracing::info;

mod classify;
mod extract;
mod info;
mod init;
mod probe;
mod version;

pub use classify::{ClassifyInput, ClassifyStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use probe::{ProbeInput, ProbeStrategy};
pub use version::VersionStrategy;

/// Load the gazetteer named by `--places`, then config, then the bundled list.
fn load_gazetteer(config: &Config, places: Option<&Path>) -> anyhow::Result<Gazetteer> {
    match places.or(config.gazetteer.path.as_deref()) {
        Some(path) => {
            info!("Loading places from {}", path.display());
            Ok(Gazetteer::load(path)?)
        }
        None => {
            info!("Using bundled places list");
            Ok(Gazetteer::bundled()?)
        }
    }
}

fn intent_from(config: &Config) -> IntentClassifier {
    let defaults = IntentClassifier::default();
    let offering = config
        .intent
        .offering
        .clone()
        .unwrap_or_else(|| defaults.offering().to_vec());
    let seeking = config
        .intent
        .seeking
        .clone()
        .unwrap_or_else(|| defaults.seeking().to_vec());
    IntentClassifier::new(offering, seeking)
}

/// Build a pipeline from configuration plus command-line overrides.
fn build_pipeline(config: &Config, places: Option<&Path>) -> anyhow::Result<Pipeline> {
    let gazetteer = load_gazetteer(config, places).context("Failed to load gazetteer")?;
    Ok(Pipeline::new(gazetteer)?.with_intent(intent_from(config)))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
