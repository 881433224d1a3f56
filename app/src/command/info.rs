use ridelog_config::Config;
use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// Prints the config location, the places source with its size, the intent
/// phrase tables and the batch options.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== ridelog Configuration ===\n");

        println!("Config:");
        if config_path.exists() {
            println!("  File: {}", config_path.display());
        } else {
            println!("  File: (not found, using defaults)");
        }
        println!();

        println!("Gazetteer:");
        match &config.gazetteer.path {
            Some(path) => println!("  Source: {}", path.display()),
            None => println!("  Source: (bundled)"),
        }
        info!("Loading gazetteer");
        match super::load_gazetteer(&config, None) {
            Ok(gazetteer) => {
                println!("  Places: {}", gazetteer.place_count());
                println!("  Spellings: {}", gazetteer.len());
            }
            Err(e) => {
                println!("  Status: Load failed");
                println!("  Error: {e:#}");
            }
        }
        println!();

        let intent = super::intent_from(&config);
        println!("Intent:");
        println!("  Offering: {}", intent.offering().join(", "));
        println!("  Seeking: {}", intent.seeking().join(", "));
        println!();

        println!("Pipeline:");
        println!("  Parallel: {}", config.pipeline.parallel);
        println!("  Dedup: {}", config.pipeline.dedup);

        Ok(())
    }
}
