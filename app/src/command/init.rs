use ridelog_config::Config;
use ridelog_extract::BUNDLED_PLACES;

/// Strategy for initializing the configuration.
///
/// Creates `~/ridelog/config.json` and a `places.txt` next to it seeded
/// with the bundled places list.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;
        println!("✅ Created config file at: {}", config_path.display());

        let places_path = config_path.with_file_name("places.txt");
        if places_path.exists() {
            println!("   Keeping existing places file: {}", places_path.display());
        } else {
            std::fs::write(&places_path, BUNDLED_PLACES)?;
            println!("✅ Created places file at: {}", places_path.display());
        }

        println!();
        println!("📝 Next steps:");
        println!("   1. Add your local place names and spellings to places.txt");
        println!("      (one place per line: canonical = synonym = synonym)");
        println!("   2. Run 'ridelog extract --input messages.json' to enrich a batch");
        println!();
        Ok(())
    }
}
