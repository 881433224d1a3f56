use ridelog_config::Config;
use ridelog_core::Place;
use std::path::PathBuf;

/// Input parameters for the Classify command strategy.
#[derive(Debug, Clone)]
pub struct ClassifyInput {
    pub text: String,
    pub places: Option<PathBuf>,
}

/// Strategy for running only the category stage.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyStrategy;

impl super::CommandStrategy for ClassifyStrategy {
    type Input = ClassifyInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let pipeline = super::build_pipeline(&config, input.places.as_deref())?;
        let classification = pipeline.classify(&input.text);

        println!("category:    {}", classification.category.as_str());
        println!("origin:      {}", display(classification.origin.as_ref()));
        println!("destination: {}", display(classification.destination.as_ref()));
        Ok(())
    }
}

fn display(place: Option<&Place>) -> &str {
    place.map_or("(none)", Place::name)
}
