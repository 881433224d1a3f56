use ridelog_config::Config;
use ridelog_core::RawMessage;
use std::path::PathBuf;

/// Input parameters for the Probe command strategy.
#[derive(Debug, Clone)]
pub struct ProbeInput {
    pub text: String,
    /// Reference date as `YYYY-MM-DD`
    pub date: Option<String>,
    pub places: Option<PathBuf>,
}

/// Strategy for running the full pipeline on a single message.
#[derive(Debug, Clone, Copy)]
pub struct ProbeStrategy;

impl super::CommandStrategy for ProbeStrategy {
    type Input = ProbeInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let pipeline = super::build_pipeline(&config, input.places.as_deref())?;

        let message = RawMessage {
            conversation_date: input.date,
            ..RawMessage::new(input.text)
        };
        let result = pipeline.process(&message);

        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }
}
