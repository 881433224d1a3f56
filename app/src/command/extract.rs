use anyhow::Context;
use ridelog_config::Config;
use ridelog_extract::{BatchFormat, BatchOptions, read_batch, write_batch};
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Batch file; stdin when `None` or `-`
    pub input: Option<PathBuf>,
    /// Output file; stdout when `None` or `-`
    pub output: Option<PathBuf>,
    /// Places file overriding the configured one
    pub places: Option<PathBuf>,
    pub jsonl: bool,
    pub sequential: bool,
    pub dedup: bool,
}

fn file_arg(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

/// Strategy for enriching a batch of messages.
///
/// Reads raw messages (JSON array or JSON Lines), runs the pipeline and
/// writes one enriched record per surviving message, in input order.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let pipeline = super::build_pipeline(&config, input.places.as_deref())?;

        let raw = match file_arg(input.input.as_deref()) {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
        };

        let messages = read_batch(&raw)?;
        info!("Read {} messages", messages.len());

        let options = BatchOptions {
            parallel: config.pipeline.parallel && !input.sequential,
            dedup: config.pipeline.dedup || input.dedup,
        };
        let records = pipeline.enrich(messages, options);

        let format = if input.jsonl {
            BatchFormat::JsonLines
        } else {
            BatchFormat::JsonArray
        };

        match file_arg(input.output.as_deref()) {
            Some(path) => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_batch(&records, format, BufWriter::new(file))?;
                info!("Wrote {} records to {}", records.len(), path.display());
            }
            None => write_batch(&records, format, std::io::stdout().lock())?,
        }

        Ok(())
    }
}
