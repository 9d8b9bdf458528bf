//! vintext CLI - normalize wine descriptions from the command line

use std::io::{self, BufRead, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use vintext::resources::{required_resources, ResourceProvider};
use vintext::{
    BundledResources, ContractionPolicy, DirectoryResources, PipelineSpec, ReductionMode,
    TextPipeline,
};

/// vintext - text normalization for wine descriptions
#[derive(Parser, Debug)]
#[command(name = "vintext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize texts given as arguments, or one per line on stdin
    Normalize {
        /// Texts to normalize (reads stdin when empty)
        texts: Vec<String>,

        /// Read stdin as a JSON array and print a JSON array
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        spec: SpecArgs,
    },

    /// List the resources a configuration needs and whether they are available
    Resources {
        #[command(flatten)]
        spec: SpecArgs,
    },
}

#[derive(Args, Debug)]
struct SpecArgs {
    /// Pipeline spec file (JSON); flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reduction mode: stem, lemmatize or none
    #[arg(short, long)]
    mode: Option<ReductionMode>,

    /// Language name or ISO 639-1 code
    #[arg(short, long)]
    language: Option<String>,

    /// Extra stop word (repeatable)
    #[arg(short, long = "stopword")]
    stopwords: Vec<String>,

    /// Apostrophe handling: strip or keep
    #[arg(long)]
    contractions: Option<ContractionPolicy>,

    /// Load resources from an NLTK-data style directory instead of the bundled set
    #[arg(short, long)]
    resources: Option<PathBuf>,
}

impl SpecArgs {
    fn spec(&self) -> Result<PipelineSpec> {
        let mut spec = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                PipelineSpec::from_json(&json)?
            }
            None => PipelineSpec::default(),
        };

        if let Some(mode) = self.mode {
            spec.reduction = mode;
        }
        if let Some(language) = &self.language {
            spec.language = language.clone();
        }
        if let Some(policy) = self.contractions {
            spec.contractions = policy;
        }
        if !self.stopwords.is_empty() {
            let mut extra = spec.extra_stopwords.take().unwrap_or_default();
            extra.extend(self.stopwords.iter().cloned());
            spec.extra_stopwords = Some(extra);
        }
        Ok(spec)
    }

    fn provider(&self) -> Box<dyn ResourceProvider> {
        match &self.resources {
            Some(dir) => Box::new(DirectoryResources::new(dir)),
            None => Box::new(BundledResources::new()),
        }
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

/// Coerce a JSON value to record text: strings as-is, `null` as empty,
/// anything else through its JSON rendering.
fn record_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn read_records(texts: Vec<String>, json: bool) -> Result<Vec<String>> {
    if !texts.is_empty() {
        return Ok(texts);
    }

    if json {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let values: Vec<serde_json::Value> =
            serde_json::from_str(&input).context("stdin is not a JSON array")?;
        return Ok(values.into_iter().map(record_text).collect());
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read stdin")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Normalize { texts, json, spec } => {
            let provider = spec.provider();
            let pipeline = TextPipeline::with_resources(spec.spec()?, provider.as_ref())?;
            let records = read_records(texts, json)?;
            debug!(records = records.len(), "normalizing");

            let output = pipeline.transform(&records);
            if json {
                println!("{}", serde_json::to_string(&output)?);
            } else {
                for line in output {
                    println!("{line}");
                }
            }
        }

        Commands::Resources { spec } => {
            let provider = spec.provider();
            let spec = spec.spec()?;
            let language = spec.validate()?;

            let mut missing = 0;
            for id in required_resources(language, spec.reduction) {
                let status = if provider.has(&id) {
                    "available"
                } else {
                    missing += 1;
                    "missing"
                };
                println!("{id}\t{status}");
            }
            if missing > 0 {
                bail!("{missing} required resource(s) missing");
            }
        }
    }

    Ok(())
}
