use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::SessionConfig;
use crate::error::SynthResult;

#[derive(Debug, Parser)]
#[command(name = "retail-synth", about = "synthetic retail transaction dataset generator")]
pub struct Args {
    #[arg(long, env = "RETAIL_SYNTH_OUT", default_value = "data")]
    pub out_dir: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a sales dataset plus its catalog side tables.
    Generate(GenerateArgs),
    /// Dump the built-in seed catalog as YAML for editing.
    Catalog(CatalogArgs),
}

#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Session config YAML; flags below override individual fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Catalog YAML; omitted means the built-in seed catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    pub count: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long)]
    pub campaign_probability: Option<f64>,
    /// Store count used when synthesizing the built-in catalog.
    #[arg(long, default_value_t = crate::catalog::builtin::DEFAULT_STORE_COUNT)]
    pub stores: usize,
    /// Overwrite an existing dataset in the output directory.
    #[arg(long)]
    pub force: bool,
}

impl GenerateArgs {
    /// Layers CLI overrides on top of the config file (or the defaults), then
    /// validates the result before any generation starts.
    pub fn session_config(&self) -> SynthResult<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(start_date) = self.start_date {
            config.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            config.end_date = end_date;
        }
        if let Some(probability) = self.campaign_probability {
            config.campaigns.base_probability = probability;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, clap::Args)]
pub struct CatalogArgs {
    /// Write the YAML here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    #[arg(long, default_value_t = crate::catalog::builtin::DEFAULT_STORE_COUNT)]
    pub stores: usize,
}
