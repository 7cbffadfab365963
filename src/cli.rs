//! Command line interface

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::Result;
use crate::probe::{UrlTemplate, DEFAULT_URL_TEMPLATE};
use crate::sweep::{Alphabet, CheckpointStore, SweepConfig, DEFAULT_ALPHABET};

/// Sweep every handle of a given length and report which ones are free
#[derive(Parser, Debug, Clone)]
#[command(name = "name-sweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Length of handle
    #[arg(short, long)]
    pub length: usize,

    /// How many probes between pauses for the web server
    #[arg(long = "sleep-frequency", default_value_t = 5)]
    pub sleep_frequency: u64,

    /// How many probes between progress saves
    #[arg(long = "save-frequency", default_value_t = 10)]
    pub save_frequency: u64,

    /// Start over instead of resuming
    #[arg(short, long)]
    pub reset: bool,

    /// Symbols handles are built from, in enumeration order
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Profile URL; `{name}` is replaced by the handle
    #[arg(long, env = "NAME_SWEEP_URL_TEMPLATE", default_value = DEFAULT_URL_TEMPLATE)]
    pub url_template: String,

    /// Directory for checkpoint files
    #[arg(long, env = "NAME_SWEEP_CHECKPOINT_DIR")]
    pub checkpoint_dir: Option<PathBuf>,

    /// Seconds to sleep at each pause
    #[arg(long, default_value_t = 5)]
    pub pause_secs: u64,

    /// Print one JSON object per handle instead of plain lines
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build a validated sweep configuration
    pub fn into_config(self) -> Result<SweepConfig> {
        let config = SweepConfig {
            length: self.length,
            alphabet: Alphabet::new(&self.alphabet)?,
            sleep_every: self.sleep_frequency,
            save_every: self.save_frequency,
            pause: Duration::from_secs(self.pause_secs),
            reset: self.reset,
            checkpoint_dir: self
                .checkpoint_dir
                .unwrap_or_else(CheckpointStore::default_dir),
            url_template: UrlTemplate::new(self.url_template)?,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}
