//! Handle sweeper - resume, probe every remaining candidate, checkpoint

use std::path::PathBuf;
use std::time::Duration;

use super::checkpoint::{CheckpointStore, DEFAULT_PREFIX};
use super::generator::CandidateGenerator;
use super::governor::{Cadence, RateGovernor};
use super::Alphabet;
use crate::error::Result;
use crate::probe::{HttpProber, Prober, UrlTemplate};
use crate::types::{ProbeReport, SweepSummary};

/// Sweep configuration
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Handle length to sweep
    pub length: usize,
    /// Symbols handles are built from
    pub alphabet: Alphabet,
    /// Pause after every N probes
    pub sleep_every: u64,
    /// Save progress every N probes
    pub save_every: u64,
    /// How long each pause lasts
    pub pause: Duration,
    /// Ignore any existing checkpoint and start at 0
    pub reset: bool,
    /// Directory holding checkpoint files
    pub checkpoint_dir: PathBuf,
    /// Checkpoint file name prefix
    pub checkpoint_prefix: String,
    /// Profile URL template
    pub url_template: UrlTemplate,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            length: 3,
            alphabet: Alphabet::default(),
            sleep_every: 5,
            save_every: 10,
            pause: Duration::from_secs(5),
            reset: false,
            checkpoint_dir: CheckpointStore::default_dir(),
            checkpoint_prefix: DEFAULT_PREFIX.to_string(),
            url_template: UrlTemplate::default(),
        }
    }
}

impl SweepConfig {
    /// Checkpoint store for this configuration's length
    pub fn checkpoint_store(&self) -> CheckpointStore {
        CheckpointStore::for_length(&self.checkpoint_dir, &self.checkpoint_prefix, self.length)
    }

    /// Reject anything that would fail mid-sweep
    pub fn validate(&self) -> Result<()> {
        CandidateGenerator::new(self.alphabet.clone(), self.length)?;
        Cadence::new(self.sleep_every)?;
        Cadence::new(self.save_every)?;
        Ok(())
    }
}

/// Drives one sweep: resume, iterate, terminate
pub struct Sweeper<P> {
    config: SweepConfig,
    prober: P,
    store: CheckpointStore,
    governor: RateGovernor,
    save_cadence: Cadence,
}

impl Sweeper<HttpProber> {
    /// Sweeper probing the configured URL template over HTTP
    pub fn new(config: SweepConfig) -> Result<Self> {
        let prober = HttpProber::new(config.url_template.clone())?;
        Self::with_prober(config, prober)
    }
}

impl<P: Prober> Sweeper<P> {
    /// Sweeper with a custom prober
    pub fn with_prober(config: SweepConfig, prober: P) -> Result<Self> {
        config.validate()?;
        let store = config.checkpoint_store();
        let governor = RateGovernor::new(Cadence::new(config.sleep_every)?, config.pause);
        let save_cadence = Cadence::new(config.save_every)?;

        Ok(Self {
            config,
            prober,
            store,
            governor,
            save_cadence,
        })
    }

    pub fn checkpoint(&self) -> &CheckpointStore {
        &self.store
    }

    /// Index the sweep will start from
    pub fn resume_index(&self) -> Result<u64> {
        if self.config.reset {
            Ok(0)
        } else {
            self.store.read()
        }
    }

    /// Run the sweep, handing each report to `on_report`
    ///
    /// A transport error aborts the sweep at once; the checkpoint keeps the
    /// last periodic save. Finishing normally does not write a checkpoint.
    pub async fn run<F>(&mut self, mut on_report: F) -> Result<SweepSummary>
    where
        F: FnMut(&ProbeReport) -> Result<()>,
    {
        let mut generator = CandidateGenerator::new(self.config.alphabet.clone(), self.config.length)?;
        let start = self.resume_index()?;
        generator.set_index(start);

        let mut summary = SweepSummary::new(self.config.length, start, generator.total());

        if generator.is_exhausted() {
            tracing::warn!(
                checkpoint = %self.store.path().display(),
                index = start,
                total = generator.total(),
                "Checkpoint is at or past the end, nothing left to sweep"
            );
        } else {
            tracing::info!(
                length = self.config.length,
                from = start,
                remaining = generator.remaining(),
                checkpoint = %self.store.path().display(),
                "Starting sweep"
            );
        }

        for candidate in generator {
            if self.governor.throttle(candidate.index).await {
                summary.pauses += 1;
            }

            if self.save_cadence.fires_at(candidate.index) {
                self.store.write(candidate.index)?;
                summary.checkpoints_written += 1;
                tracing::debug!(index = candidate.index, "Checkpoint saved");
            }

            let status = self.prober.probe(&candidate.name).await?;
            let report = ProbeReport::new(candidate.index, candidate.name, status);
            summary.record(&report);
            on_report(&report)?;
        }

        summary.finish();
        tracing::info!(
            checked = summary.checked,
            available = summary.available,
            taken = summary.taken,
            suspended = summary.suspended,
            unrecognized = summary.unrecognized,
            elapsed_secs = summary.elapsed().as_secs(),
            "Sweep finished"
        );

        Ok(summary)
    }
}
