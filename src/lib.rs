//! Name Sweep - find unclaimed short handles by brute force
//!
//! Enumerates every handle of a fixed length, probes its profile page and
//! classifies the status code. Progress is checkpointed so an interrupted
//! sweep picks up where it left off.

pub mod cli;
pub mod error;
pub mod probe;
pub mod sweep;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SweepError};
pub use types::{Classification, ProbeReport, SweepSummary};

// Re-export main functionality
pub use probe::{HttpProber, Prober, UrlTemplate};
pub use sweep::{Alphabet, CandidateGenerator, CheckpointStore, SweepConfig, Sweeper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
