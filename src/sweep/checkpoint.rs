//! Checkpoint persistence for resume capability

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};

/// File name prefix for checkpoint files
pub const DEFAULT_PREFIX: &str = "twitnames";

/// Single-integer checkpoint file holding the next index to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for a handle length, so different lengths never share a file
    pub fn for_length(dir: &Path, prefix: &str, length: usize) -> Self {
        Self::new(Self::path_for(dir, prefix, length))
    }

    /// Checkpoint path for a handle length
    pub fn path_for(dir: &Path, prefix: &str, length: usize) -> PathBuf {
        dir.join(format!("{}_{}", prefix, length))
    }

    /// Directory checkpoints live in when none is configured
    pub fn default_dir() -> PathBuf {
        if cfg!(unix) {
            PathBuf::from("/var/tmp")
        } else {
            std::env::temp_dir()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index to resume from; 0 when the file does not exist
    pub fn read(&self) -> Result<u64> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(SweepError::io(
                    e.to_string(),
                    Some(self.path.to_string_lossy().to_string()),
                ))
            }
        };

        content.trim().parse::<u64>().map_err(|_| {
            SweepError::checkpoint(self.path.to_string_lossy(), content.clone())
        })
    }

    /// Overwrite the checkpoint with `index`
    ///
    /// Writes a sibling file and renames it into place, so a kill mid-write
    /// leaves either the old or the new value.
    pub fn write(&self, index: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SweepError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
                })?;
            }
        }

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        std::fs::write(&staging, index.to_string()).map_err(|e| {
            SweepError::io(e.to_string(), Some(staging.to_string_lossy().to_string()))
        })?;
        std::fs::rename(&staging, &self.path).map_err(|e| {
            SweepError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })
    }
}
