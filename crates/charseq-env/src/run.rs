//! # Run Context
//!
//! Per-run identity and scratch space.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempdir::TempDir;

use crate::errors::EnvResult;

/// The prefix for run scratch directories.
pub const TEMP_DIR_PREFIX: &str = "charseq_";

/// Format a run name from a UTC timestamp.
///
/// ``2024-03-05 14:07:09.012345`` becomes ``2024-03-05_14_07_09.012345``.
pub fn format_run_name(timestamp: DateTime<Utc>) -> String {
    timestamp
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string()
        .replace([' ', '/', ':'], "_")
}

/// Identity and scratch space for one run of a pipeline.
///
/// The run name is fixed at construction; the scratch directory is
/// created on first request, and is kept after the context is dropped.
#[derive(Debug, Clone)]
pub struct RunContext {
    run_name: String,
    temp_dir: Option<PathBuf>,
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RunContext {
    /// Create a context named for the current time.
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    /// Create a context named for the given start time.
    pub fn started_at(timestamp: DateTime<Utc>) -> Self {
        let run_name = format_run_name(timestamp);
        log::info!("run name: {run_name}");
        Self {
            run_name,
            temp_dir: None,
        }
    }

    /// The unique name of this run.
    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// The scratch directory for this run, created on first call.
    ///
    /// ## Returns
    /// The directory path; stable for the life of the context.
    pub fn temp_dir(&mut self) -> EnvResult<&Path> {
        let dir = match self.temp_dir.take() {
            Some(dir) => dir,
            None => {
                let dir = TempDir::new(TEMP_DIR_PREFIX)?.into_path();
                log::info!("created temporary directory: {}", dir.display());
                dir
            }
        };
        Ok(self.temp_dir.insert(dir).as_path())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_run_name() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
            + chrono::Duration::microseconds(12_345);
        assert_eq!(format_run_name(ts), "2024-03-05_14_07_09.012345");
    }

    #[test]
    fn test_run_name_is_stable() {
        let ctx = RunContext::new();
        let name = ctx.run_name().to_string();
        assert_eq!(ctx.run_name(), name);
        assert!(!name.contains([' ', '/', ':']));
    }

    #[test]
    fn test_temp_dir() {
        let mut ctx = RunContext::default();

        let first = ctx.temp_dir().unwrap().to_path_buf();
        assert!(first.is_dir());
        assert!(
            first
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(TEMP_DIR_PREFIX)
        );

        let second = ctx.temp_dir().unwrap().to_path_buf();
        assert_eq!(first, second);

        drop(ctx);
        assert!(first.is_dir());
        std::fs::remove_dir_all(&first).unwrap();
    }
}
