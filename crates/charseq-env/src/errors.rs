//! # Error Types

use std::path::PathBuf;

/// Errors from the run environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Neither the configuration file nor its template could be opened.
    #[error(
        "no configuration found at {} or {}",
        .primary.display(),
        .template.display()
    )]
    ConfigMissing {
        /// The primary configuration path.
        primary: PathBuf,

        /// The template fallback path.
        template: PathBuf,
    },

    /// No configuration path could be resolved.
    #[error("no configuration path could be resolved")]
    ConfigUnresolved,

    /// The configuration file is not valid TOML.
    #[error("failed to parse configuration {}: {source}", .path.display())]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,

        /// The parser error.
        source: toml::de::Error,
    },

    /// A required configuration key is absent.
    #[error("configuration key missing: {name}")]
    ConfigKeyMissing {
        /// The key name.
        name: String,
    },

    /// A configuration value has the wrong type or range.
    #[error("configuration key {name}: expected {expected}")]
    ConfigValue {
        /// The key name.
        name: String,

        /// A description of the expected value.
        expected: &'static str,
    },

    /// A configured path could not be expanded.
    #[error(transparent)]
    PathExpand(#[from] shellexpand::LookupError<std::env::VarError>),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for run environment operations.
pub type EnvResult<T> = core::result::Result<T, EnvError>;
