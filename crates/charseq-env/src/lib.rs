//! # charseq-env
//!
//! The run environment around [charseq](https://docs.rs/charseq) pipelines:
//! * [`FileConfig`] - TOML configuration with template fallback.
//! * [`RunContext`] - a timestamped run name and a per-run scratch directory.
//! * [`SchemaRegistry`] - dataset schema archives, as CSV.
//!
//! ## Example
//!
//! ```rust,no_run
//! use charseq_env::{ConfigProvider, DatasetSchema, FileConfig, RunContext, SchemaRegistry};
//!
//! fn example() -> charseq_env::EnvResult<()> {
//!     let config = FileConfig::resolve(None::<&str>)?;
//!     let maxlen = config.x_maxlen()?;
//!
//!     let mut run = RunContext::new();
//!     let scratch = run.temp_dir()?.to_path_buf();
//!     println!("{} {} {}", run.run_name(), maxlen, scratch.display());
//!
//!     let mut registry = SchemaRegistry::new();
//!     registry.register(DatasetSchema::new("encoded").with_column("y", "bool"));
//!     registry.archive("encode", config.data_schema_dir()?)?;
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod config;
pub mod errors;
pub mod path_resolver;
pub mod run;
pub mod schema;

#[doc(inline)]
pub use config::{ConfigProvider, FileConfig, MapConfig};
#[doc(inline)]
pub use errors::{EnvError, EnvResult};
#[doc(inline)]
pub use path_resolver::ConfigPathResolver;
#[doc(inline)]
pub use run::RunContext;
#[doc(inline)]
pub use schema::{DatasetSchema, SchemaRegistry};

/// Environment variable naming the configuration file.
pub const CHARSEQ_CONF: &str = "CHARSEQ_CONF";

/// Configuration path resolution for charseq.
pub const CHARSEQ_CONFIG_PATHS: ConfigPathResolver = ConfigPathResolver {
    qualifier: "io.crates",
    organization: "",
    application: "charseq",
    env_vars: &[CHARSEQ_CONF],
    local_path: "conf/conf.toml",
    file_name: "conf.toml",
};
