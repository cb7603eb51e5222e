//! Command-line interface and orchestration for model-rank
//!
//! # Commands
//!
//! - **score**: Read identifiers from a URL file, score them concurrently, and write
//!   NDJSON records plus the optional summary and error reports
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file, including that its weights form a valid
//!   metric registry
//!
//! Every command writes through a [`Host`] so it can be driven from tests.
//!
//! Configuration is a TOML file (`model-rank.toml` by default) holding the worker count,
//! task timeout, Hub endpoint, size bounds, and per-metric weights. Command-line flags
//! override the file.

mod common;
mod config;
mod host;
mod init;
mod run;
mod score;
mod url_file;
mod validate;

pub use common::{ColorMode, LogLevel, init_logging};
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use score::{ScoreArgs, score_models};
pub use url_file::{parse_identifiers, read_identifiers};
pub use validate::{ValidateArgs, validate_config};
