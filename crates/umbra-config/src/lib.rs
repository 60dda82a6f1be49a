//! Configuration for Umbra tools.
//!
//! Settings persist to `config.ron` and can be overridden from the command line.
//! Every section tolerates missing fields, so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, RecomputeArg};
pub use config::{Config, DebugConfig, WorldConfig};
pub use error::ConfigError;
