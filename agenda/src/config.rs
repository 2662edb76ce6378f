use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_NAME_PREFIX: &str = "Obec";
pub const DEFAULT_LOG_FILTER: &str = "agenda=info";

/// Municipality register shell. Commands are read line by line from stdin
/// (or from `--script`), type `help` for the list of commands.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "agenda", version)]
pub struct AgendaConfig {
    /// CSV file imported before the first command
    #[arg(long, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Number of random records generated before the first command
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub generate: usize,

    /// Seed of the random record generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Prefix of generated municipality names
    #[arg(long, default_value = DEFAULT_NAME_PREFIX)]
    pub name_prefix: String,

    /// Read commands from this file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Log filter in `tracing_subscriber::EnvFilter` syntax, overrides
    /// `RUST_LOG`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            import: None,
            generate: 0,
            seed: DEFAULT_SEED,
            name_prefix: DEFAULT_NAME_PREFIX.to_owned(),
            script: None,
            log: None,
        }
    }
}
