use clap::Parser;

use super::defaults::{DEFAULT_CONFIG_PATH, DEFAULT_DURATION_SECS, DEFAULT_ITERATIONS};
use super::parsers::{parse_bool_env, parse_config_path, parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Send one HTTP request described by a JSON file, then optionally stress the same endpoint for a fixed duration."
)]
pub struct CliArgs {
    /// Path to the JSON request configuration file
    #[arg(
        long,
        short = 'c',
        env = "LOADSHOT_CONFIG",
        default_value = DEFAULT_CONFIG_PATH,
        value_parser = parse_config_path
    )]
    pub config: String,

    /// Number of concurrent requests launched by the stress test (1 disables it)
    #[arg(
        long,
        short = 'n',
        default_value_t = PositiveUsize::from(DEFAULT_ITERATIONS),
        value_parser = parse_positive_usize
    )]
    pub iterations: PositiveUsize,

    /// Duration of the stress test in seconds
    #[arg(
        long,
        short = 'd',
        default_value_t = PositiveU64::from(DEFAULT_DURATION_SECS),
        value_parser = parse_positive_u64
    )]
    pub duration: PositiveU64,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADSHOT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
