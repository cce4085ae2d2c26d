//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{DEFAULT_PROBE_TIMEOUT_MS, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT};
use crate::platform::{PlatformKey, DEFAULT_PLATFORMS, INTERNATIONAL_PLATFORMS, US_PLATFORMS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Platform set for `links`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformGroup {
    /// Every marketplace, US market first
    Default,
    /// US-focused marketplaces
    Us,
    /// International and wholesale marketplaces
    International,
}

impl PlatformGroup {
    pub fn platforms(self) -> &'static [PlatformKey] {
        match self {
            PlatformGroup::Default => DEFAULT_PLATFORMS,
            PlatformGroup::Us => US_PLATFORMS,
            PlatformGroup::International => INTERNATIONAL_PLATFORMS,
        }
    }
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "product_links", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the product URLs in a JSON file (or `-` for stdin)
    Check(CheckArgs),
    /// Serve the validation endpoint over HTTP
    Serve(ServeArgs),
    /// Print site-search links for a product title on each marketplace
    Links(LinksArgs),
}

/// Arguments for `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON file with a product array or a `{"products": [...]}` object; `-` reads stdin
    pub file: PathBuf,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Write results here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (127.0.0.1)
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// Default per-probe timeout in milliseconds when a request omits `timeout_ms`
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Arguments for `links`.
#[derive(Debug, Args)]
pub struct LinksArgs {
    /// Product title to search for
    pub title: String,

    /// Which marketplaces to list
    #[arg(long, value_enum, default_value_t = PlatformGroup::Default)]
    pub group: PlatformGroup,
}

/// Library configuration for a one-shot check (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use product_links::CheckConfig;
/// use std::path::PathBuf;
///
/// let config = CheckConfig {
///     file: PathBuf::from("products.json"),
///     timeout_ms: 3000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// File to read products from (`-` for stdin)
    pub file: PathBuf,

    /// Per-probe timeout in milliseconds
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Output path; stdout when `None`
    pub output: Option<PathBuf>,
}

impl CheckConfig {
    /// Per-probe timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("products.json"),
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: None,
        }
    }
}

impl From<CheckArgs> for CheckConfig {
    fn from(args: CheckArgs) -> Self {
        Self {
            file: args.file,
            timeout_ms: args.timeout_ms,
            user_agent: args.user_agent,
            output: args.output,
        }
    }
}

/// Library configuration for the request handler.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Port to bind on 127.0.0.1
    pub port: u16,

    /// Timeout used when a request does not carry its own
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl ServeConfig {
    /// Default per-probe timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            port: args.port,
            timeout_ms: args.timeout_ms,
            user_agent: args.user_agent,
        }
    }
}
