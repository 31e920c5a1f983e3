// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `regen-all`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "regen-all",
    version,
    about = "Run the installer generator for every supported distro in parallel.",
    long_about = None
)]
pub struct CliArgs {
    /// Path of the generator script to invoke once per distro.
    ///
    /// Resolved relative to the current working directory.
    #[arg(long, value_name = "PATH", default_value = "./run.py")]
    pub script: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `REGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
