use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "service-integrator")]
#[command(about = "Validate and resolve API service integration definitions")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that a service integrator definition is well formed
    Validate {
        /// Path to a .json or .toml integrator definition
        file: PathBuf,
    },
    /// Describe the call an integration would make, without sending it
    Resolve {
        /// Path to a .json or .toml integrator definition
        integrator: PathBuf,
        /// Path to a .json integration definition
        integration: PathBuf,
    },
}
