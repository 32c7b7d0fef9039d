#[cfg(feature = "cli")]
pub mod cli;
pub mod loader;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
