//! Clap adapter for appflag.
//!
//! This module is the integration layer between the framework-agnostic core
//! and the [clap](https://docs.rs/clap) parser. It is compiled only when the
//! `clap` Cargo feature is enabled (on by default); nothing in the core
//! depends on it.
//!
//! The only bridge into the core is [`Cli::into_plan`], which hands the raw
//! argument strings to [`ApplyPlan::new`]. All validation lives there, so an
//! app using a different argument parser (or none) gets identical behavior
//! by calling the same function.

use clap::Parser;

use crate::apply::ApplyPlan;
use crate::error::AppflagError;
use crate::registry;

/// Toggle a feature flag across per-service, per-environment appsettings
/// files: enabled in the environments you list, disabled everywhere else.
#[derive(Debug, Parser)]
#[command(name = "appflag")]
pub struct Cli {
    /// Name of the feature flag.
    #[arg(long)]
    pub name: String,

    /// Service to configure the flag for.
    #[arg(long, long_help = service_long_help())]
    pub service: String,

    /// Environments that get the flag enabled.
    #[arg(long, long_help = env_long_help())]
    pub env: String,
}

impl Cli {
    /// Resolve the parsed arguments into an [`ApplyPlan`].
    ///
    /// Unknown services and environments surface here, before any file I/O.
    pub fn into_plan(self) -> Result<ApplyPlan, AppflagError> {
        ApplyPlan::new(&self.name, &self.service, &self.env)
    }
}

fn service_long_help() -> String {
    format!(
        "Service to configure the flag for. Available: {}\n('WebAPI' is appended automatically)",
        registry::service_aliases().join(", ")
    )
}

fn env_long_help() -> String {
    format!(
        "Comma-separated list of environments that get the flag enabled; every other known environment gets it disabled. Available: {}",
        registry::environment_codes().collect::<Vec<_>>().join(", ")
    )
}
