//! Toggle a feature flag across per-service, per-environment appsettings
//! files. Name the flag, name the service, and list the environments that
//! get it; everything else gets it turned off.
//!
//! ```ignore
//! let plan = ApplyPlan::new("newCheckout", "locker", "hr,sps")?;
//! println!("{plan}");
//! let report = plan.execute(base_path.as_deref());
//! println!("{report}");
//! ```
//!
//! That pair of calls resolves `locker` to `LockerWebAPI`, partitions the
//! known environments into `{hr, sps}` → `true` and `{si, az}` → `false`,
//! and rewrites the `Actions` section of every `appsettings.*.json` file
//! belonging to those environments.
//!
//! # Why appflag
//!
//! Rolling a feature flag out by hand means opening a dozen
//! `appsettings.*.json` files spread over preprod, staging, and production
//! variants, editing the same key in each, and hoping no file was missed and
//! no diff noise crept in. Appflag replaces that with a single invocation:
//! the registry knows which files belong to which environment, and the
//! updater writes every file the same canonical way, so a rollout is one
//! command and one clean diff.
//!
//! # Core library, no CLI framework required
//!
//! The core has no dependency on any CLI framework. [`ApplyPlan`] and the
//! functions in [`registry`] are plain calls over strings; the clap adapter
//! ([`Cli`], behind the `clap` Cargo feature, on by default) only converts
//! parsed arguments into those calls. To use the library without clap:
//!
//! ```toml
//! appflag = { version = "...", default-features = false }
//! ```
//!
//! # Path resolution
//!
//! Each file is located by trying, in order, first match wins:
//!
//! 1. `{base}/{service}/{file}` when a base path is configured. No
//!    existence check; the base is trusted as the repo checkout.
//! 2. `{cwd}/{file}` if it exists (the operator is inside the service
//!    directory already).
//! 3. `{cwd}/{service}/{file}`, existing or not.
//!
//! The binary reads the base path from the `PROJECT_PATH` environment
//! variable, loadable from a `.env` file. Files are only ever updated in
//! place; a path that resolves to nothing is reported, not created.
//!
//! # Document handling
//!
//! Documents are plain JSON objects. The updater touches exactly one thing:
//! the top-level `"Actions"` object, where the flag is inserted or
//! overwritten and the keys are re-sorted lexicographically so output is
//! deterministic and diff-friendly. Every other key keeps its value and its
//! position. Output is 2-space indented with exactly one trailing newline
//! and non-ASCII characters kept literal, so running the same command twice
//! produces byte-identical files.
//!
//! # Error handling
//!
//! Failures split along one line: resolution errors ([`AppflagError`]) are
//! fatal and happen before any file is touched; per-file problems
//! ([`UpdateOutcome`]) are statuses, reported one line each, and never stop
//! the run. A malformed or missing file only affects itself. There is no
//! rollback across files; partial completion is a valid, reported outcome.

pub mod error;
pub mod registry;

mod apply;
#[cfg(feature = "clap")]
mod cli;
mod resolve;
mod update;

#[cfg(test)]
mod fixtures;

pub use apply::{ApplyPlan, ApplyReport, EnvReport};
#[cfg(feature = "clap")]
pub use cli::Cli;
pub use error::{AppflagError, DocumentError};
pub use resolve::{resolve_file_path, resolve_file_path_from};
pub use update::{ACTIONS_KEY, UpdateOutcome, set_flag_in_document, update_flag};
