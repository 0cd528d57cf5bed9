//! Orchestration: fan one flag assignment out across every environment.
//!
//! Resolution happens up front in [`ApplyPlan::new`]; an unknown service or
//! environment aborts there, before any file is read or written. Execution
//! then walks the enabled environments in caller order and the remaining
//! codes in registry order, producing one [`UpdateOutcome`] per file. A
//! failing file never stops the run and nothing is rolled back across files.

use std::fmt;
use std::path::Path;

use crate::error::AppflagError;
use crate::registry;
use crate::resolve::resolve_file_path;
use crate::update::{UpdateOutcome, update_flag};

/// A resolved flag assignment, ready to execute.
///
/// Holds the canonical service name and the true/false partition of the
/// closed environment set. `Display` renders the pre-run summary shown to
/// the operator before any file is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyPlan {
    pub flag: String,
    pub service: &'static str,
    /// Environments whose files get the flag set to `true`, in caller order.
    pub enable: Vec<&'static str>,
    /// All remaining known codes, in registry order; their files get `false`.
    pub disable: Vec<&'static str>,
}

impl ApplyPlan {
    /// Resolve raw inputs into a plan.
    ///
    /// Fails with [`AppflagError::UnknownService`] or
    /// [`AppflagError::UnknownEnvironment`] without touching the filesystem.
    /// An empty environment list is valid: every code lands in `disable` and
    /// the flag goes false everywhere.
    pub fn new(flag_name: &str, service: &str, environments: &str) -> Result<Self, AppflagError> {
        let service = registry::resolve_service(service)?;
        let enable = registry::resolve_environments(environments)?;
        let disable = registry::environment_codes()
            .filter(|code| !enable.contains(code))
            .collect();
        Ok(Self {
            flag: flag_name.to_string(),
            service,
            enable,
            disable,
        })
    }

    /// Update every file of every environment: `true` for `enable`, `false`
    /// for `disable`. Per-file problems are recorded in the report, never
    /// propagated; partial completion is a valid terminal state.
    pub fn execute(&self, base_path: Option<&Path>) -> ApplyReport {
        let mut environments = Vec::new();
        for (codes, value) in [(&self.enable, true), (&self.disable, false)] {
            for &code in codes {
                let outcomes = registry::files_for_environment(code)
                    .iter()
                    .map(|file_name| {
                        let path = resolve_file_path(self.service, file_name, base_path);
                        update_flag(&path, &self.flag, value)
                    })
                    .collect();
                environments.push(EnvReport {
                    code,
                    value,
                    outcomes,
                });
            }
        }
        ApplyReport { environments }
    }
}

impl fmt::Display for ApplyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if !self.enable.is_empty() {
            lines.push(format!(
                "Setting '{}' to true for environments: {}",
                self.flag,
                self.enable.join(", ")
            ));
        }
        if !self.disable.is_empty() {
            lines.push(format!(
                "Setting '{}' to false for environments: {}",
                self.flag,
                self.disable.join(", ")
            ));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Per-file outcomes of an executed plan, grouped by environment in
/// processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub environments: Vec<EnvReport>,
}

/// Outcomes for one environment's file list.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvReport {
    pub code: &'static str,
    /// Value every file in this environment was assigned.
    pub value: bool,
    pub outcomes: Vec<UpdateOutcome>,
}

impl ApplyReport {
    /// All outcomes in processing order.
    pub fn outcomes(&self) -> impl Iterator<Item = &UpdateOutcome> {
        self.environments.iter().flat_map(|env| env.outcomes.iter())
    }

    /// Whether every processed file was updated successfully.
    pub fn is_clean(&self) -> bool {
        self.outcomes()
            .all(|outcome| matches!(outcome, UpdateOutcome::Updated { .. }))
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, env) in self.environments.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Environment: {}", env.code)?;
            for outcome in &env.outcomes {
                write!(f, "\n  {outcome}")?;
            }
        }
        Ok(())
    }
}
