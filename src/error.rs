use thiserror::Error;

/// Fatal resolution errors. Both variants are raised while resolving user
/// input, before any file is read or written; the whole run aborts. Per-file
/// problems are not errors: they are reported as
/// [`UpdateOutcome`](crate::UpdateOutcome) values and the run continues.
#[derive(Debug, Error)]
pub enum AppflagError {
    #[error(
        "Unknown service '{input}'. Must be one of: {available}\n(You can use these names directly, 'WebAPI' is appended automatically)"
    )]
    UnknownService { input: String, available: String },

    #[error("Unknown environment '{token}'. Must be one of: {available}")]
    UnknownEnvironment { token: String, available: String },
}

/// Why a single document could not be patched. Produced by the pure
/// [`set_flag_in_document`](crate::set_flag_in_document); the I/O wrapper
/// converts it into an [`UpdateOutcome`](crate::UpdateOutcome) so it never
/// aborts a run.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is not a JSON object")]
    RootNotObject,

    #[error("\"Actions\" exists but is not a JSON object")]
    SectionNotObject,
}
