//! Path resolution for appsettings files.
//!
//! Two deployment layouts are supported without configuration:
//!
//! - **Explicit base path** (monorepo checkout): when a base path is set,
//!   every file lives at `{base}/{service}/{file}`. No existence check is
//!   made; a wrong base surfaces as per-file not-found outcomes downstream,
//!   not as a fatal error.
//! - **Ad hoc** (no base path): `{cwd}/{file}` when the operator is already
//!   inside the service directory, otherwise `{cwd}/{service}/{file}`. The
//!   latter is also the returned default when the file exists in neither
//!   place: files are only ever updated in place, never created, so a
//!   missing default is reported as not found by the updater.

use std::path::{Path, PathBuf};

/// Resolve the concrete path for one appsettings file.
pub fn resolve_file_path(service: &str, file_name: &str, base_path: Option<&Path>) -> PathBuf {
    if let Some(base) = base_path {
        return base.join(service).join(file_name);
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_file_path_from(&cwd, service, file_name)
}

/// Like [`resolve_file_path`] without a base path, but relative to an
/// explicit directory instead of CWD. Useful in tests and for callers that
/// need to control the starting point.
pub fn resolve_file_path_from(dir: &Path, service: &str, file_name: &str) -> PathBuf {
    let direct = dir.join(file_name);
    if direct.exists() {
        return direct;
    }
    dir.join(service).join(file_name)
}
