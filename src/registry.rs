//! Static service and environment tables.
//!
//! Everything here is a process-wide constant; nothing mutates at runtime.
//! Services are matched through a normalized alias (lowercase, `WebAPI`
//! suffix stripped), so `--service locker` and `--service LockerWebAPI`
//! both resolve to `LockerWebAPI`. The set of
//! environment codes is closed: resolution rejects anything outside it, which
//! lets the rest of the crate treat a resolved code as always valid.

use crate::error::AppflagError;

/// Canonical service names. Each one doubles as the name of the directory
/// holding that service's appsettings files.
pub const SERVICES: &[&str] = &[
    "CustomerWebAPI",
    "DocumentWebAPI",
    "EmailWebAPI",
    "EurodisWebAPI",
    "EventTowerWebAPI",
    "GatewayWebAPI",
    "GeocodeWebAPI",
    "HistoryWebAPI",
    "HubCompanionWebAPI",
    "IntegrationWebAPI",
    "LockerWebAPI",
    "NotificationWebAPI",
    "PushNotificationWebAPI",
    "RoutingWebAPI",
    "ShipmentWebAPI",
    "SmsWebAPI",
    "TaskWebAPI",
    "TrackingWebAPI",
    "UserWebAPI",
    "VersioningWebAPI",
    "ViberWebAPI",
];

/// Environment codes and the appsettings files each one owns, in processing
/// order.
pub const ENVIRONMENTS: &[(&str, &[&str])] = &[
    (
        "hr",
        &[
            "appsettings.AdxPreprod.json",
            "appsettings.CityexpressPreprod.json",
            "appsettings.Development.json",
            "appsettings.OverseasPreprod.json",
            "appsettings.json",
        ],
    ),
    (
        "si",
        &[
            "appsettings.ExpressoneBAProd.json",
            "appsettings.ExpressoneMEProd.json",
            "appsettings.ExpressonePreprod.json",
            "appsettings.ExpressoneStaging.json",
        ],
    ),
    (
        "sps",
        &[
            "appsettings.SPSPreprod.json",
            "appsettings.SPSProd.json",
            "appsettings.SPSStaging.json",
        ],
    ),
    ("az", &["appsettings.StarexpressPreprod.json"]),
];

/// Suffix token stripped during alias normalization.
const SERVICE_SUFFIX: &str = "webapi";

/// Normalize a service name (canonical or user input) into its alias form.
fn alias_of(name: &str) -> String {
    let lowered = name.to_lowercase();
    lowered
        .strip_suffix(SERVICE_SUFFIX)
        .unwrap_or(&lowered)
        .to_string()
}

/// Resolve user input to a canonical service name.
///
/// Matching is case-insensitive and the `WebAPI` suffix is optional. The
/// error lists every valid alias.
pub fn resolve_service(input: &str) -> Result<&'static str, AppflagError> {
    let alias = alias_of(input);
    SERVICES
        .iter()
        .find(|service| alias_of(service) == alias)
        .copied()
        .ok_or_else(|| AppflagError::UnknownService {
            input: input.to_string(),
            available: service_aliases().join(", "),
        })
}

/// All valid service aliases, sorted. Used for help and error text.
pub fn service_aliases() -> Vec<String> {
    let mut aliases: Vec<String> = SERVICES.iter().map(|service| alias_of(service)).collect();
    aliases.sort();
    aliases
}

/// The closed set of environment codes, in registry order.
pub fn environment_codes() -> impl Iterator<Item = &'static str> {
    ENVIRONMENTS.iter().map(|(code, _)| *code)
}

/// Resolve a comma-separated environment list into codes, caller order kept.
///
/// Tokens are trimmed and lowercased, empty tokens are dropped, and
/// duplicates keep their first occurrence. An empty result is valid: it means
/// no environment gets the flag enabled. Any unrecognized token fails the
/// whole resolution.
pub fn resolve_environments(input: &str) -> Result<Vec<&'static str>, AppflagError> {
    let mut codes = Vec::new();
    for token in input.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }
        let code = environment_codes().find(|code| *code == token).ok_or_else(|| {
            AppflagError::UnknownEnvironment {
                token: token.clone(),
                available: environment_codes().collect::<Vec<_>>().join(", "),
            }
        })?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    Ok(codes)
}

/// Filename list for a resolved environment code, in declared order.
///
/// # Panics
///
/// Panics on a code that did not come from [`resolve_environments`] or
/// [`environment_codes`].
pub fn files_for_environment(code: &str) -> &'static [&'static str] {
    ENVIRONMENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, files)| *files)
        .unwrap_or_else(|| panic!("files_for_environment called with unresolved code {code:?}"))
}
