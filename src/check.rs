use log::info;
use serde_json::Value;

use crate::error::{MalformedConfigError, RegistryLookupError};
use crate::family::ByFamily;
use crate::junos::{self, BgpConfig};
use crate::models::{FamilyReconciliation, LimitMap, RemediationCommand};
use crate::reconcile::{build_keys, reconcile};
use crate::registry::{sweep, Registry};
use crate::remediation::generate;

/// Everything one reconciliation run produced
#[derive(Debug)]
pub struct Report {
    pub configured: ByFamily<LimitMap>,
    pub announced: ByFamily<LimitMap>,
    pub outcome: ByFamily<FamilyReconciliation>,
    pub commands: ByFamily<Vec<RemediationCommand>>,
    // ASNs whose registry lookup failed
    pub failures: Vec<RegistryLookupError>,
}

/// Reconcile a configuration document against the registry
///
/// Only a malformed document aborts the run; registry failures are recorded
/// in the report.
pub async fn check<R>(
    document: &Value,
    registry: &R,
    concurrency: usize,
) -> Result<Report, MalformedConfigError>
where
    R: Registry + ?Sized,
{
    let config = BgpConfig::from_value(document)?;
    let configured = junos::extract(&config);
    let asns = build_keys(&configured.v4, &configured.v6);
    info!(
        "{} groups, {} IPv4 and {} IPv6 limits across {} ASNs",
        config.groups.len(),
        configured.v4.len(),
        configured.v6.len(),
        asns.len()
    );

    let sweep = sweep(registry, &asns, concurrency).await;
    let outcome = reconcile(&configured, &sweep.announced);
    let commands = generate(&outcome, &config);
    info!(
        "{} IPv4 and {} IPv6 limits need updating",
        commands.v4.len(),
        commands.v6.len()
    );

    Ok(Report {
        configured,
        announced: sweep.announced,
        outcome,
        commands,
        failures: sweep.failures,
    })
}
