use log::{debug, warn};

use crate::error::GroupResolutionGap;
use crate::family::{ByFamily, Family};
use crate::junos::BgpConfig;
use crate::models::{FamilyReconciliation, ReconciliationResult, RemediationCommand, Status};

pub fn set_command(group_name: &str, family: Family, maximum: u32) -> String {
    format!(
        "set protocols bgp group {} family {} unicast prefix-limit maximum {}",
        group_name,
        family.junos_keyword(),
        maximum
    )
}

/// Junos `set` commands that align each mismatched limit with the registry
///
/// Commands keep the order of the mismatched results. A mismatch whose ASN
/// no longer maps to a group for its family is skipped.
pub fn generate(
    outcome: &ByFamily<FamilyReconciliation>,
    config: &BgpConfig,
) -> ByFamily<Vec<RemediationCommand>> {
    ByFamily::new(
        generate_family(&outcome.v4.results, config),
        generate_family(&outcome.v6.results, config),
    )
}

pub fn generate_family(
    results: &[ReconciliationResult],
    config: &BgpConfig,
) -> Vec<RemediationCommand> {
    let mut commands = Vec::new();
    for result in results.iter().filter(|r| r.status == Status::Mismatch) {
        match resolve_group(config, result.asn, result.family) {
            Ok(group_name) => {
                let text = set_command(group_name, result.family, result.announced_max);
                debug!("{}", text);
                commands.push(RemediationCommand {
                    group_name: group_name.to_string(),
                    family: result.family,
                    new_limit: result.announced_max,
                    text,
                });
            }
            Err(gap) => warn!("Skipping remediation: {}", gap),
        }
    }
    commands
}

/// Name of the group configuring `family` for `asn`
///
/// When several groups qualify the last one wins, matching how limits are
/// extracted from the same document.
fn resolve_group(
    config: &BgpConfig,
    asn: u32,
    family: Family,
) -> Result<&str, GroupResolutionGap> {
    config
        .groups
        .iter()
        .rev()
        .find(|g| g.peer_as == asn && g.limit(family).is_some())
        .map(|g| g.name.as_str())
        .ok_or(GroupResolutionGap { asn, family })
}
