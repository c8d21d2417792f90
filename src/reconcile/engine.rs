use log::{debug, warn};

use crate::family::{ByFamily, Family};
use crate::models::{
    ConfiguredPeer, FamilyReconciliation, LimitMap, ReconciliationResult, Status,
};

/// Compare configured limits against registry values for both families
pub fn reconcile(
    configured: &ByFamily<LimitMap>,
    announced: &ByFamily<LimitMap>,
) -> ByFamily<FamilyReconciliation> {
    ByFamily::new(
        reconcile_family(Family::V4, &configured.v4, &announced.v4),
        reconcile_family(Family::V6, &configured.v6, &announced.v6),
    )
}

/// Classify every announced ASN that is also configured for `family`
///
/// Results follow the iteration order of `announced`. Configured ASNs with no
/// announced value are reported as unresolved rather than as results.
pub fn reconcile_family(
    family: Family,
    configured: &LimitMap,
    announced: &LimitMap,
) -> FamilyReconciliation {
    let results: Vec<_> = announced
        .iter()
        .filter_map(|(asn, announced_max)| {
            let configured_max = *configured.get(asn)?;
            let status = classify(configured_max, *announced_max);
            debug!(
                "AS{} {}: configured={} registry={} ({:?})",
                asn, family, configured_max, announced_max, status
            );
            Some(ReconciliationResult {
                asn: *asn,
                family,
                configured_max,
                announced_max: *announced_max,
                status,
            })
        })
        .collect();

    let unresolved: Vec<_> = configured
        .iter()
        .filter(|(asn, _)| !announced.contains_key(*asn))
        .map(|(asn, max)| ConfiguredPeer {
            asn: *asn,
            family,
            max_prefix: *max,
        })
        .collect();
    for peer in &unresolved {
        warn!(
            "AS{} {}: no registry value, configured limit {} could not be verified",
            peer.asn, family, peer.max_prefix
        );
    }

    FamilyReconciliation {
        results,
        unresolved,
    }
}

fn classify(configured_max: u32, announced_max: u32) -> Status {
    if announced_max == 0 {
        Status::NotApplicable
    } else if announced_max != configured_max {
        Status::Mismatch
    } else {
        Status::Match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(entries: &[(u32, u32)]) -> LimitMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_mismatch() {
        let outcome = reconcile_family(Family::V4, &limits(&[(65001, 500)]), &limits(&[(65001, 1000)]));
        assert_eq!(
            outcome.results,
            vec![ReconciliationResult {
                asn: 65001,
                family: Family::V4,
                configured_max: 500,
                announced_max: 1000,
                status: Status::Mismatch,
            }]
        );
        assert!(outcome.unresolved.is_empty());
    }

    #[test]
    fn test_match() {
        let outcome = reconcile_family(Family::V4, &limits(&[(65002, 200)]), &limits(&[(65002, 200)]));
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].status, Status::Match);
    }

    #[test]
    fn test_registry_without_data() {
        let outcome = reconcile_family(Family::V6, &limits(&[(65003, 50)]), &limits(&[(65003, 0)]));
        assert_eq!(outcome.results[0].status, Status::NotApplicable);

        // Even when the configured limit is also zero
        let outcome = reconcile_family(Family::V6, &limits(&[(65003, 0)]), &limits(&[(65003, 0)]));
        assert_eq!(outcome.results[0].status, Status::NotApplicable);
    }

    #[test]
    fn test_missing_from_registry() {
        let outcome = reconcile_family(Family::V4, &limits(&[(65004, 300)]), &LimitMap::new());
        assert!(outcome.results.is_empty());
        assert_eq!(
            outcome.unresolved,
            vec![ConfiguredPeer {
                asn: 65004,
                family: Family::V4,
                max_prefix: 300
            }]
        );
    }

    #[test]
    fn test_announced_but_not_configured() {
        // Registry values are fetched for both families even if only one is configured
        let outcome = reconcile(
            &ByFamily::new(limits(&[(65001, 500)]), LimitMap::new()),
            &ByFamily::new(limits(&[(65001, 500)]), limits(&[(65001, 40)])),
        );
        assert_eq!(outcome.v4.results.len(), 1);
        assert!(outcome.v6.results.is_empty());
        assert!(outcome.v6.unresolved.is_empty());
    }

    #[test]
    fn test_results_follow_announced_order() {
        let outcome = reconcile_family(
            Family::V4,
            &limits(&[(65010, 1), (100, 1), (65001, 1)]),
            &limits(&[(65001, 2), (100, 1), (65010, 0)]),
        );
        let asns: Vec<_> = outcome.results.iter().map(|r| r.asn).collect();
        assert_eq!(asns, vec![100, 65001, 65010]);
    }
}
