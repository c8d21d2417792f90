use log::{debug, warn};

use super::BgpConfig;
use crate::family::{ByFamily, Family};
use crate::models::LimitMap;

/// Configured max-prefix limits per family, keyed by peer ASN
///
/// Groups are visited in document order, so a later group with the same
/// peer-as and family replaces an earlier one. Groups without a family
/// block (or without a prefix-limit for a family) contribute nothing.
pub fn extract(config: &BgpConfig) -> ByFamily<LimitMap> {
    let mut limits: ByFamily<LimitMap> = ByFamily::default();
    for group in &config.groups {
        if group.families.is_empty() {
            debug!("Group {} (AS{}) has no family options", group.name, group.peer_as);
            continue;
        }
        for family in Family::ALL.iter().copied() {
            if !group.declares(family) {
                continue;
            }
            match group.limit(family) {
                Some(maximum) => {
                    if let Some(previous) = limits.get_mut(family).insert(group.peer_as, maximum) {
                        warn!(
                            "AS{} {} limit in group {} replaces earlier value {}",
                            group.peer_as, family, group.name, previous
                        );
                    }
                }
                None => debug!(
                    "Group {} declares {} without a prefix-limit",
                    group.name,
                    family.junos_keyword()
                ),
            }
        }
    }
    limits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::junos::{BgpGroup, FamilyLimit};

    fn group(name: &str, peer_as: u32, families: &[(Family, Option<u32>)]) -> BgpGroup {
        BgpGroup {
            name: name.to_string(),
            peer_as,
            families: families
                .iter()
                .map(|(family, maximum)| FamilyLimit {
                    family: *family,
                    maximum: *maximum,
                })
                .collect(),
        }
    }

    #[test]
    fn test_extract_per_family() {
        let config = BgpConfig {
            groups: vec![
                group("PEER-A", 65001, &[(Family::V4, Some(500))]),
                group("PEER-A-V6", 65001, &[(Family::V6, Some(50))]),
                group("TRANSIT", 65010, &[]),
                group("IX", 65020, &[(Family::V4, None)]),
            ],
        };
        let limits = extract(&config);
        assert_eq!(limits.v4.len(), 1);
        assert_eq!(limits.v4.get(&65001), Some(&500));
        assert_eq!(limits.v6.get(&65001), Some(&50));
        assert!(!limits.v4.contains_key(&65010));
        assert!(!limits.v4.contains_key(&65020));
    }

    #[test]
    fn test_extract_last_wins() {
        let config = BgpConfig {
            groups: vec![
                group("FIRST", 65001, &[(Family::V4, Some(100))]),
                group("SECOND", 65001, &[(Family::V4, Some(200))]),
            ],
        };
        let limits = extract(&config);
        assert_eq!(limits.v4.len(), 1);
        assert_eq!(limits.v4.get(&65001), Some(&200));
    }

    #[test]
    fn test_extract_dual_family_group() {
        let config = BgpConfig {
            groups: vec![group(
                "DUAL",
                65030,
                &[(Family::V4, Some(1000)), (Family::V6, Some(100))],
            )],
        };
        let limits = extract(&config);
        assert_eq!(limits.v4.get(&65030), Some(&1000));
        assert_eq!(limits.v6.get(&65030), Some(&100));
    }
}
