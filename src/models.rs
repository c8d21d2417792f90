use std::collections::BTreeMap;
use std::fmt;

use crate::family::Family;

/// ASN -> max prefix count, for a single family
pub type LimitMap = BTreeMap<u32, u32>;

/// Max-prefix limit configured on the router for a peer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfiguredPeer {
    pub asn: u32,
    pub family: Family,
    pub max_prefix: u32,
}

/// Max-prefix count published by the registry for a peer (0 = no data)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnouncedPeer {
    pub asn: u32,
    pub family: Family,
    pub max_prefix: u32,
}

/// Both families' registry values for one ASN
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnnouncedLimits {
    pub v4: u32,
    pub v6: u32,
}

impl AnnouncedLimits {
    pub fn peers(&self, asn: u32) -> [AnnouncedPeer; 2] {
        [
            AnnouncedPeer {
                asn,
                family: Family::V4,
                max_prefix: self.v4,
            },
            AnnouncedPeer {
                asn,
                family: Family::V6,
                max_prefix: self.v6,
            },
        ]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Match,
    Mismatch,
    // Registry carries no public data for this peer
    NotApplicable,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let word = match self {
            Status::Match => "",
            Status::Mismatch => "YES",
            Status::NotApplicable => "n/a",
        };
        write!(f, "{}", word)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReconciliationResult {
    pub asn: u32,
    pub family: Family,
    pub configured_max: u32,
    pub announced_max: u32,
    pub status: Status,
}

/// Outcome of reconciling one address family
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamilyReconciliation {
    pub results: Vec<ReconciliationResult>,
    // Configured ASNs the registry returned no value for
    pub unresolved: Vec<ConfiguredPeer>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemediationCommand {
    pub group_name: String,
    pub family: Family,
    pub new_limit: u32,
    pub text: String,
}

impl fmt::Display for RemediationCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
