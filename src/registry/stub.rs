use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Registry;
use crate::error::RegistryLookupError;
use crate::models::AnnouncedLimits;

/// In-memory registry; unknown ASNs are not found
pub(crate) struct StaticRegistry {
    records: HashMap<u32, AnnouncedLimits>,
    pub(crate) calls: AtomicUsize,
}

impl StaticRegistry {
    /// (asn, v4, v6) records
    pub(crate) fn new(records: &[(u32, u32, u32)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(asn, v4, v6)| (*asn, AnnouncedLimits { v4: *v4, v6: *v6 }))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Registry for StaticRegistry {
    async fn lookup(&self, asn: u32) -> Result<AnnouncedLimits, RegistryLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(&asn)
            .copied()
            .ok_or(RegistryLookupError::NotFound(asn))
    }
}
