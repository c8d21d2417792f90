mod peeringdb;
mod sweep;
#[cfg(test)]
pub(crate) mod stub;

pub use peeringdb::PeeringDb;
pub use sweep::{sweep, Sweep};

use crate::error::RegistryLookupError;
use crate::models::AnnouncedLimits;

/// Source of networks' self-declared max-prefix counts
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Both families' values for `asn`
    ///
    /// An ASN with no record is an error, distinct from a record with zero values.
    async fn lookup(&self, asn: u32) -> Result<AnnouncedLimits, RegistryLookupError>;
}
