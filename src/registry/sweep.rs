use futures::stream::{self, StreamExt};
use log::{info, warn};

use super::Registry;
use crate::error::RegistryLookupError;
use crate::family::ByFamily;
use crate::models::LimitMap;

/// Registry values gathered for a set of ASNs
#[derive(Debug, Default)]
pub struct Sweep {
    pub announced: ByFamily<LimitMap>,
    pub failures: Vec<RegistryLookupError>,
}

/// Look up every ASN, at most `concurrency` requests in flight
///
/// A failed lookup only removes that ASN from `announced`; the rest of the
/// sweep carries on.
pub async fn sweep<R>(registry: &R, asns: &[u32], concurrency: usize) -> Sweep
where
    R: Registry + ?Sized,
{
    let lookups: Vec<_> = stream::iter(asns.iter().copied())
        .map(|asn| async move { (asn, registry.lookup(asn).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut sweep = Sweep::default();
    for (asn, lookup) in lookups {
        match lookup {
            Ok(limits) => {
                for peer in limits.peers(asn).iter() {
                    sweep
                        .announced
                        .get_mut(peer.family)
                        .insert(peer.asn, peer.max_prefix);
                }
            }
            Err(err) => {
                warn!("Excluded from this run: {}", err);
                sweep.failures.push(err);
            }
        }
    }
    info!(
        "Registry returned {} of {} ASNs",
        asns.len() - sweep.failures.len(),
        asns.len()
    );
    sweep
}
