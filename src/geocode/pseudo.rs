use super::{ResolvedLocation, Resolver};
use crate::core::geo::LatLng;
use async_trait::async_trait;

/// Derives a reproducible coordinate from a string hash of the input text.
///
/// The hash is folded with Euclidean remainders so the result stays inside
/// lat [-70, 70) and lng [-170, 170) for every input, including those that
/// hash negative. Same input, same output.
pub fn pseudo_geocode(text: &str) -> LatLng {
    let mut hash: i32 = 0;
    for byte in text.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(byte as i32);
    }

    let lat = hash.rem_euclid(14_000) as f64 / 100.0 - 70.0;
    let lng = (hash / 14_000).rem_euclid(34_000) as f64 / 100.0 - 170.0;
    LatLng::new(lat, lng)
}

/// Terminal tier: always produces a coordinate, real geocoding unavailable
pub struct PseudoResolver;

#[async_trait]
impl Resolver for PseudoResolver {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    async fn resolve(&self, query: &str) -> Option<ResolvedLocation> {
        Some(ResolvedLocation::new(pseudo_geocode(query)))
    }

    // Synthetic results are recomputed, never memoized
    fn cacheable(&self) -> bool {
        false
    }
}
