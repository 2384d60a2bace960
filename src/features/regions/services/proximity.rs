//! Radius selection with the nearest-N fallback.

use crate::features::regions::models::Region;
use crate::shared::constants::FALLBACK_NEAREST_COUNT;
use crate::shared::geo::haversine_km;

/// A region paired with its distance to the query point
#[derive(Debug, Clone)]
pub struct NearbyRegion {
    pub region: Region,
    pub distance_km: f64,
}

#[derive(Debug, Clone)]
pub struct NearbySelection {
    pub regions: Vec<NearbyRegion>,
    /// Set when nothing was inside the radius and the nearest regions were substituted
    pub fallback: bool,
}

/// Pick the regions within `radius_km` of `(lat, lon)` out of already-filtered candidates.
///
/// When at least one candidate is in range, every in-range candidate is
/// returned in the order given. Otherwise the `FALLBACK_NEAREST_COUNT`
/// closest candidates are returned, nearest first.
pub fn select_nearby(candidates: Vec<Region>, lat: f64, lon: f64, radius_km: f64) -> NearbySelection {
    let mut measured: Vec<NearbyRegion> = candidates
        .into_iter()
        .map(|region| {
            let distance_km = haversine_km(lat, lon, region.center_lat, region.center_lon);
            NearbyRegion {
                region,
                distance_km,
            }
        })
        .collect();

    if measured.iter().any(|r| r.distance_km <= radius_km) {
        measured.retain(|r| r.distance_km <= radius_km);
        return NearbySelection {
            regions: measured,
            fallback: false,
        };
    }

    // Stable sort: equidistant regions keep storage order
    measured.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    measured.truncate(FALLBACK_NEAREST_COUNT);

    NearbySelection {
        fallback: !measured.is_empty(),
        regions: measured,
    }
}
