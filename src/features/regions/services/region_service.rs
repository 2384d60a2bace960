use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionFilter};
use crate::features::regions::repositories::RegionRepository;
use crate::features::regions::services::proximity::{select_nearby, NearbySelection};
use crate::shared::geo::{is_valid_latitude, is_valid_longitude};

/// Parameters of a proximity lookup
#[derive(Debug, Clone)]
pub struct ProximityQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius_km: f64,
    pub filter: RegionFilter,
}

pub const INVALID_LAT: &str = "lat must be a number between -90 and 90";
pub const INVALID_LON: &str = "lon must be a number between -180 and 180";
pub const INVALID_RADIUS: &str = "radiusKm must be a positive number";

impl ProximityQuery {
    /// Range checks that also reject NaN and infinities
    fn validate(&self) -> Result<()> {
        let mut messages = Vec::new();
        if !is_valid_latitude(self.lat) {
            messages.push(INVALID_LAT);
        }
        if !is_valid_longitude(self.lon) {
            messages.push(INVALID_LON);
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            messages.push(INVALID_RADIUS);
        }

        if messages.is_empty() {
            Ok(())
        } else {
            messages.sort();
            Err(AppError::Validation(messages.join("; ")))
        }
    }
}

/// Service for region statistics and the proximity query
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>) -> Self {
        Self { repository }
    }

    /// List regions matching the month/category filter
    pub async fn list(&self, filter: &RegionFilter) -> Result<Vec<Region>> {
        self.repository.list(filter).await
    }

    /// Regions within `radius_km` of the query point, or the nearest ones if none are
    pub async fn find_nearby(&self, query: &ProximityQuery) -> Result<NearbySelection> {
        query.validate()?;

        let candidates = self.repository.list(&query.filter).await?;
        let candidate_count = candidates.len();

        let selection = select_nearby(candidates, query.lat, query.lon, query.radius_km);

        tracing::debug!(
            "Nearby regions for ({}, {}) r={}km: {} of {} candidates, fallback={}",
            query.lat,
            query.lon,
            query.radius_km,
            selection.regions.len(),
            candidate_count,
            selection.fallback
        );

        Ok(selection)
    }
}
