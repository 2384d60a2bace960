use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::regions::models::{Region, RegionFilter};
use crate::features::regions::services::{NearbyRegion, ProximityQuery};
use crate::shared::constants::DEFAULT_RADIUS_KM;
use crate::shared::geo::ratio;

/// Query parameters for listing regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionListQuery {
    /// Month in YYYY-MM format
    #[serde(alias = "month_year")]
    #[param(example = "2025-08")]
    pub month_year: Option<String>,

    /// Prevalent crime type (exact match)
    #[serde(alias = "crime_type")]
    #[param(example = "Geweld")]
    pub crime_type: Option<String>,
}

impl RegionListQuery {
    pub fn into_filter(self) -> RegionFilter {
        RegionFilter::new(self.month_year, self.crime_type)
    }
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

/// Query parameters for the proximity lookup
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct NearbyRegionsQuery {
    /// Latitude of the query point
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "lat must be a number between -90 and 90"
    ))]
    #[param(example = 53.2192)]
    pub lat: f64,

    /// Longitude of the query point
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "lon must be a number between -180 and 180"
    ))]
    #[param(example = 6.568)]
    pub lon: f64,

    /// Search radius in kilometres (default: 5)
    #[serde(default = "default_radius_km", alias = "radius_km")]
    #[validate(range(exclusive_min = 0.0, message = "radiusKm must be a positive number"))]
    #[param(example = 3.0)]
    pub radius_km: f64,

    /// Month in YYYY-MM format
    #[serde(alias = "month_year")]
    pub month_year: Option<String>,

    /// Prevalent crime type (exact match)
    #[serde(alias = "crime_type")]
    pub crime_type: Option<String>,
}

impl NearbyRegionsQuery {
    pub fn into_proximity_query(self) -> ProximityQuery {
        ProximityQuery {
            lat: self.lat,
            lon: self.lon,
            radius_km: self.radius_km,
            filter: RegionFilter::new(self.month_year, self.crime_type),
        }
    }
}

/// Response DTO for region statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: Uuid,
    pub name: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub crime_level: i32,
    pub incident_count: i32,
    pub e33_count: i32,
    /// `e33Count / incidentCount`, 3 decimals, 0 when there are no incidents
    pub e33_percent: f64,
    pub month_year: String,
    pub prevalent_crime_type: String,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            e33_percent: ratio(region.e33_count, region.incident_count),
            id: region.id,
            name: region.name,
            center_lat: region.center_lat,
            center_lon: region.center_lon,
            crime_level: region.crime_level,
            incident_count: region.incident_count,
            e33_count: region.e33_count,
            month_year: region.month_year,
            prevalent_crime_type: region.prevalent_crime_type,
        }
    }
}

/// Region returned by the proximity lookup, with its distance to the query point
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NearbyRegionDto {
    #[serde(flatten)]
    pub region: RegionResponseDto,
    pub distance_km: f64,
}

impl From<NearbyRegion> for NearbyRegionDto {
    fn from(nearby: NearbyRegion) -> Self {
        Self {
            region: nearby.region.into(),
            distance_km: nearby.distance_km,
        }
    }
}
