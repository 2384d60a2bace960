//! In-memory repositories and fixtures for handler and service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::calls::models::{Call, CallFilter};
use crate::features::calls::repositories::CallRepository;
use crate::features::regions::models::{Region, RegionFilter};
use crate::features::regions::repositories::RegionRepository;

fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_751_328_000, 0).unwrap()
}

/// A region at the given centroid with otherwise neutral statistics
pub fn region_at(name: &str, lat: f64, lon: f64) -> Region {
    Region {
        id: Uuid::new_v4(),
        name: name.to_string(),
        center_lat: lat,
        center_lon: lon,
        crime_level: 3,
        incident_count: 20,
        e33_count: 2,
        month_year: "2025-08".to_string(),
        prevalent_crime_type: "Overlast".to_string(),
        created_at: fixed_timestamp(),
    }
}

pub fn region_with_counts(incident_count: i32, e33_count: i32) -> Region {
    Region {
        incident_count,
        e33_count,
        ..region_at("Binnenstad", 53.2194, 6.5665)
    }
}

/// Eight Groningen neighbourhoods over two months
pub fn groningen_regions() -> Vec<Region> {
    let neighbourhoods = [
        ("Binnenstad", 53.2194, 6.5665, 8, "Geweld"),
        ("Oosterpoort", 53.2130, 6.5770, 7, "Overlast"),
        ("Oosterparkwijk", 53.2250, 6.5860, 8, "Drugs"),
        ("Korrewegwijk", 53.2330, 6.5710, 7, "Diefstal"),
        ("Selwerd", 53.2365, 6.5530, 6, "Overlast"),
        ("Vinkhuizen", 53.2275, 6.5250, 5, "Diefstal"),
        ("Beijum", 53.2500, 6.6000, 7, "Drugs"),
        ("Hoogkerk", 53.2120, 6.4950, 4, "Vermissing"),
    ];

    let mut regions = Vec::new();
    for (month_index, month_year) in ["2025-07", "2025-08"].iter().enumerate() {
        for (i, (name, lat, lon, level, crime)) in neighbourhoods.iter().enumerate() {
            let incident_count = 40 + (i as i32) * 10 + (month_index as i32) * 5;
            regions.push(Region {
                id: Uuid::from_u128(((month_index as u128) << 8) | (i as u128 + 1)),
                name: name.to_string(),
                center_lat: *lat,
                center_lon: *lon,
                crime_level: *level,
                incident_count,
                e33_count: incident_count / 10,
                month_year: month_year.to_string(),
                prevalent_crime_type: crime.to_string(),
                created_at: fixed_timestamp(),
            });
        }
    }
    regions
}

/// Calls with stable ids so separate fixture calls agree
pub fn sample_calls() -> Vec<Call> {
    let rows = [
        (
            "Melding van vechtpartij bij Grote Markt 12. Verdachte is agressief.",
            "Grote Markt 12, Groningen",
            "Binnenstad",
            "2025-08",
            "Geweld",
            false,
            Some((53.2190, 6.5670)),
        ),
        (
            "Buurman hoort al uren geschreeuw. Persoon lijkt verward en praat tegen zichzelf.",
            "Korreweg 80, Groningen",
            "Korrewegwijk",
            "2025-08",
            "Overlast",
            true,
            Some((53.2331, 6.5712)),
        ),
        (
            "Fiets gestolen nabij station.",
            "Stationsplein 1, Groningen",
            "Oosterpoort",
            "2025-07",
            "Diefstal",
            false,
            None,
        ),
        (
            "Meerdere personen ruzie op straat. Slachtoffer lijkt gewond.",
            "Oosterweg 3, Groningen",
            "Oosterparkwijk",
            "2025-08",
            "Geweld",
            true,
            Some((53.2248, 6.5858)),
        ),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(i, (call_log, address, region, month, crime, is_e33, coords))| Call {
                id: Uuid::from_u128(0xca11_0000 + i as u128),
                call_log: call_log.to_string(),
                address: address.to_string(),
                region_name: Some(region.to_string()),
                month_year: Some(month.to_string()),
                crime_type: Some(crime.to_string()),
                is_e33: *is_e33,
                lat: coords.map(|c| c.0),
                lon: coords.map(|c| c.1),
                created_at: fixed_timestamp(),
            },
        )
        .collect()
}

fn matches_exact(wanted: &Option<String>, actual: Option<&str>) -> bool {
    wanted.as_deref().map_or(true, |w| Some(w) == actual)
}

pub struct InMemoryRegionRepository {
    regions: Vec<Region>,
}

impl InMemoryRegionRepository {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn list(&self, filter: &RegionFilter) -> Result<Vec<Region>> {
        Ok(self
            .regions
            .iter()
            .filter(|r| {
                matches_exact(&filter.month_year, Some(r.month_year.as_str()))
                    && matches_exact(&filter.crime_type, Some(r.prevalent_crime_type.as_str()))
            })
            .cloned()
            .collect())
    }
}

pub struct InMemoryCallRepository {
    calls: Vec<Call>,
}

impl InMemoryCallRepository {
    pub fn new(calls: Vec<Call>) -> Self {
        Self { calls }
    }
}

#[async_trait]
impl CallRepository for InMemoryCallRepository {
    async fn list(&self, filter: &CallFilter) -> Result<Vec<Call>> {
        Ok(self
            .calls
            .iter()
            .filter(|c| {
                matches_exact(&filter.month_year, c.month_year.as_deref())
                    && matches_exact(&filter.crime_type, c.crime_type.as_deref())
                    && matches_exact(&filter.region_name, c.region_name.as_deref())
                    && filter.is_e33.map_or(true, |flag| flag == c.is_e33)
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Call>> {
        Ok(self.calls.iter().find(|c| c.id == id).cloned())
    }
}

/// Repository whose every read fails like a dropped database connection
pub struct FailingRepository;

#[async_trait]
impl RegionRepository for FailingRepository {
    async fn list(&self, _filter: &RegionFilter) -> Result<Vec<Region>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl CallRepository for FailingRepository {
    async fn list(&self, _filter: &CallFilter) -> Result<Vec<Call>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Call>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
