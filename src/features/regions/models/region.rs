use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::validation::normalize_filter;

/// Aggregated incident statistics for one neighbourhood during one month
///
/// `(name, month_year)` is not unique; overlapping dataset variants are
/// stored and returned side by side.
#[derive(Debug, Clone, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub name: String,
    pub center_lat: f64,
    pub center_lon: f64,
    /// Severity level (1 = calm)
    pub crime_level: i32,
    pub incident_count: i32,
    /// Incidents flagged as E33 (mental-health related)
    pub e33_count: i32,
    /// e.g. "2025-07"
    pub month_year: String,
    pub prevalent_crime_type: String,
    pub created_at: DateTime<Utc>,
}

/// Exact-match filters applied to regions before any distance computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    pub month_year: Option<String>,
    pub crime_type: Option<String>,
}

impl RegionFilter {
    /// Build a filter from raw request values, dropping blanks
    ///
    /// Any other value is matched verbatim, so an unknown month simply matches nothing.
    pub fn new(month_year: Option<String>, crime_type: Option<String>) -> Self {
        Self {
            month_year: normalize_filter(month_year),
            crime_type: normalize_filter(crime_type),
        }
    }
}
