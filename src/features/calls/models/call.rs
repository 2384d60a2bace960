use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::validation::normalize_filter;

/// A single logged incident call. Never updated after insert.
#[derive(Debug, Clone, FromRow)]
pub struct Call {
    pub id: Uuid,
    /// Free-text narrative of the call
    pub call_log: String,
    pub address: String,
    pub region_name: Option<String>,
    pub month_year: Option<String>,
    pub crime_type: Option<String>,
    /// Mental-health related (E33) incident
    pub is_e33: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFilter {
    pub month_year: Option<String>,
    pub crime_type: Option<String>,
    pub region_name: Option<String>,
    pub is_e33: Option<bool>,
}

impl CallFilter {
    /// Build a filter from raw request values; blank values mean "no constraint"
    pub fn new(
        month_year: Option<String>,
        crime_type: Option<String>,
        region_name: Option<String>,
        is_e33: Option<bool>,
    ) -> Self {
        Self {
            month_year: normalize_filter(month_year),
            crime_type: normalize_filter(crime_type),
            region_name: normalize_filter(region_name),
            is_e33,
        }
    }
}
