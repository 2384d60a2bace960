use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::calls::models::{Call, CallFilter};

/// Query parameters for listing calls
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CallListQuery {
    /// Month in YYYY-MM format
    #[serde(alias = "month_year")]
    #[param(example = "2024-06")]
    pub month_year: Option<String>,

    /// Crime category (exact match)
    #[serde(alias = "crime_type")]
    #[param(example = "Overlast")]
    pub crime_type: Option<String>,

    /// Neighbourhood the call was attributed to
    #[serde(alias = "region_name")]
    pub region_name: Option<String>,

    /// Only E33 (true) or only non-E33 (false) calls
    #[serde(alias = "is_e33")]
    pub is_e33: Option<bool>,
}

impl CallListQuery {
    pub fn into_filter(self) -> CallFilter {
        CallFilter::new(
            self.month_year,
            self.crime_type,
            self.region_name,
            self.is_e33,
        )
    }
}

/// Response DTO for call data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallResponseDto {
    pub id: Uuid,
    pub call_log: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crime_type: Option<String>,
    pub is_e33: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<Call> for CallResponseDto {
    fn from(call: Call) -> Self {
        Self {
            id: call.id,
            call_log: call.call_log,
            address: call.address,
            region_name: call.region_name,
            month_year: call.month_year,
            crime_type: call.crime_type,
            is_e33: call.is_e33,
            lat: call.lat,
            lon: call.lon,
            created_at: call.created_at,
        }
    }
}
