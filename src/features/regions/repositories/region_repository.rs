use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionFilter};

/// Read access to the regions table
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// All regions matching `filter`, in storage order
    async fn list(&self, filter: &RegionFilter) -> Result<Vec<Region>>;
}

/// Postgres-backed region store
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the filtered SELECT; only present filters are bound
fn build_list_query(filter: &RegionFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(
        r#"
        SELECT id, name, center_lat, center_lon, crime_level, incident_count,
               e33_count, month_year, prevalent_crime_type, created_at
        FROM regions
        WHERE 1 = 1
        "#,
    );

    if let Some(month_year) = &filter.month_year {
        query.push(" AND month_year = ").push_bind(month_year);
    }
    if let Some(crime_type) = &filter.crime_type {
        query.push(" AND prevalent_crime_type = ").push_bind(crime_type);
    }

    query.push(" ORDER BY created_at ASC, id ASC");
    query
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn list(&self, filter: &RegionFilter) -> Result<Vec<Region>> {
        let mut query = build_list_query(filter);
        let regions = query
            .build_query_as::<Region>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch regions ({:?}): {:?}", filter, e);
                AppError::Database(e)
            })?;

        Ok(regions)
    }
}
