use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::calls::models::{Call, CallFilter};

const CALL_COLUMNS: &str = r#"
    SELECT id, call_log, address, region_name, month_year, crime_type,
           is_e33, lat, lon, created_at
    FROM calls
"#;

/// Read access to the calls table
#[async_trait]
pub trait CallRepository: Send + Sync {
    async fn list(&self, filter: &CallFilter) -> Result<Vec<Call>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Call>>;
}

/// Postgres-backed call store
pub struct PgCallRepository {
    pool: PgPool,
}

impl PgCallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn build_list_query(filter: &CallFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(CALL_COLUMNS);
    query.push(" WHERE 1 = 1");

    if let Some(month_year) = &filter.month_year {
        query.push(" AND month_year = ").push_bind(month_year);
    }
    if let Some(crime_type) = &filter.crime_type {
        query.push(" AND crime_type = ").push_bind(crime_type);
    }
    if let Some(region_name) = &filter.region_name {
        query.push(" AND region_name = ").push_bind(region_name);
    }
    if let Some(is_e33) = filter.is_e33 {
        query.push(" AND is_e33 = ").push_bind(is_e33);
    }

    query.push(" ORDER BY created_at ASC, id ASC");
    query
}

#[async_trait]
impl CallRepository for PgCallRepository {
    async fn list(&self, filter: &CallFilter) -> Result<Vec<Call>> {
        let mut query = build_list_query(filter);
        let calls = query
            .build_query_as::<Call>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch calls ({:?}): {:?}", filter, e);
                AppError::Database(e)
            })?;

        Ok(calls)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Call>> {
        let mut query = QueryBuilder::<Postgres>::new(CALL_COLUMNS);
        query.push(" WHERE id = ").push_bind(id);

        query
            .build_query_as::<Call>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch call {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
