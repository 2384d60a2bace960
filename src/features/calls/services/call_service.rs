use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::calls::models::{Call, CallFilter};
use crate::features::calls::repositories::CallRepository;

/// Service for reading incident calls
pub struct CallService {
    repository: Arc<dyn CallRepository>,
}

impl CallService {
    pub fn new(repository: Arc<dyn CallRepository>) -> Self {
        Self { repository }
    }

    /// List calls matching the filter
    pub async fn list(&self, filter: &CallFilter) -> Result<Vec<Call>> {
        let calls = self.repository.list(filter).await?;
        tracing::debug!("Listed {} calls for {:?}", calls.len(), filter);
        Ok(calls)
    }

    /// Get a call by its id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Call> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Call with id '{}' not found", id)))
    }
}
