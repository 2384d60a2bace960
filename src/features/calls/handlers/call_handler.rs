use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::calls::dtos::{CallListQuery, CallResponseDto};
use crate::features::calls::services::CallService;
use crate::shared::types::{ApiResponse, Meta};

/// List incident calls
#[utoipa::path(
    get,
    path = "/api/calls",
    params(CallListQuery),
    responses(
        (status = 200, description = "List of calls", body = ApiResponse<Vec<CallResponseDto>>),
        (status = 400, description = "Unparsable query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "calls"
)]
pub async fn list_calls(
    State(service): State<Arc<CallService>>,
    AppQuery(query): AppQuery<CallListQuery>,
) -> Result<Json<ApiResponse<Vec<CallResponseDto>>>> {
    let filter = query.into_filter();
    let calls = service.list(&filter).await?;
    let dtos: Vec<CallResponseDto> = calls.into_iter().map(Into::into).collect();
    let meta = Meta::of(&dtos);
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a call by id
#[utoipa::path(
    get,
    path = "/api/calls/{id}",
    params(
        ("id" = Uuid, Path, description = "Call ID")
    ),
    responses(
        (status = 200, description = "Call details", body = ApiResponse<CallResponseDto>),
        (status = 404, description = "Call not found")
    ),
    tag = "calls"
)]
pub async fn get_call(
    State(service): State<Arc<CallService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CallResponseDto>>> {
    let call = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(call.into()), None, None)))
}
