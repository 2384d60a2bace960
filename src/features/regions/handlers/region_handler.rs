use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{
    NearbyRegionDto, NearbyRegionsQuery, RegionListQuery, RegionResponseDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::validation_messages;

/// List region statistics
#[utoipa::path(
    get,
    path = "/api/regions",
    params(RegionListQuery),
    responses(
        (status = 200, description = "List of regions", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Unparsable query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionListQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let filter = query.into_filter();
    let regions = service.list(&filter).await?;
    let dtos: Vec<RegionResponseDto> = regions.into_iter().map(Into::into).collect();
    let meta = Meta::of(&dtos);
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Regions around a point
///
/// Returns every region within `radiusKm`. If none is in range, the nearest
/// six regions or fewer (after filtering) are returned instead, sorted by distance.
#[utoipa::path(
    get,
    path = "/api/regions/near",
    params(NearbyRegionsQuery),
    responses(
        (status = 200, description = "Regions near the point", body = ApiResponse<Vec<NearbyRegionDto>>),
        (status = 400, description = "Missing or invalid point or radius"),
        (status = 500, description = "Internal server error")
    ),
    tag = "regions"
)]
pub async fn list_regions_near(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<NearbyRegionsQuery>,
) -> Result<Json<ApiResponse<Vec<NearbyRegionDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))?;

    let radius_km = query.radius_km;
    let selection = service
        .find_nearby(&query.into_proximity_query())
        .await?;

    let message = selection.fallback.then(|| {
        format!(
            "No regions within {} km; showing the {} nearest",
            radius_km,
            selection.regions.len()
        )
    });

    let dtos: Vec<NearbyRegionDto> = selection.regions.into_iter().map(Into::into).collect();
    let meta = Meta::of(&dtos);
    Ok(Json(ApiResponse::success(Some(dtos), message, Some(meta))))
}
