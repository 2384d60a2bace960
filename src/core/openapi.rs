use utoipa::{Modify, OpenApi};

use crate::features::calls::{dtos as calls_dtos, handlers as calls_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Calls
        calls_handlers::list_calls,
        calls_handlers::get_call,
        // Regions
        regions_handlers::list_regions,
        regions_handlers::list_regions_near,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Calls
            calls_dtos::CallResponseDto,
            ApiResponse<Vec<calls_dtos::CallResponseDto>>,
            ApiResponse<calls_dtos::CallResponseDto>,
            // Regions
            regions_dtos::RegionResponseDto,
            regions_dtos::NearbyRegionDto,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<Vec<regions_dtos::NearbyRegionDto>>,
        )
    ),
    tags(
        (name = "calls", description = "Individual incident calls"),
        (name = "regions", description = "Monthly crime statistics per neighbourhood and proximity search"),
    ),
    info(
        title = "City Safety Map API",
        version = "1.0.0",
        description = "Incident calls and per-neighbourhood crime statistics",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
