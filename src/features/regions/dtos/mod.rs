mod region_dto;

pub use region_dto::{NearbyRegionDto, NearbyRegionsQuery, RegionListQuery, RegionResponseDto};
