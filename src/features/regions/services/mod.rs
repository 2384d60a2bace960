mod proximity;
mod region_service;

pub use proximity::{select_nearby, NearbyRegion, NearbySelection};
pub use region_service::{
    ProximityQuery, RegionService, INVALID_LAT, INVALID_LON, INVALID_RADIUS,
};
