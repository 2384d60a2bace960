//! Great-circle helpers for the proximity queries.

use crate::shared::constants::{EARTH_RADIUS_KM, RATIO_DECIMALS};

/// Haversine distance between two lat/lon points (degrees), in kilometres
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// `part / total` rounded to three decimals; 0.0 when `total` is zero
pub fn ratio(part: i32, total: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let factor = 10f64.powi(RATIO_DECIMALS);
    (f64::from(part) / f64::from(total) * factor).round() / factor
}

pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}
