/// Mean Earth radius used for haversine distances, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radius applied when a proximity query omits `radiusKm`
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// How many nearest regions are returned when nothing lies inside the radius
pub const FALLBACK_NEAREST_COUNT: usize = 6;

/// Decimal places kept on derived ratios (e.g. `e33Percent`)
pub const RATIO_DECIMALS: i32 = 3;
