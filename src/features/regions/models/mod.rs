mod region;

pub use region::{Region, RegionFilter};
