//! Per-neighbourhood monthly crime statistics and the proximity query.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions` | List regions, filterable by month and crime type |
//! | GET | `/api/regions/near` | Regions around a point, nearest-6 fallback when none are in range |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgRegionRepository;
pub use services::RegionService;
