//! Individual incident calls (112 reports).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/calls` | List calls, filterable by month, category, region and E33 flag |
//! | GET | `/api/calls/{id}` | Get a call by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCallRepository;
pub use services::CallService;
