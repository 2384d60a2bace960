mod call_repository;

pub use call_repository::{CallRepository, PgCallRepository};
