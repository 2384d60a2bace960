mod call_dto;

pub use call_dto::{CallListQuery, CallResponseDto};
