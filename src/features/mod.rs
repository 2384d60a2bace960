pub mod calls;
pub mod regions;
