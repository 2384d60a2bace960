mod call;

pub use call::{Call, CallFilter};
