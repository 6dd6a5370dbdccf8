pub mod api;
pub mod hook;

pub use hook::use_channels;
