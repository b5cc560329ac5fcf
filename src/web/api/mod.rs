pub mod error;
pub mod overview;
pub mod relay;
