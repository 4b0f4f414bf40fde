pub mod chance;
pub mod engine;
pub mod opening;
pub mod position;
pub mod profile;
