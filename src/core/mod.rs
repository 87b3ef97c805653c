pub mod engine;
pub mod model;
pub mod scoring;
pub mod types;
