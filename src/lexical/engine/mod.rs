pub mod config;
pub mod engine;

pub use config::{EngineConfig, EngineConfigBuilder, EngineSettings};
pub use engine::SearchEngine;
