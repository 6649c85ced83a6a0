mod engine;
mod engine_config;
mod engine_init;
mod navigation_controller;
mod scene_builder;

pub use engine::CalendarEngine;
pub use engine_config::CalendarEngineConfig;
pub use scene_builder::SUN_NAME;
