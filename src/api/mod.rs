mod background_scene_builder;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod frame_loop;
mod hover_field_scene_builder;
mod interaction_controller;
mod render_frame_builder;
mod year_line_scene_builder;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::{EngineSnapshot, OverlaySnapshot};
pub use frame_loop::{FrameClock, FrameOutcome, MAX_FRAME_DELTA_SECONDS};
