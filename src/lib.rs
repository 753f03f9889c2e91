//! mnemos: interactive year timeline engine.
//!
//! A horizontal axis of vertical year lines with historical events above and
//! personal events below. The engine owns a pan/zoom camera with anchor-locked
//! zoom and kinetic panning, smoothed per-year visual state, a hover-driven
//! overlay set and a per-frame render loop. Drawing goes through the
//! [`render::Renderer`] trait and DOM-like labels through
//! [`overlay::LabelSink`], so hosts plug in their own surfaces.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod overlay;
pub mod render;
pub mod telemetry;

pub use api::{EngineSnapshot, FrameOutcome, TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
