use serde::{Deserialize, Serialize};

use crate::core::{EventKind, TimeRange, TimelineLayout, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{CameraState, InteractionMode};
use crate::overlay::{LabelSink, OverlayKind};
use crate::render::Renderer;

use super::TimelineEngine;

/// Serializable overlay entry; placements are omitted since they move every
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySnapshot {
    pub kind: OverlayKind,
    pub year: i32,
    pub event_kind: Option<EventKind>,
    pub index: Option<usize>,
    pub distance: u32,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub time_range: TimeRange,
    pub layout: TimelineLayout,
    pub camera: CameraState,
    pub mode: InteractionMode,
    pub hovered_year: Option<i32>,
    pub zooming: bool,
    pub elapsed_seconds: f64,
    pub overlays: Vec<OverlaySnapshot>,
}

impl<R: Renderer, S: LabelSink> TimelineEngine<R, S> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.config.viewport,
            time_range: self.time_range(),
            layout: self.layout,
            camera: self.camera.state(),
            mode: self.interaction.mode(),
            hovered_year: self.interaction.hovered_year(),
            zooming: self.camera.is_zooming(),
            elapsed_seconds: self.clock.elapsed_seconds(),
            overlays: self
                .overlays
                .elements()
                .map(|element| OverlaySnapshot {
                    kind: element.kind,
                    year: element.year,
                    event_kind: element.event_kind,
                    index: element.index,
                    distance: element.distance,
                })
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
