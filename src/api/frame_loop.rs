use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{FLASH_PROBABILITY, HoverRelation, LineTargetInput, compute_line_target};
use crate::error::TimelineResult;
use crate::overlay::{LabelSink, OverlayContext};
use crate::render::Renderer;

use super::TimelineEngine;
use super::render_frame_builder::{SceneInput, build_render_frame};

/// Largest step fed to inertia and animation, e.g. after a suspended tab.
pub const MAX_FRAME_DELTA_SECONDS: f64 = 0.25;

/// Frame timestamps -> monotonic animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    now_ms: f64,
    elapsed_seconds: f64,
}

impl FrameClock {
    /// Consumes one frame timestamp and returns the step in seconds.
    ///
    /// The first frame, non-finite and backwards timestamps yield `0`.
    pub fn advance(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let delta_seconds = match self.last_timestamp_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DELTA_SECONDS),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.now_ms = self.now_ms.max(timestamp_ms);
        self.elapsed_seconds += delta_seconds;
        delta_seconds
    }

    /// Timestamp of the latest frame; input handlers use it as "now".
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

/// Result of one frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// A full frame went to the renderer.
    pub drawn: bool,
    /// The host should request another frame.
    pub schedule_next: bool,
}

impl<R: Renderer, S: LabelSink> TimelineEngine<R, S> {
    /// Render-loop callback.
    ///
    /// Advances the clock, ticks the camera (zoom ease, anchor lock,
    /// inertia), updates hover, redraws everything and repositions overlays.
    /// Every call performs a full redraw; nothing is coalesced.
    pub fn frame(&mut self, timestamp_ms: f64) -> TimelineResult<FrameOutcome> {
        if self.disposed {
            return Ok(FrameOutcome {
                drawn: false,
                schedule_next: false,
            });
        }

        let delta_seconds = self.clock.advance(timestamp_ms);
        let now_ms = self.clock.now_ms();
        self.camera.tick(now_ms);
        self.camera.tick_inertia(delta_seconds);

        if self.camera.is_zooming() {
            self.apply_hover(None);
        } else if !self.interaction.is_dragging() {
            self.refresh_hover_from_pointer();
        }

        if !self.layout.is_drawable() {
            trace!(
                width = self.layout.width,
                height = self.layout.height,
                "skipping draw for degenerate viewport"
            );
            return Ok(FrameOutcome {
                drawn: false,
                schedule_next: true,
            });
        }

        self.update_line_visuals();
        self.particles.step(&self.layout);

        let frame = build_render_frame(SceneInput {
            viewport: self.config.viewport,
            layout: &self.layout,
            camera: &self.camera,
            lines: &self.lines,
            visuals: &self.visuals,
            particles: &self.particles,
            hovered_year: self.interaction.hovered_year(),
            time_seconds: self.clock.elapsed_seconds(),
        });
        let rendered = self.renderer.render(&frame);

        self.overlays.reposition(
            OverlayContext {
                camera: &self.camera,
                layout: &self.layout,
                smoothing: &self.smoothing,
                now_ms,
            },
            &mut self.sink,
        );
        rendered?;

        trace!(
            commands = frame.len(),
            zoom_scale = self.camera.zoom_scale(),
            pan_offset = self.camera.pan_offset(),
            "frame drawn"
        );
        Ok(FrameOutcome {
            drawn: true,
            schedule_next: true,
        })
    }

    fn update_line_visuals(&mut self) {
        let hovered = self.interaction.hovered_year();
        let near_band = self.config.hover.near_band;
        let focus = self.config.focus;
        let time_seconds = self.clock.elapsed_seconds();

        self.visuals.clear();
        for line in &self.lines {
            let target = compute_line_target(LineTargetInput {
                seeds: line.seeds(),
                time_seconds,
                relation: HoverRelation::classify(line.year, hovered, near_band),
                is_focus_year: focus.focus_year == Some(line.year),
                focus_boost: focus.boost,
                flash: self.rng.gen_bool(FLASH_PROBABILITY),
            });
            self.visuals.push(self.smoothing.advance(line.year, target));
        }
    }
}
