use rand_chacha::ChaCha8Rng;

use crate::core::{
    EventDataset, LineVisual, ParticleField, SmoothedStateTracker, TimeRange, TimelineLayout,
    YearLine, YearSeedTable,
};
use crate::interaction::{Camera, CameraState, InteractionMode, InteractionState};
use crate::overlay::{LabelSink, OverlayElement, OverlayResolver};
use crate::render::Renderer;

use super::{FrameClock, TimelineEngineConfig};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the camera, year lines, smoothed per-year state and
/// overlay set, and drives the renderer and label sink once per frame. All
/// mutation happens from input handlers or [`TimelineEngine::frame`].
pub struct TimelineEngine<R: Renderer, S: LabelSink> {
    pub(super) renderer: R,
    pub(super) sink: S,
    pub(super) config: TimelineEngineConfig,
    pub(super) dataset: EventDataset,
    pub(super) seeds: YearSeedTable,
    pub(super) lines: Vec<YearLine>,
    pub(super) layout: TimelineLayout,
    pub(super) camera: Camera,
    pub(super) interaction: InteractionState,
    pub(super) smoothing: SmoothedStateTracker,
    /// Smoothed state of `lines[i]` as of the latest drawn frame.
    pub(super) visuals: Vec<LineVisual>,
    pub(super) overlays: OverlayResolver,
    pub(super) particles: ParticleField,
    pub(super) rng: ChaCha8Rng,
    pub(super) clock: FrameClock,
    pub(super) disposed: bool,
}

impl<R: Renderer, S: LabelSink> TimelineEngine<R, S> {
    #[must_use]
    pub fn config(&self) -> &TimelineEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        self.dataset.time_range
    }

    #[must_use]
    pub fn year_lines(&self) -> &[YearLine] {
        &self.lines
    }

    #[must_use]
    pub fn year_line(&self, year: i32) -> Option<&YearLine> {
        self.time_range()
            .index_of(year)
            .and_then(|index| self.lines.get(index))
    }

    #[must_use]
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn camera_state(&self) -> CameraState {
        self.camera.state()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hovered_year(&self) -> Option<i32> {
        self.interaction.hovered_year()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.camera.is_zooming()
    }

    /// Screen x of a year, `None` for years outside the range.
    #[must_use]
    pub fn year_to_screen_x(&self, year: i32) -> Option<f64> {
        self.time_range()
            .index_of(year)
            .map(|index| self.camera.year_to_screen_x(index as f64))
    }

    /// Smoothed intensity/scale of a year as of the latest frame.
    #[must_use]
    pub fn line_visual(&self, year: i32) -> Option<LineVisual> {
        self.smoothing.current(year)
    }

    pub fn overlay_elements(&self) -> impl Iterator<Item = &OverlayElement> {
        self.overlays.elements()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn label_sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn into_parts(self) -> (R, S) {
        (self.renderer, self.sink)
    }
}
