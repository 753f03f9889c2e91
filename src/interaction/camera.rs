use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::TimelineLayout;
use crate::error::{TimelineError, TimelineResult};

/// Zoom limits and easing for the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    /// Fraction of the remaining zoom gap closed per tick.
    pub ease: f64,
    /// Wheel factor is `exp(-delta_y * wheel_sensitivity)`.
    pub wheel_sensitivity: f64,
    /// Zoom counts as settled once `|target - scale|` drops below this.
    pub settle_epsilon: f64,
    /// Anchor lock lifetime after the last wheel tick.
    pub gesture_timeout_ms: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 24.0,
            ease: 0.12,
            wheel_sensitivity: 0.0015,
            settle_epsilon: 0.0008,
            gesture_timeout_ms: 130.0,
        }
    }
}

impl ZoomConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min <= 0.0 || self.max < self.min
        {
            return Err(TimelineError::InvalidConfig(
                "zoom limits must be finite with 0 < min <= max".to_owned(),
            ));
        }
        if !self.ease.is_finite() || self.ease <= 0.0 || self.ease > 1.0 {
            return Err(TimelineError::InvalidConfig(
                "zoom ease must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "zoom wheel_sensitivity must be finite and > 0".to_owned(),
            ));
        }
        if !self.settle_epsilon.is_finite() || self.settle_epsilon <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "zoom settle_epsilon must be finite and > 0".to_owned(),
            ));
        }
        if !self.gesture_timeout_ms.is_finite() || self.gesture_timeout_ms < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "zoom gesture_timeout_ms must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Tuning for post-drag inertial pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticPanConfig {
    /// Multiplicative velocity decay per inertia step.
    pub decay_per_frame: f64,
    /// Inertia stops once `abs(velocity)` is at or below this threshold.
    pub stop_velocity_abs: f64,
    /// Share of the last drag velocity kept on release.
    pub release_retention: f64,
}

impl Default for KineticPanConfig {
    fn default() -> Self {
        Self {
            decay_per_frame: 0.96,
            stop_velocity_abs: 0.5,
            release_retention: 0.3,
        }
    }
}

impl KineticPanConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.decay_per_frame.is_finite()
            || self.decay_per_frame <= 0.0
            || self.decay_per_frame >= 1.0
        {
            return Err(TimelineError::InvalidConfig(
                "kinetic pan decay_per_frame must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !self.stop_velocity_abs.is_finite() || self.stop_velocity_abs < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "kinetic pan stop_velocity_abs must be finite and >= 0".to_owned(),
            ));
        }
        if !self.release_retention.is_finite() || !(0.0..=1.0).contains(&self.release_retention) {
            return Err(TimelineError::InvalidConfig(
                "kinetic pan release_retention must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Horizontal metrics the camera maps through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraMetrics {
    pub padding_left: f64,
    pub view_width: f64,
    pub base_year_width: f64,
    pub year_count: usize,
}

impl From<&TimelineLayout> for CameraMetrics {
    fn from(layout: &TimelineLayout) -> Self {
        Self {
            padding_left: layout.padding_left,
            view_width: layout.width,
            base_year_width: layout.base_year_width,
            year_count: layout.year_count,
        }
    }
}

/// Anchor-locked zoom gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomGesture {
    pub anchor_screen_x: f64,
    /// Fractional year index under the anchor when the gesture started.
    pub anchor_year_index: f64,
    pub deadline_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_x: f64,
    start_pan: f64,
    last_x: f64,
    last_time_ms: f64,
}

/// Public camera values exposed to hosts and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub zoom_scale: f64,
    pub zoom_target: f64,
    pub pan_offset: f64,
    pub pan_velocity: f64,
}

const FRAME_MS_AT_60HZ: f64 = 1000.0 / 60.0;

/// Zoom scale + pan offset over a fixed year axis.
///
/// Every mutation re-clamps so `min <= zoom <= max` and
/// `0 <= pan_offset <= max_pan()` hold between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    zoom: ZoomConfig,
    kinetic: KineticPanConfig,
    metrics: CameraMetrics,
    zoom_scale: f64,
    zoom_target: f64,
    pan_offset: f64,
    pan_velocity: f64,
    gesture: Option<ZoomGesture>,
    drag: Option<DragState>,
}

impl Camera {
    #[must_use]
    pub fn new(zoom: ZoomConfig, kinetic: KineticPanConfig, metrics: CameraMetrics) -> Self {
        Self {
            zoom,
            kinetic,
            metrics,
            zoom_scale: zoom.min,
            zoom_target: zoom.min,
            pan_offset: 0.0,
            pan_velocity: 0.0,
            gesture: None,
            drag: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> CameraState {
        CameraState {
            zoom_scale: self.zoom_scale,
            zoom_target: self.zoom_target,
            pan_offset: self.pan_offset,
            pan_velocity: self.pan_velocity,
        }
    }

    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        self.zoom
    }

    #[must_use]
    pub fn metrics(&self) -> CameraMetrics {
        self.metrics
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    #[must_use]
    pub fn zoom_target(&self) -> f64 {
        self.zoom_target
    }

    #[must_use]
    pub fn pan_offset(&self) -> f64 {
        self.pan_offset
    }

    #[must_use]
    pub fn pan_velocity(&self) -> f64 {
        self.pan_velocity
    }

    #[must_use]
    pub fn gesture(&self) -> Option<ZoomGesture> {
        self.gesture
    }

    #[must_use]
    pub fn year_width(&self) -> f64 {
        self.year_width_at(self.zoom_scale)
    }

    #[must_use]
    pub fn year_width_at(&self, zoom_scale: f64) -> f64 {
        self.metrics.base_year_width * zoom_scale
    }

    /// Largest valid pan offset at the current zoom scale.
    #[must_use]
    pub fn max_pan(&self) -> f64 {
        self.max_pan_at(self.zoom_scale)
    }

    #[must_use]
    pub fn max_pan_at(&self, zoom_scale: f64) -> f64 {
        let gaps = self.metrics.year_count.saturating_sub(1) as f64;
        let span = gaps * self.year_width_at(zoom_scale);
        (span - self.metrics.view_width).max(0.0)
    }

    #[must_use]
    pub fn year_to_screen_x(&self, year_index: f64) -> f64 {
        self.metrics.padding_left + year_index * self.year_width() - self.pan_offset
    }

    /// Inverse of [`Self::year_to_screen_x`]; `None` while the axis is collapsed.
    #[must_use]
    pub fn screen_x_to_year_index(&self, screen_x: f64) -> Option<f64> {
        let year_width = self.year_width();
        (year_width > 0.0)
            .then(|| (screen_x - self.metrics.padding_left + self.pan_offset) / year_width)
    }

    /// Applies new viewport metrics and re-clamps the pan offset.
    pub fn set_metrics(&mut self, metrics: CameraMetrics) {
        self.metrics = metrics;
        self.clamp_pan();
    }

    /// Requests a new zoom level; the scale eases toward it on later ticks.
    pub fn set_zoom_target(&mut self, target: f64) {
        if !target.is_finite() {
            trace!(target, "ignoring non-finite zoom target");
            return;
        }
        self.zoom_target = target.clamp(self.zoom.min, self.zoom.max);
    }

    /// Multiplies the zoom target by `exp(-delta_y * sensitivity)`.
    pub fn apply_wheel_delta(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        let factor = (-delta_y * self.zoom.wheel_sensitivity).exp();
        self.set_zoom_target(self.zoom_target * factor);
    }

    /// Locks the anchor for a new gesture, or extends the running one.
    ///
    /// A drag owns the pan offset, so no anchor is locked while dragging.
    pub fn begin_zoom_gesture(&mut self, anchor_screen_x: f64, now_ms: f64) {
        if self.drag.is_some() {
            return;
        }
        let deadline_ms = now_ms + self.zoom.gesture_timeout_ms;
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.deadline_ms = deadline_ms;
            return;
        }
        if !anchor_screen_x.is_finite() {
            return;
        }
        let anchor_year_index = self.screen_x_to_year_index(anchor_screen_x).unwrap_or(0.0);
        debug!(anchor_screen_x, anchor_year_index, "zoom gesture locked");
        self.gesture = Some(ZoomGesture {
            anchor_screen_x,
            anchor_year_index,
            deadline_ms,
        });
        self.pan_velocity = 0.0;
    }

    /// Eases zoom toward its target and holds the gesture anchor in place.
    ///
    /// The ease is per tick rather than per second, which matches the
    /// behaviour at the nominal 60 Hz frame rate.
    pub fn tick(&mut self, now_ms: f64) {
        self.zoom_scale += (self.zoom_target - self.zoom_scale) * self.zoom.ease;
        self.zoom_scale =
            sanitize(self.zoom_scale, self.zoom.min).clamp(self.zoom.min, self.zoom.max);

        if let Some(gesture) = self.gesture {
            self.pan_offset = self.metrics.padding_left
                + gesture.anchor_year_index * self.year_width()
                - gesture.anchor_screen_x;
            let settled = (self.zoom_target - self.zoom_scale).abs() < self.zoom.settle_epsilon;
            if now_ms > gesture.deadline_ms && settled {
                debug!(zoom_scale = self.zoom_scale, "zoom gesture released");
                self.gesture = None;
            }
        }
        self.clamp_pan();
    }

    /// `true` while an anchor is locked or the zoom has not settled.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.gesture.is_some()
            || (self.zoom_target - self.zoom_scale).abs() > self.zoom.settle_epsilon
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, screen_x: f64, now_ms: f64) {
        if !screen_x.is_finite() {
            return;
        }
        self.pan_velocity = 0.0;
        self.gesture = None;
        self.drag = Some(DragState {
            start_x: screen_x,
            start_pan: self.pan_offset,
            last_x: screen_x,
            last_time_ms: now_ms,
        });
    }

    /// Moves the pan with the pointer and samples velocity in pixels per
    /// 60 Hz frame. Moves that share a timestamp fold into the next sample.
    pub fn update_drag(&mut self, screen_x: f64, now_ms: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if !screen_x.is_finite() {
            return;
        }
        self.pan_offset = drag.start_pan - (screen_x - drag.start_x);

        let elapsed_ms = now_ms - drag.last_time_ms;
        if elapsed_ms > 0.0 {
            let frames = elapsed_ms / FRAME_MS_AT_60HZ;
            self.pan_velocity = -(screen_x - drag.last_x) / frames;
            drag.last_x = screen_x;
            drag.last_time_ms = now_ms;
        }
        self.clamp_pan();
    }

    /// Ends the drag, keeping a fraction of the velocity as inertia seed.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.pan_velocity *= self.kinetic.release_retention;
            trace!(pan_velocity = self.pan_velocity, "drag released");
        }
    }

    /// Advances inertial pan by `delta_seconds`. Returns `true` when the pan moved.
    pub fn tick_inertia(&mut self, delta_seconds: f64) -> bool {
        if self.drag.is_some() || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return false;
        }
        if self.pan_velocity.abs() <= self.kinetic.stop_velocity_abs {
            self.pan_velocity = 0.0;
            return false;
        }

        self.pan_offset += self.pan_velocity * delta_seconds * 60.0;
        self.pan_velocity *= self.kinetic.decay_per_frame;
        if self.clamp_pan() {
            self.pan_velocity = 0.0;
        }
        true
    }

    /// Clamps the pan into `[0, max_pan]`; returns `true` when a bound was hit.
    fn clamp_pan(&mut self) -> bool {
        let max_pan = self.max_pan();
        let raw = sanitize(self.pan_offset, 0.0);
        let clamped = raw.clamp(0.0, max_pan);
        self.pan_offset = clamped;
        clamped != raw
    }
}

fn sanitize(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::{Camera, CameraMetrics, KineticPanConfig, ZoomConfig};

    fn camera() -> Camera {
        Camera::new(
            ZoomConfig::default(),
            KineticPanConfig::default(),
            CameraMetrics {
                padding_left: 60.0,
                view_width: 1000.0,
                base_year_width: 880.0 / 300.0,
                year_count: 301,
            },
        )
    }

    #[test]
    fn zoom_target_clamps_to_limits() {
        let mut camera = camera();
        camera.set_zoom_target(240.0);
        assert_eq!(camera.zoom_target(), 24.0);
        camera.set_zoom_target(0.01);
        assert_eq!(camera.zoom_target(), 1.0);
    }

    #[test]
    fn max_pan_is_zero_when_range_fits() {
        let camera = camera();
        assert_eq!(camera.max_pan(), 0.0);
        assert!(camera.max_pan_at(4.0) > 0.0);
    }

    #[test]
    fn validation_rejects_inverted_zoom_limits() {
        let err = ZoomConfig {
            min: 4.0,
            max: 2.0,
            ..ZoomConfig::default()
        }
        .validate()
        .expect_err("inverted limits must fail");
        assert!(format!("{err}").contains("zoom limits"));
    }

    #[test]
    fn validation_rejects_decay_outside_unit_interval() {
        let err = KineticPanConfig {
            decay_per_frame: 1.0,
            ..KineticPanConfig::default()
        }
        .validate()
        .expect_err("decay must be < 1");
        assert!(format!("{err}").contains("decay_per_frame"));
    }
}
