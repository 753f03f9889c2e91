use serde::{Deserialize, Serialize};

use crate::core::{FocusConfig, LayoutConfig, SmoothingConfig, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{HoverConfig, KineticPanConfig, ZoomConfig};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load timeline
/// setup without inventing their own ad-hoc format. Every group except the
/// viewport falls back to its default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub kinetic_pan: KineticPanConfig,
    #[serde(default)]
    pub smoothing: SmoothingConfig,
    #[serde(default)]
    pub focus: FocusConfig,
    #[serde(default)]
    pub hover: HoverConfig,
    #[serde(default = "default_max_particles")]
    pub max_particles: usize,
    /// Seed for per-year animation signatures, particles and flashes.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl TimelineEngineConfig {
    /// Creates a config with default tuning for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layout: LayoutConfig::default(),
            zoom: ZoomConfig::default(),
            kinetic_pan: KineticPanConfig::default(),
            smoothing: SmoothingConfig::default(),
            focus: FocusConfig::default(),
            hover: HoverConfig::default(),
            max_particles: default_max_particles(),
            seed: default_seed(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Self {
        self.zoom.min = min;
        self.zoom.max = max;
        self
    }

    #[must_use]
    pub fn with_kinetic_pan(mut self, kinetic_pan: KineticPanConfig) -> Self {
        self.kinetic_pan = kinetic_pan;
        self
    }

    #[must_use]
    pub fn with_transition_speed(mut self, transition_speed: f64) -> Self {
        self.smoothing.transition_speed = transition_speed;
        self
    }

    /// Sets the temporal focus year boosted while nothing is hovered.
    #[must_use]
    pub fn with_focus_year(mut self, focus_year: Option<i32>) -> Self {
        self.focus.focus_year = focus_year;
        self
    }

    #[must_use]
    pub fn with_hover(mut self, hover: HoverConfig) -> Self {
        self.hover = hover;
        self
    }

    #[must_use]
    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks every group; the viewport itself is checked by the engine.
    pub fn validate(self) -> TimelineResult<Self> {
        self.layout.validate()?;
        self.zoom.validate()?;
        self.kinetic_pan.validate()?;
        self.smoothing.validate()?;
        self.focus.validate()?;
        self.hover.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_max_particles() -> usize {
    40
}

fn default_seed() -> u64 {
    0x6d6e_656d_6f73
}

#[cfg(test)]
mod tests {
    use super::TimelineEngineConfig;
    use crate::core::Viewport;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = TimelineEngineConfig::from_json_str(
            r#"{ "viewport": { "width": 800, "height": 600 }, "seed": 7 }"#,
        )
        .expect("partial config");
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_particles, 40);
        assert_eq!(config.viewport.device_pixel_ratio, 1.0);
        assert_eq!(config.zoom.gesture_timeout_ms, 130.0);
    }

    #[test]
    fn validation_rejects_non_positive_transition_speed() {
        let err = TimelineEngineConfig::new(Viewport::new(800, 600))
            .with_transition_speed(0.0)
            .validate()
            .expect_err("zero speed must fail");
        assert!(format!("{err}").contains("transition_speed"));
    }

    #[test]
    fn json_roundtrip_preserves_focus_year() {
        let config =
            TimelineEngineConfig::new(Viewport::new(800, 600)).with_focus_year(Some(1815));
        let json = config.to_json_pretty().expect("serialize");
        let parsed = TimelineEngineConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }
}
