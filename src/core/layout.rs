use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// Static placement knobs for the timeline band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub padding_left: f64,
    pub padding_right: f64,
    /// Fraction of the viewport height the lines may extend above and below the axis.
    pub vertical_extent: f64,
    /// Vertical position of the main axis as a fraction of the viewport height.
    pub axis_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_left: 60.0,
            padding_right: 60.0,
            vertical_extent: 0.28,
            axis_ratio: 0.5,
        }
    }
}

impl LayoutConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.padding_left.is_finite()
            || !self.padding_right.is_finite()
            || self.padding_left < 0.0
            || self.padding_right < 0.0
        {
            return Err(TimelineError::InvalidConfig(
                "layout paddings must be finite and >= 0".to_owned(),
            ));
        }
        if !self.vertical_extent.is_finite()
            || self.vertical_extent <= 0.0
            || self.vertical_extent > 0.5
        {
            return Err(TimelineError::InvalidConfig(
                "layout vertical_extent must be finite and in (0, 0.5]".to_owned(),
            ));
        }
        if !self.axis_ratio.is_finite() || !(0.0..=1.0).contains(&self.axis_ratio) {
            return Err(TimelineError::InvalidConfig(
                "layout axis_ratio must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Pixel-space layout derived from the viewport; recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub axis_y: f64,
    /// Maximum vertical reach of an unscaled line from the axis, in pixels.
    pub extent: f64,
    /// Distance between adjacent years at zoom scale `1.0`.
    pub base_year_width: f64,
    pub year_count: usize,
}

impl TimelineLayout {
    #[must_use]
    pub fn compute(viewport: Viewport, config: LayoutConfig, year_count: usize) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let drawable = (width - config.padding_left - config.padding_right).max(0.0);
        let gaps = year_count.saturating_sub(1).max(1) as f64;
        Self {
            width,
            height,
            padding_left: config.padding_left,
            padding_right: config.padding_right,
            axis_y: height * config.axis_ratio,
            extent: height * config.vertical_extent,
            base_year_width: drawable / gaps,
            year_count,
        }
    }

    /// `false` while the host reports a collapsed surface; frames skip drawing.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.base_year_width > 0.0
    }
}
