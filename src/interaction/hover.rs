use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{TimelineLayout, YearLine};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::Camera;

/// Hit-band and near-band tuning for hover detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Years within this distance of the hovered year get secondary glow and labels.
    pub near_band: u32,
    /// Share of the vertical extent (each side of the axis) that accepts hover.
    pub vertical_band_ratio: f64,
    /// Extra horizontal slack beyond the paddings that still accepts hover.
    pub horizontal_slack_px: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            near_band: 5,
            vertical_band_ratio: 0.8,
            horizontal_slack_px: 20.0,
        }
    }
}

impl HoverConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.vertical_band_ratio.is_finite() || self.vertical_band_ratio <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "hover vertical_band_ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.horizontal_slack_px.is_finite() || self.horizontal_slack_px < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "hover horizontal_slack_px must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// `true` when the pointer sits inside the hover-sensitive band.
#[must_use]
pub fn is_in_hover_band(layout: &TimelineLayout, config: HoverConfig, x: f64, y: f64) -> bool {
    let reach = layout.extent * config.vertical_band_ratio;
    let in_vertical = y >= layout.axis_y - reach && y <= layout.axis_y + reach;
    let in_horizontal = x >= layout.padding_left - config.horizontal_slack_px
        && x <= layout.width - layout.padding_right + config.horizontal_slack_px;
    in_vertical && in_horizontal
}

/// Resolves the hovered year for a pointer position.
///
/// Inside the band the eventful year whose screen x is closest wins, with no
/// distance cap; ties go to the earlier year. Outside the band, or without
/// any eventful year, nothing is hovered.
#[must_use]
pub fn resolve_hover(
    lines: &[YearLine],
    camera: &Camera,
    layout: &TimelineLayout,
    config: HoverConfig,
    x: f64,
    y: f64,
) -> Option<i32> {
    if !x.is_finite() || !y.is_finite() || !is_in_hover_band(layout, config, x, y) {
        return None;
    }
    lines
        .iter()
        .filter(|line| line.has_events)
        .min_by_key(|line| {
            OrderedFloat((camera.year_to_screen_x(line.year_index as f64) - x).abs())
        })
        .map(|line| line.year)
}

#[cfg(test)]
mod tests {
    use super::{HoverConfig, is_in_hover_band};
    use crate::core::{LayoutConfig, TimelineLayout, Viewport};

    #[test]
    fn band_spans_paddings_plus_slack_and_most_of_the_extent() {
        let layout = TimelineLayout::compute(Viewport::new(800, 600), LayoutConfig::default(), 6);
        let config = HoverConfig::default();

        assert!(is_in_hover_band(&layout, config, 40.0, 300.0));
        assert!(!is_in_hover_band(&layout, config, 39.0, 300.0));
        assert!(is_in_hover_band(&layout, config, 760.0, 300.0));
        assert!(!is_in_hover_band(&layout, config, 761.0, 300.0));
        assert!(is_in_hover_band(&layout, config, 400.0, 300.0 - 134.0));
        assert!(!is_in_hover_band(&layout, config, 400.0, 300.0 - 135.0));
    }
}
