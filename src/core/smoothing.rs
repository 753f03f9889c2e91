use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::LineTarget;
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Fraction of the remaining gap closed per frame. Lower feels heavier.
    pub transition_speed: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            transition_speed: 0.08,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.transition_speed.is_finite()
            || self.transition_speed <= 0.0
            || self.transition_speed > 1.0
        {
            return Err(TimelineError::InvalidConfig(
                "smoothing transition_speed must be finite and in (0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Rendered (smoothed) state of one year on the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineVisual {
    pub intensity: f64,
    pub scale: f64,
}

/// Exponential per-year smoothing of intensity and scale.
///
/// Entries are created on first observation (seeded with the target, so
/// nothing pops in) and live as long as the tracker.
#[derive(Debug, Clone, Default)]
pub struct SmoothedStateTracker {
    transition_speed: f64,
    intensities: HashMap<i32, f64>,
    scales: HashMap<i32, f64>,
}

impl SmoothedStateTracker {
    #[must_use]
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            transition_speed: config.transition_speed,
            intensities: HashMap::new(),
            scales: HashMap::new(),
        }
    }

    #[must_use]
    pub fn transition_speed(&self) -> f64 {
        self.transition_speed
    }

    /// Moves the stored state for `year` one step toward `target`.
    pub fn advance(&mut self, year: i32, target: LineTarget) -> LineVisual {
        let speed = self.transition_speed;
        LineVisual {
            intensity: ease_entry(&mut self.intensities, year, target.intensity, speed),
            scale: ease_entry(&mut self.scales, year, target.scale, speed),
        }
    }

    #[must_use]
    pub fn current(&self, year: i32) -> Option<LineVisual> {
        Some(LineVisual {
            intensity: *self.intensities.get(&year)?,
            scale: *self.scales.get(&year)?,
        })
    }

    /// Smoothed scale, `1.0` for years never observed.
    #[must_use]
    pub fn scale_or_default(&self, year: i32) -> f64 {
        self.scales.get(&year).copied().unwrap_or(1.0)
    }

    #[must_use]
    pub fn tracked_years(&self) -> usize {
        self.intensities.len()
    }
}

fn ease_entry(values: &mut HashMap<i32, f64>, year: i32, target: f64, speed: f64) -> f64 {
    let current = values.entry(year).or_insert(target);
    *current += (target - *current) * speed;
    if !current.is_finite() {
        *current = target;
    }
    *current
}
