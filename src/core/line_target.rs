use serde::{Deserialize, Serialize};

use crate::core::YearSeeds;
use crate::error::{TimelineError, TimelineResult};

/// Intensity added by a transient flash frame.
pub const FLASH_BOOST: f64 = 0.3;
/// Per-frame probability of a transient flash on a line.
pub const FLASH_PROBABILITY: f64 = 0.001;

const HOVERED_SCALE: f64 = 1.8;
const FAR_INTENSITY_FACTOR: f64 = 0.12;
const FAR_SCALE: f64 = 0.7;
const NEAR_FALLOFF: f64 = 6.0;

/// Designated year that keeps a subtle boost while nothing is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub focus_year: Option<i32>,
    pub boost: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_year: None,
            boost: 0.12,
        }
    }
}

impl FocusConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.boost.is_finite() || !(0.0..=1.0).contains(&self.boost) {
            return Err(TimelineError::InvalidConfig(
                "focus boost must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// How a year relates to the current hover selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverRelation {
    /// Nothing is hovered.
    Unhovered,
    Hovered,
    /// Inside the near-band, `distance` in `1..=near_band`.
    Near { distance: u32 },
    /// Something else is hovered and this year is outside the near-band.
    Far,
}

impl HoverRelation {
    #[must_use]
    pub fn classify(year: i32, hovered: Option<i32>, near_band: u32) -> Self {
        let Some(hovered) = hovered else {
            return Self::Unhovered;
        };
        let distance = year.abs_diff(hovered);
        match distance {
            0 => Self::Hovered,
            d if d <= near_band => Self::Near { distance: d },
            _ => Self::Far,
        }
    }

    /// Shared falloff for near-band glow and label opacity: `1 - d/6`,
    /// floored at zero for wide configured bands.
    #[must_use]
    pub fn near_falloff(distance: u32) -> f64 {
        (1.0 - f64::from(distance) / NEAR_FALLOFF).max(0.0)
    }
}

/// Per-frame target the smoothed state eases toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTarget {
    pub intensity: f64,
    pub scale: f64,
}

/// Inputs for one line on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTargetInput {
    pub seeds: YearSeeds,
    pub time_seconds: f64,
    pub relation: HoverRelation,
    pub is_focus_year: bool,
    pub focus_boost: f64,
    pub flash: bool,
}

/// Computes target intensity and scale for one year line.
#[must_use]
pub fn compute_line_target(input: LineTargetInput) -> LineTarget {
    let base = ambient_intensity(input.seeds, input.time_seconds)
        + if input.flash { FLASH_BOOST } else { 0.0 };

    match input.relation {
        HoverRelation::Hovered => LineTarget {
            intensity: 1.0,
            scale: HOVERED_SCALE,
        },
        HoverRelation::Near { distance } => {
            let falloff = HoverRelation::near_falloff(distance);
            LineTarget {
                intensity: base.max(0.25 + 0.45 * falloff),
                scale: 1.0 + 0.3 * falloff,
            }
        }
        HoverRelation::Far => LineTarget {
            intensity: base * FAR_INTENSITY_FACTOR,
            scale: FAR_SCALE,
        },
        HoverRelation::Unhovered if input.is_focus_year => LineTarget {
            intensity: (base + input.focus_boost).min(1.0),
            scale: 1.0,
        },
        HoverRelation::Unhovered => LineTarget {
            intensity: base,
            scale: 1.0,
        },
    }
}

/// Base intensity plus two flicker terms and the slow pulse.
#[must_use]
pub fn ambient_intensity(seeds: YearSeeds, time_seconds: f64) -> f64 {
    let t = time_seconds;
    let flicker_primary = (t * seeds.flicker_speed + seeds.phase).sin() * 0.12;
    let flicker_secondary = (t * seeds.flicker_speed * 1.7 + seeds.phase * 0.5).sin() * 0.06;
    let pulse = (t * seeds.pulse_speed).sin() * 0.08;
    seeds.base_intensity + flicker_primary + flicker_secondary + pulse
}
