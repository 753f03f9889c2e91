use std::collections::BTreeMap;
use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{EventDataset, EventKind, EventRecord, TimeRange};

/// Per-year animation signature, randomized once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSeeds {
    /// Flicker phase in `[0, 2π)`.
    pub phase: f64,
    pub flicker_speed: f64,
    pub pulse_speed: f64,
    pub base_intensity: f64,
}

impl YearSeeds {
    pub fn random<G: Rng + ?Sized>(rng: &mut G) -> Self {
        Self {
            phase: rng.gen_range(0.0..TAU),
            flicker_speed: rng.gen_range(0.4..1.6),
            pulse_speed: rng.gen_range(0.2..0.5),
            base_intensity: rng.gen_range(0.25..0.40),
        }
    }
}

/// Stable year -> seed mapping.
///
/// Built once per engine and reused whenever year lines are rebuilt, so a
/// resize never changes the animation signature of a year.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearSeedTable {
    seeds: BTreeMap<i32, YearSeeds>,
}

impl YearSeedTable {
    pub fn generate<G: Rng + ?Sized>(range: TimeRange, rng: &mut G) -> Self {
        let seeds = range
            .years()
            .map(|year| (year, YearSeeds::random(rng)))
            .collect();
        Self { seeds }
    }

    /// Returns the seeds for `year`, drawing fresh ones only for unseen years.
    pub fn get_or_insert<G: Rng + ?Sized>(&mut self, year: i32, rng: &mut G) -> YearSeeds {
        *self
            .seeds
            .entry(year)
            .or_insert_with(|| YearSeeds::random(rng))
    }

    #[must_use]
    pub fn get(&self, year: i32) -> Option<YearSeeds> {
        self.seeds.get(&year).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

/// Derived record for one integer year of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct YearLine {
    pub year: i32,
    pub year_index: usize,
    pub has_events: bool,
    pub phase: f64,
    pub flicker_speed: f64,
    pub pulse_speed: f64,
    pub base_intensity: f64,
    pub historical_events: Vec<EventRecord>,
    pub personal_events: Vec<EventRecord>,
}

impl YearLine {
    #[must_use]
    pub fn events(&self, kind: EventKind) -> &[EventRecord] {
        match kind {
            EventKind::Historical => &self.historical_events,
            EventKind::Personal => &self.personal_events,
        }
    }

    #[must_use]
    pub fn seeds(&self) -> YearSeeds {
        YearSeeds {
            phase: self.phase,
            flicker_speed: self.flicker_speed,
            pulse_speed: self.pulse_speed,
            base_intensity: self.base_intensity,
        }
    }
}

/// Builds one line per year of `dataset.time_range`, in year order.
pub fn build_year_lines<G: Rng + ?Sized>(
    dataset: &EventDataset,
    seeds: &mut YearSeedTable,
    rng: &mut G,
) -> Vec<YearLine> {
    let range = dataset.time_range;
    range
        .years()
        .enumerate()
        .map(|(year_index, year)| {
            let seed = seeds.get_or_insert(year, rng);
            let historical_events = dataset.events(EventKind::Historical, year).to_vec();
            let personal_events = dataset.events(EventKind::Personal, year).to_vec();
            YearLine {
                year,
                year_index,
                has_events: !historical_events.is_empty() || !personal_events.is_empty(),
                phase: seed.phase,
                flicker_speed: seed.flicker_speed,
                pulse_speed: seed.pulse_speed,
                base_intensity: seed.base_intensity,
                historical_events,
                personal_events,
            }
        })
        .collect()
}
