use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::TimeRange;
use crate::error::{TimelineError, TimelineResult};

/// Intensity applied when a record does not carry one.
pub const DEFAULT_EVENT_INTENSITY: f64 = 0.7;

/// Which side of the main axis an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Collective memory, drawn above the axis.
    Historical,
    /// Individual memory, drawn below the axis.
    Personal,
}

impl EventKind {
    /// Vertical direction away from the axis in screen space.
    #[must_use]
    pub fn direction(self) -> f64 {
        match self {
            Self::Historical => -1.0,
            Self::Personal => 1.0,
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Personal => "personal",
        }
    }

    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Historical => "event-text historical",
            Self::Personal => "event-text personal",
        }
    }
}

/// One immutable dataset entry.
///
/// Historical records use `title`, personal records use `action`; both land
/// in `title`. A record missing either field still loads: the title stays
/// empty and the dataset synthesizes an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "action")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl EventRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            person: None,
            intensity: None,
            weight: None,
        }
    }

    #[must_use]
    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
    }

    #[must_use]
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Intensity in `[0, 1]`, defaulting to [`DEFAULT_EVENT_INTENSITY`].
    #[must_use]
    pub fn effective_intensity(&self) -> f64 {
        unit_or(self.intensity, DEFAULT_EVENT_INTENSITY)
    }

    /// Weight in `[0, 1]`, defaulting to the effective intensity.
    ///
    /// Scales the radius of this record's node on a hovered line.
    #[must_use]
    pub fn effective_weight(&self) -> f64 {
        unit_or(self.weight, self.effective_intensity())
    }
}

fn unit_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(value) if value.is_finite() => value.clamp(0.0, 1.0),
        _ => fallback,
    }
}

/// Static, year-indexed event tables supplied at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDataset {
    pub time_range: TimeRange,
    #[serde(default)]
    pub historical: BTreeMap<i32, Vec<EventRecord>>,
    #[serde(default)]
    pub personal: BTreeMap<i32, Vec<EventRecord>>,
}

impl EventDataset {
    #[must_use]
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            time_range,
            historical: BTreeMap::new(),
            personal: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_event(mut self, kind: EventKind, year: i32, record: EventRecord) -> Self {
        self.push(kind, year, record);
        self
    }

    pub fn push(&mut self, kind: EventKind, year: i32, record: EventRecord) {
        self.table_mut(kind).entry(year).or_default().push(record);
    }

    #[must_use]
    pub fn events(&self, kind: EventKind, year: i32) -> &[EventRecord] {
        let table = match kind {
            EventKind::Historical => &self.historical,
            EventKind::Personal => &self.personal,
        };
        table.get(&year).map_or(&[], Vec::as_slice)
    }

    /// Parses a dataset and drops years outside the declared range.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let mut dataset: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse event dataset json: {e}"))
        })?;
        dataset.time_range = dataset.time_range.validate()?;
        dataset.retain_in_range();
        dataset.fill_missing_ids();
        debug!(
            start = dataset.time_range.start(),
            end = dataset.time_range.end(),
            historical_years = dataset.historical.len(),
            personal_years = dataset.personal.len(),
            "loaded event dataset"
        );
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize event dataset json: {e}"))
        })
    }

    fn retain_in_range(&mut self) {
        let range = self.time_range;
        for (kind, table) in [
            (EventKind::Historical, &mut self.historical),
            (EventKind::Personal, &mut self.personal),
        ] {
            table.retain(|year, records| {
                let keep = range.contains(*year);
                if !keep {
                    warn!(
                        ?kind,
                        year,
                        count = records.len(),
                        "dropping events outside time range"
                    );
                }
                keep
            });
        }
    }

    fn fill_missing_ids(&mut self) {
        for (kind, table) in [
            (EventKind::Historical, &mut self.historical),
            (EventKind::Personal, &mut self.personal),
        ] {
            for (year, records) in table.iter_mut() {
                for (index, record) in records.iter_mut().enumerate() {
                    if record.id.is_empty() {
                        record.id = format!("{}-{year}-{index}", kind.id_prefix());
                        debug!(?kind, year, id = %record.id, "synthesized missing event id");
                    }
                }
            }
        }
    }

    fn table_mut(&mut self, kind: EventKind) -> &mut BTreeMap<i32, Vec<EventRecord>> {
        match kind {
            EventKind::Historical => &mut self.historical,
            EventKind::Personal => &mut self.personal,
        }
    }
}
