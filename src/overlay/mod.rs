//! Text overlays placed next to the hovered year.
//!
//! The resolver owns one record per live element describing how to place it;
//! hosts receive create/update/destroy calls through a [`LabelSink`].

mod resolver;
mod sink;

pub use resolver::{OverlayContext, OverlayResolver};
pub use sink::{LabelSink, NullLabelSink, RecordedLabel, RecordingLabelSink};

use serde::{Deserialize, Serialize};

use crate::core::EventKind;

/// Stable identity of one overlay element for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverlayId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    YearLabel,
    EventText,
}

/// Live overlay element as tracked by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayElement {
    pub id: OverlayId,
    pub kind: OverlayKind,
    pub year: i32,
    pub year_index: usize,
    /// Position of the event within its year, for event texts.
    pub index: Option<usize>,
    pub event_kind: Option<EventKind>,
    /// Distance from the hovered year; `0` for the hovered year itself.
    pub distance: u32,
    pub target_opacity: f64,
    /// Fixed vertical stagger applied on top of the computed anchor.
    pub y_offset: f64,
    pub reveal_delay_ms: f64,
    pub created_ms: f64,
}

/// Payload handed to [`LabelSink::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub kind: OverlayKind,
    pub year: i32,
    pub text: String,
    /// Person line shown above personal event titles.
    pub secondary_text: Option<String>,
    pub style_class: String,
}

/// Per-frame position and fade of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPlacement {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub visible: bool,
}
