use indexmap::IndexMap;
use tracing::debug;

use crate::core::{EventKind, HoverRelation, SmoothedStateTracker, TimelineLayout, YearLine};
use crate::interaction::Camera;

use super::{LabelSink, OverlayElement, OverlayId, OverlayKind, OverlayPlacement, OverlaySpec};

const LABEL_GAP_PX: f64 = 8.0;
const NEAR_LABEL_STAGGER_PX: f64 = 22.0;
const NEAR_LABEL_MIN_OPACITY: f64 = 0.15;
const EVENT_TEXT_BASE_OFFSET_PX: f64 = 80.0;
const EVENT_TEXT_SPACING_PX: f64 = 50.0;
/// Scale a hovered line eases toward; used to pre-filter event texts.
const HOVERED_TARGET_SCALE: f64 = 1.8;
/// Share of `extent * scale` a line actually reaches.
const LINE_REACH_RATIO: f64 = 0.6;
const FADE_IN_MS: f64 = 240.0;
const EVENT_REVEAL_STAGGER_MS: f64 = 60.0;
const NEAR_REVEAL_STAGGER_MS: f64 = 40.0;

/// Everything placement needs from the current frame.
#[derive(Debug, Clone, Copy)]
pub struct OverlayContext<'a> {
    pub camera: &'a Camera,
    pub layout: &'a TimelineLayout,
    pub smoothing: &'a SmoothedStateTracker,
    pub now_ms: f64,
}

/// Builds the overlay set for a hover target and places it every frame.
#[derive(Debug, Default)]
pub struct OverlayResolver {
    elements: IndexMap<OverlayId, OverlayElement>,
    next_id: u64,
    hovered_year: Option<i32>,
}

impl OverlayResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered_year(&self) -> Option<i32> {
        self.hovered_year
    }

    pub fn elements(&self) -> impl Iterator<Item = &OverlayElement> {
        self.elements.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Destroys every element.
    pub fn clear<S: LabelSink>(&mut self, sink: &mut S) {
        self.elements.clear();
        self.hovered_year = None;
        sink.destroy_all();
    }

    /// Replaces the overlay set wholesale for a new hover target.
    pub fn rebuild<S: LabelSink>(
        &mut self,
        hovered: Option<&YearLine>,
        lines: &[YearLine],
        layout: &TimelineLayout,
        near_band: u32,
        now_ms: f64,
        sink: &mut S,
    ) {
        self.clear(sink);
        let Some(hovered) = hovered else {
            return;
        };
        self.hovered_year = Some(hovered.year);

        self.push_year_label(hovered, 0, now_ms, sink);
        for kind in [EventKind::Historical, EventKind::Personal] {
            self.push_event_texts(hovered, kind, layout, now_ms, sink);
        }

        for line in lines.iter().filter(|line| line.has_events) {
            if let HoverRelation::Near { distance } =
                HoverRelation::classify(line.year, Some(hovered.year), near_band)
            {
                self.push_year_label(line, distance, now_ms, sink);
            }
        }

        debug!(
            hovered_year = hovered.year,
            elements = self.elements.len(),
            "overlay set rebuilt"
        );
    }

    /// Pushes fresh placements for every element through `sink`.
    pub fn reposition<S: LabelSink>(&self, context: OverlayContext<'_>, sink: &mut S) {
        for element in self.elements.values() {
            sink.update(element.id, self.placement_of(element, context));
        }
    }

    /// Placement of one element under the current camera and smoothed scale.
    #[must_use]
    pub fn placement_of(
        &self,
        element: &OverlayElement,
        context: OverlayContext<'_>,
    ) -> OverlayPlacement {
        let layout = context.layout;
        let x = context.camera.year_to_screen_x(element.year_index as f64);
        let scale = context.smoothing.scale_or_default(element.year);

        let (y, bound) = match (element.kind, element.event_kind) {
            (OverlayKind::EventText, Some(kind)) => (
                layout.axis_y
                    + kind.direction() * (EVENT_TEXT_BASE_OFFSET_PX * scale + element.y_offset),
                layout.extent * scale * LINE_REACH_RATIO,
            ),
            _ => (
                layout.axis_y + LABEL_GAP_PX + element.y_offset,
                layout.extent,
            ),
        };

        let elapsed = context.now_ms - element.created_ms - element.reveal_delay_ms;
        let reveal = (elapsed / FADE_IN_MS).clamp(0.0, 1.0);
        OverlayPlacement {
            x,
            y,
            opacity: element.target_opacity * reveal,
            visible: (y - layout.axis_y).abs() <= bound,
        }
    }

    fn push_year_label<S: LabelSink>(
        &mut self,
        line: &YearLine,
        distance: u32,
        now_ms: f64,
        sink: &mut S,
    ) {
        let target_opacity = if distance == 0 {
            1.0
        } else {
            HoverRelation::near_falloff(distance).max(NEAR_LABEL_MIN_OPACITY)
        };
        let style_class = if distance == 0 {
            "year-label"
        } else {
            "year-label near"
        };
        let element = OverlayElement {
            id: self.allocate_id(),
            kind: OverlayKind::YearLabel,
            year: line.year,
            year_index: line.year_index,
            index: None,
            event_kind: None,
            distance,
            target_opacity,
            y_offset: f64::from(distance) * NEAR_LABEL_STAGGER_PX,
            reveal_delay_ms: f64::from(distance) * NEAR_REVEAL_STAGGER_MS,
            created_ms: now_ms,
        };
        self.insert(
            element,
            OverlaySpec {
                kind: OverlayKind::YearLabel,
                year: line.year,
                text: line.year.to_string(),
                secondary_text: None,
                style_class: style_class.to_owned(),
            },
            sink,
        );
    }

    fn push_event_texts<S: LabelSink>(
        &mut self,
        line: &YearLine,
        kind: EventKind,
        layout: &TimelineLayout,
        now_ms: f64,
        sink: &mut S,
    ) {
        let reach = layout.extent * HOVERED_TARGET_SCALE * LINE_REACH_RATIO;
        for (index, event) in line.events(kind).iter().enumerate() {
            let y_offset = index as f64 * EVENT_TEXT_SPACING_PX;
            if EVENT_TEXT_BASE_OFFSET_PX * HOVERED_TARGET_SCALE + y_offset > reach {
                continue;
            }
            let element = OverlayElement {
                id: self.allocate_id(),
                kind: OverlayKind::EventText,
                year: line.year,
                year_index: line.year_index,
                index: Some(index),
                event_kind: Some(kind),
                distance: 0,
                target_opacity: 1.0,
                y_offset,
                reveal_delay_ms: (index + 1) as f64 * EVENT_REVEAL_STAGGER_MS,
                created_ms: now_ms,
            };
            self.insert(
                element,
                OverlaySpec {
                    kind: OverlayKind::EventText,
                    year: line.year,
                    text: event.title.clone(),
                    secondary_text: event.person.clone(),
                    style_class: kind.style_class().to_owned(),
                },
                sink,
            );
        }
    }

    fn insert<S: LabelSink>(&mut self, element: OverlayElement, spec: OverlaySpec, sink: &mut S) {
        sink.create(element.id, spec);
        self.elements.insert(element.id, element);
    }

    fn allocate_id(&mut self) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        id
    }
}
