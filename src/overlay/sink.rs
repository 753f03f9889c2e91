use indexmap::IndexMap;

use super::{OverlayId, OverlayPlacement, OverlaySpec};

/// Host-side text layer (DOM nodes, widget labels, ...).
pub trait LabelSink {
    fn create(&mut self, id: OverlayId, spec: OverlaySpec);
    fn update(&mut self, id: OverlayId, placement: OverlayPlacement);
    fn destroy_all(&mut self);
}

/// Sink that drops everything; for headless engines.
#[derive(Debug, Default)]
pub struct NullLabelSink;

impl LabelSink for NullLabelSink {
    fn create(&mut self, _id: OverlayId, _spec: OverlaySpec) {}

    fn update(&mut self, _id: OverlayId, _placement: OverlayPlacement) {}

    fn destroy_all(&mut self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLabel {
    pub spec: OverlaySpec,
    pub placement: Option<OverlayPlacement>,
}

/// In-memory sink keeping the live element set in creation order.
#[derive(Debug, Default)]
pub struct RecordingLabelSink {
    labels: IndexMap<OverlayId, RecordedLabel>,
    pub created_total: usize,
    pub destroy_calls: usize,
    pub updates_total: usize,
    /// Updates addressed to ids that were never created (or already destroyed).
    pub orphan_updates: usize,
}

impl RecordingLabelSink {
    #[must_use]
    pub fn labels(&self) -> &IndexMap<OverlayId, RecordedLabel> {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: OverlayId) -> Option<&RecordedLabel> {
        self.labels.get(&id)
    }

    /// Labels currently marked visible by their latest placement.
    pub fn visible(&self) -> impl Iterator<Item = &RecordedLabel> {
        self.labels
            .values()
            .filter(|label| label.placement.is_some_and(|placement| placement.visible))
    }
}

impl LabelSink for RecordingLabelSink {
    fn create(&mut self, id: OverlayId, spec: OverlaySpec) {
        self.created_total += 1;
        self.labels.insert(
            id,
            RecordedLabel {
                spec,
                placement: None,
            },
        );
    }

    fn update(&mut self, id: OverlayId, placement: OverlayPlacement) {
        self.updates_total += 1;
        match self.labels.get_mut(&id) {
            Some(label) => label.placement = Some(placement),
            None => self.orphan_updates += 1,
        }
    }

    fn destroy_all(&mut self) {
        self.destroy_calls += 1;
        self.labels.clear();
    }
}
