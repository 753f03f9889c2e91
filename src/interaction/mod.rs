mod camera;
mod hover;

pub use camera::{Camera, CameraMetrics, CameraState, KineticPanConfig, ZoomConfig, ZoomGesture};
pub use hover::{HoverConfig, is_in_hover_band, resolve_hover};

use serde::{Deserialize, Serialize};

/// Pointer-driven interaction mode.
///
/// Zoom gestures are tracked by the [`Camera`] and may overlap `Idle`; they
/// only suppress hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Input coordinator state: mode, last pointer position and hover selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    pointer: Option<(f64, f64)>,
    hovered_year: Option<i32>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            pointer: None,
            hovered_year: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    /// Last pointer position inside the surface, `None` after a leave.
    #[must_use]
    pub fn pointer(self) -> Option<(f64, f64)> {
        self.pointer
    }

    #[must_use]
    pub fn hovered_year(self) -> Option<i32> {
        self.hovered_year
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// Enters `Dragging`; returns `false` when the press does not start a drag.
    pub fn on_drag_start(&mut self, button: PointerButton) -> bool {
        if button != PointerButton::Primary || self.mode != InteractionMode::Idle {
            return false;
        }
        self.mode = InteractionMode::Dragging;
        true
    }

    /// Returns to `Idle`; returns `false` when no drag was running.
    pub fn on_drag_end(&mut self, button: PointerButton) -> bool {
        if button != PointerButton::Primary || self.mode != InteractionMode::Dragging {
            return false;
        }
        self.mode = InteractionMode::Idle;
        true
    }

    /// Stores the new selection; returns `true` when it changed.
    pub fn set_hovered_year(&mut self, year: Option<i32>) -> bool {
        if self.hovered_year == year {
            return false;
        }
        self.hovered_year = year;
        true
    }
}
