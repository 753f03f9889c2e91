use tracing::{debug, trace};

use crate::interaction::{PointerButton, resolve_hover};
use crate::overlay::LabelSink;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer, S: LabelSink> TimelineEngine<R, S> {
    /// Handles pointer movement: drags the camera, or runs a hover query when
    /// the camera is at rest.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.disposed || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.interaction.on_pointer_move(x, y);
        if self.interaction.is_dragging() {
            self.camera.update_drag(x, self.clock.now_ms());
        } else if !self.camera.is_zooming() {
            self.refresh_hover_from_pointer();
        }
    }

    /// Primary press starts a drag and clears hover immediately.
    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        if self.disposed || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.interaction.on_pointer_move(x, y);
        if self.interaction.on_drag_start(button) {
            self.apply_hover(None);
            self.camera.begin_drag(x, self.clock.now_ms());
            trace!(x, "drag started");
        }
    }

    /// Primary release ends the drag and seeds inertia.
    pub fn pointer_up(&mut self, button: PointerButton, x: f64, y: f64) {
        if self.disposed {
            return;
        }
        if x.is_finite() && y.is_finite() {
            self.interaction.on_pointer_move(x, y);
        }
        if self.interaction.on_drag_end(button) {
            self.camera.end_drag();
        }
    }

    /// Pointer left the surface. A running drag keeps going until release.
    pub fn pointer_leave(&mut self) {
        if self.disposed {
            return;
        }
        self.interaction.on_pointer_leave();
        if !self.interaction.is_dragging() {
            self.apply_hover(None);
        }
    }

    /// Wheel tick: clears hover, locks (or extends) the zoom anchor at the
    /// cursor and scales the zoom target by `exp(-delta_y * sensitivity)`.
    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64) {
        if self.disposed || !delta_y.is_finite() || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.interaction.on_pointer_move(x, y);
        self.apply_hover(None);
        self.camera.begin_zoom_gesture(x, self.clock.now_ms());
        self.camera.apply_wheel_delta(delta_y);
        trace!(delta_y, zoom_target = self.camera.zoom_target(), "wheel zoom");
    }

    /// Requests a zoom level directly; clamped to the configured limits.
    pub fn set_zoom_target(&mut self, zoom_target: f64) {
        if self.disposed {
            return;
        }
        self.camera.set_zoom_target(zoom_target);
        if self.camera.is_zooming() {
            self.apply_hover(None);
        }
    }

    pub(super) fn refresh_hover_from_pointer(&mut self) {
        let hovered = self.interaction.pointer().and_then(|(x, y)| {
            resolve_hover(
                &self.lines,
                &self.camera,
                &self.layout,
                self.config.hover,
                x,
                y,
            )
        });
        self.apply_hover(hovered);
    }

    /// Stores the selection and rebuilds overlays when it changed.
    pub(super) fn apply_hover(&mut self, year: Option<i32>) {
        if !self.interaction.set_hovered_year(year) {
            return;
        }
        let hovered_line = year
            .and_then(|year| self.dataset.time_range.index_of(year))
            .and_then(|index| self.lines.get(index));
        self.overlays.rebuild(
            hovered_line,
            &self.lines,
            &self.layout,
            self.config.hover.near_band,
            self.clock.now_ms(),
            &mut self.sink,
        );
        debug!(hovered_year = ?year, "hover changed");
    }
}
