use crate::core::{LineVisual, ParticleField, TimelineLayout, Viewport, YearLine};
use crate::interaction::Camera;
use crate::render::{Color, Paint, RenderFrame};

use super::background_scene_builder::{
    append_background_glow, append_main_axis, append_particles,
};
use super::hover_field_scene_builder::append_hover_energy_field;
use super::year_line_scene_builder::append_year_line;

const CLEAR_COLOR: (u8, u8, u8) = (12, 11, 10);
/// Slightly translucent clear leaves a faint trail behind moving shapes.
const CLEAR_ALPHA: f64 = 0.94;
/// Lines further than this outside the surface are not emitted.
const CULL_MARGIN_PX: f64 = 60.0;

/// Read-only view of engine state needed for one frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct SceneInput<'a> {
    pub viewport: Viewport,
    pub layout: &'a TimelineLayout,
    pub camera: &'a Camera,
    pub lines: &'a [YearLine],
    /// Smoothed state, index-aligned with `lines`.
    pub visuals: &'a [LineVisual],
    pub particles: &'a ParticleField,
    pub hovered_year: Option<i32>,
    pub time_seconds: f64,
}

/// Materializes the full frame in paint order: clear, particles, background
/// glow, axis, eventful year lines with nodes, hover energy field.
pub(super) fn build_render_frame(input: SceneInput<'_>) -> RenderFrame {
    let layout = input.layout;
    let mut frame = RenderFrame::new(input.viewport);

    let (r, g, b) = CLEAR_COLOR;
    frame.fill_rect(
        0.0,
        0.0,
        layout.width,
        layout.height,
        Paint::Solid(Color::rgb8(r, g, b, CLEAR_ALPHA)),
    );

    append_particles(&mut frame, input.particles, input.time_seconds);
    append_background_glow(&mut frame, layout, input.time_seconds);
    append_main_axis(&mut frame, layout, input.time_seconds);

    let mut hovered_x = None;
    for (line, visual) in input.lines.iter().zip(input.visuals) {
        let x = input.camera.year_to_screen_x(line.year_index as f64);
        let is_hovered = input.hovered_year == Some(line.year);
        if is_hovered {
            hovered_x = Some(x);
        }
        if !line.has_events || x < -CULL_MARGIN_PX || x > layout.width + CULL_MARGIN_PX {
            continue;
        }
        append_year_line(
            &mut frame,
            layout,
            line,
            *visual,
            x,
            is_hovered,
            input.time_seconds,
        );
    }

    if let Some(x) = hovered_x {
        append_hover_energy_field(&mut frame, layout, x, input.time_seconds);
    }
    frame
}
