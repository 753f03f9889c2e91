use cairo::{Context, Format, ImageSurface, LinearGradient, RadialGradient};
use std::f64::consts::TAU;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{DrawCommand, GradientStop, Paint, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_filled: usize,
    pub lines_stroked: usize,
    pub arcs_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external context through `CairoContextRenderer`.
/// The offscreen surface is allocated at device pixels; commands stay in CSS
/// pixels and are scaled by the frame's device pixel ratio.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TimelineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TimelineError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        frame.validate()?;

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        let ratio = frame.viewport.effective_pixel_ratio();
        context.scale(ratio, ratio);

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    paint,
                } => {
                    apply_paint(context, paint)?;
                    context.rectangle(*x, *y, *width, *height);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.rects_filled += 1;
                }
                DrawCommand::StrokeLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    stroke_width,
                    paint,
                } => {
                    apply_paint(context, paint)?;
                    context.set_line_width(*stroke_width);
                    context.move_to(*x1, *y1);
                    context.line_to(*x2, *y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_stroked += 1;
                }
                DrawCommand::FillArc {
                    cx,
                    cy,
                    radius,
                    paint,
                } => {
                    apply_paint(context, paint)?;
                    context.new_sub_path();
                    context.arc(*cx, *cy, *radius, 0.0, TAU);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill arc", err))?;
                    stats.arcs_drawn += 1;
                }
                DrawCommand::StrokeArc {
                    cx,
                    cy,
                    radius,
                    stroke_width,
                    paint,
                } => {
                    apply_paint(context, paint)?;
                    context.set_line_width(*stroke_width);
                    context.new_sub_path();
                    context.arc(*cx, *cy, *radius, 0.0, TAU);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke arc", err))?;
                    stats.arcs_drawn += 1;
                }
            }
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_paint(context: &Context, paint: &Paint) -> TimelineResult<()> {
    match paint {
        Paint::Solid(color) => {
            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            Ok(())
        }
        Paint::LinearGradient {
            x0,
            y0,
            x1,
            y1,
            stops,
        } => {
            let gradient = LinearGradient::new(*x0, *y0, *x1, *y1);
            add_stops(&gradient, stops);
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set linear gradient", err))
        }
        Paint::RadialGradient {
            cx,
            cy,
            inner_radius,
            outer_radius,
            stops,
        } => {
            let gradient = RadialGradient::new(*cx, *cy, *inner_radius, *cx, *cy, *outer_radius);
            add_stops(&gradient, stops);
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set radial gradient", err))
        }
    }
}

fn add_stops(gradient: &cairo::Gradient, stops: &[GradientStop]) {
    for stop in stops {
        let color = stop.color;
        gradient.add_color_stop_rgba(stop.offset, color.red, color.green, color.blue, color.alpha);
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::Backend(format!("{prefix}: {err}"))
}
