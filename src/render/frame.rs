use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{DrawCommand, Paint};

/// Backend-agnostic scene for one full redraw, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        self.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            paint,
        });
    }

    pub fn stroke_line(
        &mut self,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        stroke_width: f64,
        paint: Paint,
    ) {
        self.push(DrawCommand::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            paint,
        });
    }

    pub fn fill_arc(&mut self, cx: f64, cy: f64, radius: f64, paint: Paint) {
        self.push(DrawCommand::FillArc {
            cx,
            cy,
            radius,
            paint,
        });
    }

    pub fn stroke_arc(&mut self, cx: f64, cy: f64, radius: f64, stroke_width: f64, paint: Paint) {
        self.push(DrawCommand::StrokeArc {
            cx,
            cy,
            radius,
            stroke_width,
            paint,
        });
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
