use crate::error::TimelineResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry before
/// a real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_command_count: usize,
    pub last_fill_rect_count: usize,
    pub last_line_count: usize,
    pub last_arc_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_command_count = frame.commands.len();
        self.last_fill_rect_count = 0;
        self.last_line_count = 0;
        self.last_arc_count = 0;
        for command in &frame.commands {
            match command {
                DrawCommand::FillRect { .. } => self.last_fill_rect_count += 1,
                DrawCommand::StrokeLine { .. } => self.last_line_count += 1,
                DrawCommand::FillArc { .. } | DrawCommand::StrokeArc { .. } => {
                    self.last_arc_count += 1;
                }
            }
        }
        Ok(())
    }
}
