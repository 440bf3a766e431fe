use crate::core::Viewport;
use crate::error::RulerResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_viewport: Option<Viewport>,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_viewport = Some(frame.viewport);
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
