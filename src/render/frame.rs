use crate::core::Viewport;
use crate::error::{RulerError, RulerResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// One draw call of a frame. Commands are painted in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

/// Backend-agnostic scene for one canvas draw pass.
///
/// The viewport is the canvas size; backends resize their target to it and
/// clear it before painting the commands.
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

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push_line(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push_text(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push_rect(rect);
        self
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    /// Shifts every command by `(dx, dy)` pixels.
    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return self;
        }
        for command in &mut self.commands {
            match command {
                DrawCommand::Line(line) => {
                    line.x1 += dx;
                    line.y1 += dy;
                    line.x2 += dx;
                    line.y2 += dy;
                }
                DrawCommand::Rect(rect) => {
                    rect.x += dx;
                    rect.y += dy;
                }
                DrawCommand::Text(text) => {
                    text.x += dx;
                    text.y += dy;
                }
            }
        }
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> RulerResult<()> {
        if !self.viewport.is_valid() {
            return Err(RulerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Rect(rect) => rect.validate()?,
                DrawCommand::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
