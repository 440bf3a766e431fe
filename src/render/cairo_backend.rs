use cairo::{Context, Format, ImageSurface, Operator};
use pango::{FontDescription, Weight};

use crate::core::Viewport;
use crate::error::{RulerError, RulerResult};
use crate::render::{
    Color, DrawCommand, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> RulerResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering through `Renderer::render` recreates the image surface
/// whenever the frame viewport differs from the current surface size, which
/// mirrors how a canvas element is resized before each repaint.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RulerResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::TRANSPARENT,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> RulerResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn ensure_surface_size(&mut self, viewport: Viewport) -> RulerResult<()> {
        let width = i32::try_from(viewport.width)
            .map_err(|_| RulerError::Backend("surface width exceeds i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| RulerError::Backend("surface height exceeds i32".to_owned()))?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> RulerResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        context.set_operator(Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Line(line) => {
                    draw_line(context, line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Rect(rect) => {
                    draw_rect(context, rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()> {
        self.ensure_surface_size(frame.viewport)?;
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
    ) -> RulerResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> RulerResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(RulerError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn draw_line(context: &Context, line: &LinePrimitive) -> RulerResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_dash(&line.stroke_style.segments(), 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    stroked
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> RulerResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string("Sans");
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    if text.bold {
        font_description.set_weight(Weight::Bold);
    }
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    apply_color(context, text.color);
    context.move_to(x, text.y - baseline);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RulerError {
    RulerError::Backend(format!("{prefix}: {err}"))
}
